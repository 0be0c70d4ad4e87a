//! Merging extractor outputs into one [`HandleCollection`].
//!
//! Merge policy per field, link-derived sources first:
//! - `emails` = `mailto:` links, then visible text
//! - `phones` = `tel:` style links only
//! - `phonesUncertain` = phone scanning of visible text
//! - one field per social platform = classified anchor links
//!
//! Every field is then normalized. The fields are independent of each other.

use log::debug;
use serde_json::Value;

use crate::config::ExtractConfig;
use crate::error_handling::HandleError;
use crate::parse::{
    emails_from_text, emails_from_urls, phones_from_text, phones_from_urls,
    social_profiles_from_urls, url_strings, PageData,
};

use super::HandleCollection;

/// Extracts emails, phone numbers and social profile URLs from an HTML page.
///
/// `data` is an optional pass-through for the page's derived views (see
/// [`PageData`]). Views already present in it are used instead of parsing the
/// HTML; missing ones are computed and written back so the caller can reuse
/// them.
///
/// Never fails: malformed or empty HTML yields a collection with empty fields.
///
/// # Examples
///
/// ```
/// use contact_handles::parse_handles_from_html;
///
/// let html = r#"<p>Mail alice@example.com</p><a href="mailto:alice@example.com">me</a>"#;
/// let handles = parse_handles_from_html(html, None);
/// assert_eq!(handles.emails, vec!["alice@example.com"]);
/// ```
pub fn parse_handles_from_html(html: &str, data: Option<&mut PageData>) -> HandleCollection {
    parse_handles_from_html_with(html, data, &ExtractConfig::default())
}

/// [`parse_handles_from_html`] with explicit extraction settings.
pub fn parse_handles_from_html_with(
    html: &str,
    data: Option<&mut PageData>,
    config: &ExtractConfig,
) -> HandleCollection {
    let mut local = PageData::default();
    let data = data.unwrap_or(&mut local);
    data.fill_from_html(html, config.max_text_chars);
    parse_handles_from_page(data, config)
}

/// Extracts handles from already derived page views.
pub fn parse_handles_from_page(data: &PageData, config: &ExtractConfig) -> HandleCollection {
    collect_handles(data.text(), data.link_urls(), config)
}

/// Extracts emails and uncertain phone numbers from plain text.
pub fn parse_handles_from_text(text: &str) -> HandleCollection {
    parse_handles_from_text_with(text, &ExtractConfig::default())
}

/// [`parse_handles_from_text`] with explicit extraction settings.
pub fn parse_handles_from_text_with(text: &str, config: &ExtractConfig) -> HandleCollection {
    collect_handles::<&str>(text, &[], config)
}

/// Extracts emails, certain phone numbers and social profiles from a URL list.
pub fn parse_handles_from_urls<S: AsRef<str>>(urls: &[S]) -> HandleCollection {
    collect_handles("", urls, &ExtractConfig::default())
}

/// [`parse_handles_from_urls`] for untyped input.
///
/// # Errors
///
/// Returns [`HandleError::InvalidArgument`] if `urls` is not an array.
pub fn parse_handles_from_urls_value(urls: &Value) -> Result<HandleCollection, HandleError> {
    let urls = url_strings(urls)?;
    Ok(parse_handles_from_urls(&urls))
}

fn collect_handles<S: AsRef<str>>(
    text: &str,
    link_urls: &[S],
    config: &ExtractConfig,
) -> HandleCollection {
    let mut handles = HandleCollection {
        emails: emails_from_urls(link_urls),
        phones: phones_from_urls(link_urls),
        ..Default::default()
    };
    handles.emails.extend(emails_from_text(text));
    if config.include_uncertain_phones {
        handles.phones_uncertain = phones_from_text(text);
    }
    for profile in social_profiles_from_urls(link_urls) {
        handles.field_mut(profile.platform.into()).push(profile.url);
    }

    debug!(
        "Collected {} emails, {} phones, {} uncertain phones, {} social profiles from {} links and {} chars of text",
        handles.emails.len(),
        handles.phones.len(),
        handles.phones_uncertain.len(),
        handles.linked_ins.len()
            + handles.twitters.len()
            + handles.instagrams.len()
            + handles.facebooks.len(),
        link_urls.len(),
        text.len()
    );

    handles.normalize();
    handles
}
