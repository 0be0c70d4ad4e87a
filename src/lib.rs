//! contact_handles library: contact handle extraction from web pages
//!
//! This library recovers email addresses, phone numbers and social profile URLs
//! from HTML pages, plain text and lists of link URLs. Evidence from several
//! sources is merged into one [`HandleCollection`] whose fields are sorted and
//! free of duplicates.
//!
//! Precision tiers:
//! - `emails`: `mailto:` links (validated against the strict grammar) plus
//!   addresses found in visible text
//! - `phones`: numbers from `tel:` style links, trusted as-is
//! - `phonesUncertain`: numbers guessed from visible text
//! - `linkedIns`, `twitters`, `instagrams`, `facebooks`: canonical profile URLs
//!
//! # Example
//!
//! ```
//! use contact_handles::{parse_handles_from_html, PageData};
//!
//! let html = r#"
//!     <p>Questions? info@example.com</p>
//!     <a href="tel:+1-202-555-0143">Call us</a>
//!     <a href="https://twitter.com/example">Follow us</a>
//! "#;
//!
//! let mut page = PageData::default();
//! let handles = parse_handles_from_html(html, Some(&mut page));
//!
//! assert_eq!(handles.emails, vec!["info@example.com"]);
//! assert_eq!(handles.phones, vec!["+1-202-555-0143"]);
//! assert_eq!(handles.twitters, vec!["https://twitter.com/example"]);
//! // The parsed page views are handed back for reuse
//! assert!(page.text().contains("Questions?"));
//! ```
//!
//! All functions are synchronous and hold no state between calls; they can be
//! called concurrently from any number of threads.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
mod handles;
pub mod initialization;
mod parse;
mod utils;

// Re-export public API
pub use config::{ExtractConfig, InputFormat, LogFormat, LogLevel};
pub use error_handling::HandleError;
pub use handles::{
    parse_handles_from_html, parse_handles_from_html_with, parse_handles_from_page,
    parse_handles_from_text, parse_handles_from_text_with, parse_handles_from_urls,
    parse_handles_from_urls_value, HandleCollection, HandleField,
};
pub use parse::patterns::{EMAIL_REGEX, EMAIL_REGEX_GLOBAL};
pub use parse::{
    classify_profile_url, emails_from_text, emails_from_text_value, emails_from_urls,
    emails_from_urls_value, extract_link_urls, extract_visible_text, phones_from_text,
    phones_from_text_value, phones_from_urls, phones_from_urls_value, social_profiles_from_urls,
    PageData, Platform, SocialProfile,
};
pub use run::extract_from_input;

// Entry point shared by the CLI and library callers holding a raw document
mod run {
    use log::info;

    use crate::config::{ExtractConfig, InputFormat};
    use crate::error_handling::HandleError;
    use crate::handles::{
        parse_handles_from_html_with, parse_handles_from_text_with, parse_handles_from_urls_value,
        HandleCollection,
    };

    /// Extracts handles from a raw input document.
    ///
    /// # Arguments
    ///
    /// * `input` - The document: HTML, plain text, or a JSON array of URLs
    /// * `format` - Which of the three `input` is
    /// * `config` - Extraction settings
    ///
    /// # Errors
    ///
    /// For [`InputFormat::Urls`], returns `HandleError::InvalidArgument` if the
    /// input is not JSON or is a JSON document other than an array. HTML and
    /// text input never fail.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_handles::{extract_from_input, ExtractConfig, InputFormat};
    ///
    /// let handles = extract_from_input(
    ///     r#"["mailto:a@example.com", "https://www.instagram.com/example/"]"#,
    ///     InputFormat::Urls,
    ///     &ExtractConfig::default(),
    /// )?;
    /// assert_eq!(handles.emails, vec!["a@example.com"]);
    /// assert_eq!(handles.instagrams, vec!["https://www.instagram.com/example"]);
    /// # Ok::<(), contact_handles::HandleError>(())
    /// ```
    pub fn extract_from_input(
        input: &str,
        format: InputFormat,
        config: &ExtractConfig,
    ) -> Result<HandleCollection, HandleError> {
        let handles = match format {
            InputFormat::Html => parse_handles_from_html_with(input, None, config),
            InputFormat::Text => parse_handles_from_text_with(input, config),
            InputFormat::Urls => {
                let value: serde_json::Value = serde_json::from_str(input).map_err(|_| {
                    HandleError::InvalidArgument {
                        parameter: "urls",
                        expected: "a JSON array",
                        found: "malformed JSON",
                    }
                })?;
                parse_handles_from_urls_value(&value)?
            }
        };

        info!(
            "Extracted {} handles ({} emails, {} phones, {} uncertain phones)",
            handles.len(),
            handles.emails.len(),
            handles.phones.len(),
            handles.phones_uncertain.len()
        );

        Ok(handles)
    }

}
