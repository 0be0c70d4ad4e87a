//! Handle extraction from link URLs (`mailto:` and phone links).
//!
//! Links are a high-precision source: the scheme itself says what the payload
//! is. Entries that are empty or use another scheme are skipped silently, and a
//! malformed entry never stops the remaining ones from being processed.

use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::error_handling::HandleError;

use super::patterns::{strip_mailto_prefix, strip_phone_link_prefix, EMAIL_REGEX};

/// Extracts email addresses from a list of URLs.
///
/// Looks at `mailto:` URLs only. For each one the prefix and any `?subject=...`
/// header fields are removed, the payload is percent-decoded and split on `,`
/// (the address separator of `mailto:` URLs), and every trimmed address is kept
/// only if it matches the anchored email grammar. Output follows input order and
/// keeps duplicates.
///
/// # Examples
///
/// ```
/// use contact_handles::emails_from_urls;
///
/// let emails = emails_from_urls([
///     "mailto:alice@example.com",
///     "mailto:not-an-email",
///     "",
///     "tel:12345",
///     "mailto:BOB@EXAMPLE.COM",
/// ]);
/// assert_eq!(emails, vec!["alice@example.com", "BOB@EXAMPLE.COM"]);
/// ```
pub fn emails_from_urls<I, S>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut emails = Vec::new();
    for url in urls {
        let url = url.as_ref();
        if url.is_empty() {
            continue;
        }
        let Some(payload) = strip_mailto_prefix(url) else {
            continue;
        };
        let addresses = payload.split('?').next().unwrap_or_default();
        let decoded = percent_decode_str(addresses).decode_utf8_lossy();
        for address in decoded.split(',') {
            let address = address.trim();
            if EMAIL_REGEX.is_match(address) {
                emails.push(address.to_string());
            } else if !address.is_empty() {
                log::trace!("Skipping malformed mailto address {:?} in {:?}", address, url);
            }
        }
    }
    emails
}

/// Same as [`emails_from_urls`] for untyped input.
///
/// # Errors
///
/// Returns [`HandleError::InvalidArgument`] if `urls` is not an array. Elements
/// that are not strings (`null`, `false`, numbers, ...) are skipped.
pub fn emails_from_urls_value(urls: &Value) -> Result<Vec<String>, HandleError> {
    Ok(emails_from_urls(url_strings(urls)?))
}

/// Extracts phone numbers from a list of URLs.
///
/// Looks at `tel:`, `telprompt:` and `callto:` URLs. The payload is taken as-is
/// after stripping the prefix, percent-decoding and trimming; phone formats vary
/// too much to validate, so the scheme is the certainty signal. Output follows
/// input order and keeps duplicates.
pub fn phones_from_urls<I, S>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .filter_map(|url| {
            let payload = strip_phone_link_prefix(url.as_ref())?;
            let phone = percent_decode_str(payload).decode_utf8_lossy();
            let phone = phone.trim();
            (!phone.is_empty()).then(|| phone.to_string())
        })
        .collect()
}

/// Same as [`phones_from_urls`] for untyped input.
///
/// # Errors
///
/// Returns [`HandleError::InvalidArgument`] if `urls` is not an array.
pub fn phones_from_urls_value(urls: &Value) -> Result<Vec<String>, HandleError> {
    Ok(phones_from_urls(url_strings(urls)?))
}

/// Borrows the string elements of a JSON array of URLs.
pub(crate) fn url_strings(urls: &Value) -> Result<Vec<&str>, HandleError> {
    let items = urls
        .as_array()
        .ok_or_else(|| HandleError::invalid_argument("urls", "an array", urls))?;
    Ok(items.iter().filter_map(Value::as_str).collect())
}
