//! Grammars for contact handles.
//!
//! The email grammar is defined once ([`EMAIL_PATTERN`]) and compiled into two
//! forms by [`email_pattern`]:
//! - an anchored form that only accepts a string consisting of exactly one address
//! - a scanning form that finds every embedded address in a larger text
//!
//! Both are case-insensitive. The grammar is permissive on purpose (quoted local
//! parts, bracketed IP-literal domains); the link extractor regains precision by
//! re-checking `mailto:` payloads against the anchored form.
//!
//! `regex::Regex` holds no cursor state between calls, so the compiled statics
//! below can be shared freely between threads and calls.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

/// RFC 5322 inspired email grammar shared by the anchored and scanning forms.
///
/// Local part: dot-atom or quoted string. Domain: dotted DNS labels or a
/// bracketed IPv4 / general address literal.
pub const EMAIL_PATTERN: &str = concat!(
    r#"(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
    r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
    r"@",
    r"(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?",
    r"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}",
    r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?",
    r"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])",
);

/// Prefix of links that carry an email address.
const MAILTO_PREFIX_PATTERN: &str = r"(?i)^mailto:";

/// Prefixes of links that carry a phone number with the same certainty as `tel:`.
const PHONE_LINK_PREFIX_PATTERN: &str = r"(?i)^(?:tel|telprompt|callto):";

/// Loose phone candidate: optional `+`/`(`, then digits mixed with `()./-`,
/// ending on a digit. Digit groups may be split by single spaces, tabs or
/// NBSPs; a longer gap ends the candidate. Candidates are cut and filtered
/// further in [`crate::parse::phones_from_text`].
const PHONE_CANDIDATE_PATTERN: &str = r"\+?\(?\d(?:[\d().\-/]|[ \t\u{00A0}][\d(])*\d";

/// Builds the email grammar in its anchored or scanning form.
///
/// Case folding is ASCII only: `ſ` (U+017F) and the Kelvin sign (U+212A) are
/// not letters of an address even though Unicode folds them to `s` and `k`.
pub fn email_pattern(anchored: bool) -> String {
    if anchored {
        format!("(?i-u)^(?:{EMAIL_PATTERN})$")
    } else {
        format!("(?i-u)(?:{EMAIL_PATTERN})")
    }
}

/// Matches a string consisting of exactly one email address.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(&email_pattern(true), "EMAIL_REGEX"));

/// Finds every email address embedded in a text.
pub static EMAIL_REGEX_GLOBAL: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(&email_pattern(false), "EMAIL_REGEX_GLOBAL"));

pub(crate) static MAILTO_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(MAILTO_PREFIX_PATTERN, "MAILTO_PREFIX_RE"));

pub(crate) static PHONE_LINK_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PHONE_LINK_PREFIX_PATTERN, "PHONE_LINK_PREFIX_RE"));

pub(crate) static PHONE_CANDIDATE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PHONE_CANDIDATE_PATTERN, "PHONE_CANDIDATE_RE"));

// Shapes that look like phone numbers but are not: ISO and European dates,
// year ranges, dotted-quad addresses and decimal amounts.
pub(crate) static NOT_A_PHONE_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        (r"^\d{4}[-./]\d{1,2}[-./]\d{1,2}$", "ISO date"),
        (r"^\d{1,2}[-./]\d{1,2}[-./]\d{4}$", "day-month-year date"),
        (r"^\d{4} ?- ?\d{4}$", "year range"),
        (r"^\d{1,3}(?:\.\d{1,3}){3}$", "IPv4 address"),
        (r"^\d+\.\d{1,2}$", "decimal amount"),
    ]
    .iter()
    .map(|(pattern, context)| compile_regex_unsafe(pattern, context))
    .collect()
});

/// Returns the remainder of `url` after a `mailto:` prefix, if it has one.
pub(crate) fn strip_mailto_prefix(url: &str) -> Option<&str> {
    MAILTO_PREFIX_RE.find(url).map(|m| &url[m.end()..])
}

/// Returns the remainder of `url` after a phone link prefix, if it has one.
pub(crate) fn strip_phone_link_prefix(url: &str) -> Option<&str> {
    PHONE_LINK_PREFIX_RE.find(url).map(|m| &url[m.end()..])
}
