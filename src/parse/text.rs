//! Handle extraction from free-form text.
//!
//! Both extractors return matches in order of appearance and keep duplicates;
//! deduplication happens later, in [`crate::HandleCollection::normalize`].

use serde_json::Value;

use crate::config::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};

use super::patterns::{EMAIL_REGEX_GLOBAL, NOT_A_PHONE_RE, PHONE_CANDIDATE_RE};

/// Extracts email addresses from plain text.
///
/// Returns every match of the scanning email grammar, left to right, including
/// repeated addresses. An empty text yields an empty vector.
pub fn emails_from_text(text: &str) -> Vec<String> {
    EMAIL_REGEX_GLOBAL
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Same as [`emails_from_text`] for untyped input.
///
/// Anything other than a JSON string (numbers, `null`, arrays, ...) yields an
/// empty vector instead of an error.
pub fn emails_from_text_value(text: &Value) -> Vec<String> {
    match text {
        Value::String(text) => emails_from_text(text),
        _ => Vec::new(),
    }
}

/// Extracts phone number candidates from plain text.
///
/// This is a heuristic with a high false-positive rate; its results belong in
/// the uncertain phone tier. A candidate is a run of digits and separators
/// (`-`, `.`, `/`, parentheses, single spaces) with an optional leading `+`.
/// It ends before a space-separated group that cannot continue a number: one
/// with a single digit, or two digits right after a block of four or more
/// (`555-123-4567 12 items`). It is kept when it:
/// - contains between [`MIN_PHONE_DIGITS`] and [`MAX_PHONE_DIGITS`] digits
/// - is not glued to surrounding letters or digits
/// - has balanced parentheses
/// - does not look like a date, a year range, an IPv4 address or a decimal amount
///
/// A rejected candidate is scanned again from its next space, so a number
/// preceded by a stray token (`x1 555-123-4567`) is still found.
pub fn phones_from_text(text: &str) -> Vec<String> {
    let mut phones = Vec::new();
    let mut pos = 0;
    while let Some(m) = PHONE_CANDIDATE_RE.find_at(text, pos) {
        let start = m.start();
        let end = start + number_len(m.as_str());
        let candidate = &text[start..end];
        if is_standalone(text, start, end) && is_plausible_phone(candidate) {
            phones.push(candidate.to_string());
            pos = end;
        } else {
            pos = candidate
                .char_indices()
                .find(|&(_, c)| is_group_space(c))
                .map_or(end, |(offset, c)| start + offset + c.len_utf8());
        }
    }
    phones
}

/// Same as [`phones_from_text`] for untyped input; non-strings yield nothing.
pub fn phones_from_text_value(text: &Value) -> Vec<String> {
    match text {
        Value::String(text) => phones_from_text(text),
        _ => Vec::new(),
    }
}

fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_alphanumeric() || c == '+')
        && !after.is_some_and(char::is_alphanumeric)
}

fn is_group_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{00A0}')
}

/// Byte length of the leading space-separated groups that read as one number.
fn number_len(candidate: &str) -> usize {
    let mut offset = 0;
    let mut end = 0;
    let mut previous_run = 0;
    for (index, piece) in candidate.split_inclusive(is_group_space).enumerate() {
        let group = piece.trim_end_matches(is_group_space);
        let digits = group.chars().filter(char::is_ascii_digit).count();
        let continues = digits > 2 || (digits == 2 && previous_run <= 3);
        if index > 0 && !continues {
            break;
        }
        end = offset + group.len();
        previous_run = group.chars().rev().take_while(char::is_ascii_digit).count();
        offset += piece.len();
    }
    end
}

fn is_plausible_phone(candidate: &str) -> bool {
    let digits = candidate.chars().filter(char::is_ascii_digit).count();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return false;
    }
    if !has_balanced_parens(candidate) {
        return false;
    }
    !NOT_A_PHONE_RE.iter().any(|re| re.is_match(candidate))
}

fn has_balanced_parens(candidate: &str) -> bool {
    let mut depth = 0i32;
    for c in candidate.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
