//! Configuration constants.
//!
//! Limits used by the extractors and their defaults.

// HTML text extraction limits
/// Default maximum visible text to extract from a page, in characters (1M)
/// Text beyond the limit is not scanned for emails or phone numbers
pub const DEFAULT_MAX_TEXT_CHARS: usize = 1_000_000;

// Phone number heuristics
/// Fewest digits a phone number found in free text may have
/// Shorter runs are mostly house numbers, prices and counters
pub const MIN_PHONE_DIGITS: usize = 7;
/// Most digits a phone number may have (E.164 maximum)
pub const MAX_PHONE_DIGITS: usize = 15;
