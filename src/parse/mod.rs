//! Contact handle extractors.
//!
//! This module recovers raw handle candidates from three kinds of evidence:
//! - Free text (`text`): loose email and phone scanning
//! - Link URLs (`links`): `mailto:` and `tel:` style links, strictly validated
//! - Social profile links (`social`): LinkedIn, Twitter, Instagram, Facebook
//!
//! `html` turns a page into the text and link views the extractors consume, and
//! `patterns` holds the grammars shared by all of them. Extractors keep input
//! order and duplicates; merging and deduplication live in [`crate::handles`].

mod html;
mod links;
pub mod patterns;
mod social;
mod text;

// Re-export public API
pub use html::{extract_link_urls, extract_visible_text, PageData};
pub use links::{emails_from_urls, emails_from_urls_value, phones_from_urls, phones_from_urls_value};
pub(crate) use links::url_strings;
pub use social::{classify_profile_url, social_profiles_from_urls, Platform, SocialProfile};
pub use text::{emails_from_text, emails_from_text_value, phones_from_text, phones_from_text_value};
