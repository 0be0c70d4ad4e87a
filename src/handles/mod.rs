//! The extraction result and its normalization.
//!
//! [`HandleCollection`] has one field per handle kind. Before normalization a
//! field holds values concatenated in source priority order (link-derived
//! values first, text-derived values after). [`HandleCollection::normalize`]
//! turns every field into a sorted, duplicate-free list.

mod aggregate;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter as EnumIterMacro, IntoStaticStr};

use crate::parse::Platform;

pub use aggregate::{
    parse_handles_from_html, parse_handles_from_html_with, parse_handles_from_page,
    parse_handles_from_text, parse_handles_from_text_with, parse_handles_from_urls,
    parse_handles_from_urls_value,
};

/// Contact handles recovered from one page, text or URL list.
///
/// Every field is always present; a kind with no matches is an empty list.
/// Serializes with camelCase keys (`phonesUncertain`, `linkedIns`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleCollection {
    /// Email addresses from `mailto:` links and visible text
    pub emails: Vec<String>,
    /// Phone numbers from `tel:` style links
    pub phones: Vec<String>,
    /// Phone numbers guessed from visible text
    pub phones_uncertain: Vec<String>,
    /// LinkedIn profile URLs
    pub linked_ins: Vec<String>,
    /// Twitter / X profile URLs
    pub twitters: Vec<String>,
    /// Instagram profile URLs
    pub instagrams: Vec<String>,
    /// Facebook profile URLs
    pub facebooks: Vec<String>,
}

/// The fields of a [`HandleCollection`], in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum HandleField {
    /// [`HandleCollection::emails`]
    Emails,
    /// [`HandleCollection::phones`]
    Phones,
    /// [`HandleCollection::phones_uncertain`]
    PhonesUncertain,
    /// [`HandleCollection::linked_ins`]
    LinkedIns,
    /// [`HandleCollection::twitters`]
    Twitters,
    /// [`HandleCollection::instagrams`]
    Instagrams,
    /// [`HandleCollection::facebooks`]
    Facebooks,
}

impl HandleField {
    /// Serialized key of the field, e.g. `phonesUncertain`.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

impl From<Platform> for HandleField {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::LinkedIn => HandleField::LinkedIns,
            Platform::Twitter => HandleField::Twitters,
            Platform::Instagram => HandleField::Instagrams,
            Platform::Facebook => HandleField::Facebooks,
        }
    }
}

impl HandleCollection {
    /// Values of one field.
    pub fn field(&self, field: HandleField) -> &[String] {
        match field {
            HandleField::Emails => &self.emails,
            HandleField::Phones => &self.phones,
            HandleField::PhonesUncertain => &self.phones_uncertain,
            HandleField::LinkedIns => &self.linked_ins,
            HandleField::Twitters => &self.twitters,
            HandleField::Instagrams => &self.instagrams,
            HandleField::Facebooks => &self.facebooks,
        }
    }

    /// Mutable values of one field.
    pub fn field_mut(&mut self, field: HandleField) -> &mut Vec<String> {
        match field {
            HandleField::Emails => &mut self.emails,
            HandleField::Phones => &mut self.phones,
            HandleField::PhonesUncertain => &mut self.phones_uncertain,
            HandleField::LinkedIns => &mut self.linked_ins,
            HandleField::Twitters => &mut self.twitters,
            HandleField::Instagrams => &mut self.instagrams,
            HandleField::Facebooks => &mut self.facebooks,
        }
    }

    /// Profile URLs of one social platform.
    pub fn profiles(&self, platform: Platform) -> &[String] {
        self.field(platform.into())
    }

    /// Sorts every field ascending and removes repeated values.
    ///
    /// Sorting is plain string ordering (so `"B@x.com"` sorts before
    /// `"a@x.com"`). Normalizing an already normalized collection changes
    /// nothing.
    pub fn normalize(&mut self) {
        for field in HandleField::iter() {
            let values = self.field_mut(field);
            values.sort();
            values.dedup();
        }
    }

    /// Consuming form of [`HandleCollection::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Returns `true` if no field has any value.
    pub fn is_empty(&self) -> bool {
        HandleField::iter().all(|field| self.field(field).is_empty())
    }

    /// Number of values across all fields.
    pub fn len(&self) -> usize {
        HandleField::iter().map(|field| self.field(field).len()).sum()
    }

    /// Returns `true` if every field is sorted ascending without repeats.
    pub fn is_normalized(&self) -> bool {
        HandleField::iter().all(|field| {
            self.field(field)
                .windows(2)
                .all(|pair| pair[0] < pair[1])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unsorted() -> HandleCollection {
        HandleCollection {
            emails: vec![
                "b@example.com".into(),
                "a@example.com".into(),
                "b@example.com".into(),
                "A@example.com".into(),
            ],
            phones: vec!["+2".into(), "+1".into(), "+2".into()],
            phones_uncertain: vec![],
            linked_ins: vec![],
            twitters: vec![
                "https://twitter.com/b".into(),
                "https://twitter.com/a".into(),
                "https://twitter.com/a".into(),
            ],
            instagrams: vec!["x".into()],
            facebooks: vec!["y".into(), "y".into()],
        }
    }

    #[test]
    fn test_normalize_sorts_and_dedups_every_field() {
        let handles = unsorted().normalized();
        assert_eq!(
            handles.emails,
            vec!["A@example.com", "a@example.com", "b@example.com"]
        );
        assert_eq!(handles.phones, vec!["+1", "+2"]);
        assert_eq!(
            handles.twitters,
            vec!["https://twitter.com/a", "https://twitter.com/b"]
        );
        assert_eq!(handles.instagrams, vec!["x"]);
        assert_eq!(handles.facebooks, vec!["y"]);
        assert!(handles.phones_uncertain.is_empty());
        assert!(handles.is_normalized());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = unsorted().normalized();
        let twice = once.clone().normalized();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_normalized_detects_disorder() {
        let handles = unsorted();
        assert!(!handles.is_normalized());
        assert!(HandleCollection::default().is_normalized());
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(HandleCollection::default().is_empty());
        assert_eq!(HandleCollection::default().len(), 0);
        let handles = unsorted();
        assert!(!handles.is_empty());
        assert_eq!(handles.len(), 13);
    }

    #[test]
    fn test_every_field_is_reachable() {
        let mut handles = HandleCollection::default();
        for field in HandleField::iter() {
            handles.field_mut(field).push(field.key().to_string());
        }
        for field in HandleField::iter() {
            assert_eq!(handles.field(field), &[field.key().to_string()]);
        }
    }

    #[test]
    fn test_platform_fields() {
        let mut handles = HandleCollection::default();
        handles.linked_ins.push("https://www.linkedin.com/in/x".into());
        assert_eq!(
            handles.profiles(Platform::LinkedIn),
            &["https://www.linkedin.com/in/x".to_string()]
        );
        assert!(handles.profiles(Platform::Facebook).is_empty());
    }

    #[test]
    fn test_field_keys_are_camel_case() {
        let keys: Vec<&str> = HandleField::iter().map(HandleField::key).collect();
        assert_eq!(
            keys,
            vec![
                "emails",
                "phones",
                "phonesUncertain",
                "linkedIns",
                "twitters",
                "instagrams",
                "facebooks",
            ]
        );
    }

    #[test]
    fn test_serialized_keys_match_field_keys() {
        let value = serde_json::to_value(HandleCollection::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), HandleField::iter().count());
        for field in HandleField::iter() {
            assert_eq!(object.get(field.key()), Some(&serde_json::json!([])));
        }
    }
}
