//! Tag support for rolo.
//!
//! Tags are short alphanumeric labels attached to a person. A record carries
//! them as a [`TagSet`], which has set semantics: adding the same tag twice
//! keeps a single copy, and insertion order is irrelevant (tags are kept
//! sorted so records compare and serialize deterministically).
//!
//! See [`crate::validation::validate_tag_name`] for the naming rule.

use crate::error::{Result, RoloError};
use crate::validation::{validate_tag_name, Field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single validated tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        validate_tag_name(&name).map_err(|e| RoloError::validation(Field::Tag, e))?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        Tag::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// The set of tags attached to one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tag set from raw names, validating each one.
    /// Duplicate names collapse into a single tag.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| Tag::new(name.as_ref()))
            .collect::<Result<BTreeSet<_>>>()
            .map(Self)
    }

    /// Returns false if the tag was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.0.insert(tag)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|t| t.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names_collapse() {
        let tags = TagSet::from_names(["friend", "friend"]).unwrap();
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("friend"));
    }

    #[test]
    fn test_order_is_irrelevant() {
        let a = TagSet::from_names(["work", "family"]).unwrap();
        let b = TagSet::from_names(["family", "work"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "[family][work]");
    }

    #[test]
    fn test_invalid_tag_rejected() {
        match TagSet::from_names(["ok", "not ok"]) {
            Err(RoloError::Validation { field, .. }) => assert_eq!(field, Field::Tag),
            other => panic!("Expected tag validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut tags = TagSet::new();
        assert!(tags.insert(Tag::new("colleague").unwrap()));
        assert!(!tags.insert(Tag::new(" colleague ").unwrap()));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_deserialize_validates() {
        let tags: TagSet = serde_json::from_str(r#"["b", "a", "a"]"#).unwrap();
        assert_eq!(tags.len(), 2);

        let bad: std::result::Result<TagSet, _> = serde_json::from_str(r#"["a-b"]"#);
        assert!(bad.is_err());
    }
}
