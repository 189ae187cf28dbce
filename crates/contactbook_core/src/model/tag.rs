//! Contact tag value type.
//!
//! # Invariants
//! - Tag text is trimmed, lowercased and alphanumeric.
//! - Tags compare by normalized text, so a tag set never holds two spellings
//!   of the same label.

use crate::model::fields::{FieldError, FieldKind, FieldValue};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Short label attached to a contact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validates every raw tag and collects them into a deduplicated set.
    ///
    /// The first invalid tag fails the whole list; no partial set is returned.
    pub fn validate_all<I, S>(raw_tags: I) -> Result<BTreeSet<Tag>, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw_tags
            .into_iter()
            .map(|raw| Tag::parse(raw.as_ref()))
            .collect()
    }
}

impl FieldValue for Tag {
    const KIND: FieldKind = FieldKind::Tag;
    const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    fn accept(trimmed: &str) -> Option<Self> {
        let valid = !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
        valid.then(|| Self(trimmed.to_ascii_lowercase()))
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;
    use crate::model::fields::{FieldKind, FieldValue};

    #[test]
    fn tags_are_lowercased_and_deduplicated() {
        let tags = Tag::validate_all(["Friends", "friends", " colleague "]).unwrap();
        let names: Vec<&str> = tags.iter().map(Tag::as_str).collect();
        assert_eq!(names, vec!["colleague", "friends"]);
    }

    #[test]
    fn one_bad_tag_fails_the_whole_list() {
        let err = Tag::validate_all(["a", "b", "c", "d", "e", "#friend"]).unwrap_err();
        assert_eq!(err.field(), FieldKind::Tag);
        assert_eq!(err.to_string(), Tag::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn tag_display_is_bracketed() {
        assert_eq!(Tag::parse("owes").unwrap().to_string(), "[owes]");
    }
}
