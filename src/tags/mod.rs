//! Tag and suggestion data types.
//!
//! Both lists are owned by the caller. The widget only ever reads them and
//! reports requested changes back as actions.

mod filter;

pub use filter::filter_suggestions;

use serde::{Deserialize, Serialize};

/// A committed tag, shown as a removable chip.
///
/// Tags are identified by their position in the caller's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Display name of the tag.
    pub name: String,
    /// Disabled tags are rendered dimmed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl Tag {
    /// Create an enabled tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disabled: false,
        }
    }
}

impl From<Suggestion> for Tag {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            name: suggestion.name,
            disabled: suggestion.disabled,
        }
    }
}

/// A candidate tag offered while typing.
///
/// Deserializes from either a bare string or a `{ name, disabled }` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SuggestionRepr")]
pub struct Suggestion {
    /// Display name, also the text matched against the query.
    pub name: String,
    /// Disabled suggestions are listed but cannot be committed.
    pub disabled: bool,
}

impl Suggestion {
    /// Create an enabled suggestion.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disabled: false,
        }
    }

    /// Create a suggestion that cannot be committed.
    pub fn disabled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disabled: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SuggestionRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        disabled: bool,
    },
}

impl From<SuggestionRepr> for Suggestion {
    fn from(repr: SuggestionRepr) -> Self {
        match repr {
            SuggestionRepr::Name(name) => Suggestion::new(name),
            SuggestionRepr::Full { name, disabled } => Suggestion { name, disabled },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_suggestion_keeps_flag() {
        let tag = Tag::from(Suggestion::disabled("rust"));
        assert_eq!(tag.name, "rust");
        assert!(tag.disabled);
    }

    #[test]
    fn test_suggestions_deserialize_from_mixed_json() {
        let json = r#"["apple", {"name": "banana", "disabled": true}, {"name": "cherry"}]"#;
        let items: Vec<Suggestion> = serde_json::from_str(json).unwrap();

        assert_eq!(
            items,
            vec![
                Suggestion::new("apple"),
                Suggestion::disabled("banana"),
                Suggestion::new("cherry"),
            ]
        );
    }

    #[test]
    fn test_tag_serialization_omits_false_disabled() {
        let json = serde_json::to_string(&Tag::new("docs")).unwrap();
        assert_eq!(json, r#"{"name":"docs"}"#);
    }

    #[test]
    fn test_tag_deserialize_defaults_disabled() {
        let tag: Tag = serde_json::from_str(r#"{"name":"docs"}"#).unwrap();
        assert!(!tag.disabled);
    }
}
