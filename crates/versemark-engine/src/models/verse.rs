//! The parsed-verse data model.
//!
//! All position fields are code-point offsets into the final clean text.
//! Annotation lists preserve source left-to-right discovery order and are
//! `None` rather than empty when nothing was found, so serialized records
//! omit them entirely.

use serde::{Deserialize, Serialize};

pub use versemark_syntax::{FormatKind, StrongKind};

/// A section title extracted from a title block.
///
/// When the block carried an introduction label, `text` is
/// `"label | body"`; otherwise it is the block body alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub level: u8,
    pub text: String,
}

/// A translator or commentary note. Miscellaneous notes may carry their
/// source attribute as a leading `[category]` prefix inside the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note {
    pub text: String,
}

/// One anchor inside a cross-reference group, before position resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferenceAnchor {
    /// Display text of the anchor, e.g. `"Pv 8:23"`.
    pub text: String,
    /// Reference string, e.g. `"Pv 8:23"`, resolvable via [`crate::reference`].
    pub reference: String,
}

/// An ordered group of anchors extracted from one cross-reference block.
/// All of a group's anchors resolve to the same sentinel position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrossReferenceGroup {
    pub anchors: Vec<CrossReferenceAnchor>,
}

/// A position-resolved cross-reference anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferenceLink {
    pub text: String,
    pub reference: String,
    /// Offset of the group's sentinel in the clean text.
    pub position: usize,
}

/// An original-language dictionary number attached to a text position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrongNumber {
    pub kind: StrongKind,
    pub number: String,
    pub position: usize,
}

/// One interlinear gloss. Every field is optional; an entry always has at
/// least one present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterlinearEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hebrew: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greek: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

/// A character range of the clean text carrying a rendering intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingSpan {
    pub kind: FormatKind,
    pub start: usize,
    pub end: usize,
    /// The clean-text slice `[start, end)`, stored for direct consumption.
    pub text: String,
}

/// The complete result of parsing one verse's markup.
///
/// Built fresh per [`crate::parse_verse`] call and never mutated; callers
/// copy its fields into their own verse records
/// ([`crate::models::record::VerseRecord`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedVerse {
    pub clean_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<Title>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_reference_links: Option<Vec<CrossReferenceLink>>,
    /// Flat `<RX>` reference strings, distinct from grouped links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_references: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong_numbers: Option<Vec<StrongNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interlinear: Option<Vec<InterlinearEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatting_spans: Option<Vec<FormattingSpan>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lists_serialize_as_absent() {
        let parsed = ParsedVerse {
            clean_text: "No princípio".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["cleanText"], "No princípio");
    }

    #[test]
    fn notes_serialize_as_plain_strings() {
        let note = Note {
            text: "Gn 1:1 - NO PRINCÍPIO".to_string(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.is_string());
    }

    #[test]
    fn format_kind_serializes_kebab_case() {
        let span = FormattingSpan {
            kind: FormatKind::JesusWords,
            start: 0,
            end: 1,
            text: "a".to_string(),
        };
        let json = serde_json::to_value(&span).unwrap();
        assert_eq!(json["kind"], "jesus-words");
    }
}
