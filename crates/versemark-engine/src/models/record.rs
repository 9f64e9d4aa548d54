//! Caller-owned verse records.
//!
//! A [`ParsedVerse`] is transient: its fields are copied into a
//! [`VerseRecord`] keyed by (book, chapter, verse) and the parse result is
//! discarded. This is the row shape presentation layers and search results
//! work with.

use serde::{Deserialize, Serialize};

use super::verse::{
    CrossReferenceLink, FormattingSpan, InterlinearEntry, Note, ParsedVerse, StrongNumber, Title,
};
use crate::parsing::parse_verse;

/// One verse of one version, with clean text and whatever annotations its
/// markup carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRecord {
    pub book_id: u8,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<Title>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_reference_links: Option<Vec<CrossReferenceLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_references: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong_numbers: Option<Vec<StrongNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interlinear: Option<Vec<InterlinearEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatting_spans: Option<Vec<FormattingSpan>>,
}

impl VerseRecord {
    /// Parses `markup` and builds the record in one step.
    pub fn from_markup(book_id: u8, chapter: u32, verse: u32, markup: &str) -> Self {
        Self::from_parsed(book_id, chapter, verse, parse_verse(markup))
    }

    /// Copies a parse result into a keyed record.
    pub fn from_parsed(book_id: u8, chapter: u32, verse: u32, parsed: ParsedVerse) -> Self {
        Self {
            book_id,
            chapter,
            verse,
            text: parsed.clean_text,
            titles: parsed.titles,
            notes: parsed.notes,
            cross_reference_links: parsed.cross_reference_links,
            cross_references: parsed.cross_references,
            strong_numbers: parsed.strong_numbers,
            interlinear: parsed.interlinear,
            formatting_spans: parsed.formatting_spans,
        }
    }

    /// Synthetic numeric identity: book, zero-padded chapter and verse run
    /// together, e.g. (1, 1, 3) -> 1001003.
    pub fn id(&self) -> i64 {
        self.book_id as i64 * 1_000_000 + self.chapter as i64 * 1_000 + self.verse as i64
    }
}
