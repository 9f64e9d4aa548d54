//! # Reference Strings
//!
//! The grammar collaborators use to resolve a cross-reference back to a
//! concrete verse: `"Pv 8:23"` - book abbreviation, chapter, verse,
//! matching `^[A-Za-z0-9\s]+\s\d+:\d+$`. The abbreviation table is a small
//! static map; abbreviations it does not know are an error, not a guess.
//!
//! Unlike the parser, this module is fallible and fails fast: a malformed
//! reference or unknown book is reported to the caller immediately.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("malformed reference: {0:?}")]
    Malformed(String),
    #[error("unknown book abbreviation: {0:?}")]
    UnknownBook(String),
}

/// A fully resolved verse reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseReference {
    pub book_id: u8,
    pub chapter: u32,
    pub verse: u32,
}

/// Which half of the canon a book belongs to. Books 1-39 are old, 40-66 new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn of(book_id: u8) -> Testament {
        if book_id <= 39 {
            Testament::Old
        } else {
            Testament::New
        }
    }
}

/// Abbreviation table for the book references found in module data.
const BOOK_ABBREVIATIONS: &[(&str, u8)] = &[
    ("Gn", 1),
    ("Ex", 2),
    ("Lv", 3),
    ("Nm", 4),
    ("Dt", 5),
    ("Sl", 19),
    ("Pv", 20),
    ("Is", 23),
    ("Jr", 24),
    ("Zc", 38),
    ("Mt", 40),
    ("Jo", 43),
    ("At", 44),
    ("Rm", 45),
    ("Cl", 51),
    ("Hb", 58),
];

static REFERENCE: OnceLock<Regex> = OnceLock::new();

fn reference_re() -> &'static Regex {
    REFERENCE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9\s]+)\s(\d+):(\d+)$").expect("invalid reference regex")
    })
}

/// Looks an abbreviation up in the static table.
pub fn book_id(abbreviation: &str) -> Option<u8> {
    BOOK_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == abbreviation)
        .map(|(_, id)| *id)
}

/// Parses a reference string like `"Pv 8:23"` into a [`VerseReference`].
pub fn parse(reference: &str) -> Result<VerseReference, ReferenceError> {
    let caps = reference_re()
        .captures(reference)
        .ok_or_else(|| ReferenceError::Malformed(reference.to_string()))?;

    let abbreviation = caps[1].trim();
    let book_id =
        book_id(abbreviation).ok_or_else(|| ReferenceError::UnknownBook(abbreviation.to_string()))?;
    let chapter = caps[2]
        .parse()
        .map_err(|_| ReferenceError::Malformed(reference.to_string()))?;
    let verse = caps[3]
        .parse()
        .map_err(|_| ReferenceError::Malformed(reference.to_string()))?;

    Ok(VerseReference {
        book_id,
        chapter,
        verse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Pv 8:23", 20, 8, 23)]
    #[case("Sl 33:6", 19, 33, 6)]
    #[case("Gn 1:1", 1, 1, 1)]
    #[case("Hb 11:3", 58, 11, 3)]
    fn well_formed_references_parse(
        #[case] input: &str,
        #[case] book_id: u8,
        #[case] chapter: u32,
        #[case] verse: u32,
    ) {
        assert_eq!(
            parse(input),
            Ok(VerseReference {
                book_id,
                chapter,
                verse
            })
        );
    }

    #[rstest]
    #[case("Pv 8")]
    #[case("Pv 8:23; Sl 33:6")]
    #[case("8:23")]
    #[case("")]
    fn malformed_references_fail_fast(#[case] input: &str) {
        assert_eq!(parse(input), Err(ReferenceError::Malformed(input.to_string())));
    }

    #[test]
    fn unknown_abbreviation_is_its_own_error() {
        assert_eq!(
            parse("Xy 1:1"),
            Err(ReferenceError::UnknownBook("Xy".to_string()))
        );
    }

    #[test]
    fn chapter_overflow_is_malformed() {
        let input = "Gn 99999999999:1";
        assert_eq!(parse(input), Err(ReferenceError::Malformed(input.to_string())));
    }

    #[test]
    fn testament_partition() {
        assert_eq!(Testament::of(39), Testament::Old);
        assert_eq!(Testament::of(40), Testament::New);
    }
}
