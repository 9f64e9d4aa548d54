//! # Block Extraction
//!
//! Stage 1 of the pipeline: whole-block constructs are removed from the raw
//! stream and collected into side lists, leaving a space or a sentinel
//! character in their place. Rules run in a fixed order because earlier rules
//! must remove content that later rules' patterns cannot skip over:
//!
//! 1. title blocks
//! 2. cross-reference groups
//! 3. commentary notes
//! 4. generic note spans
//! 5. interlinear blocks
//! 6. flat cross-reference tags
//!
//! Each rule is a pure function `(stream, &mut Extracted) -> stream`; the
//! spelling knowledge of each block family lives in its own [`kinds`] module.
//! A block pattern that does not match leaves the input unchanged - the
//! leftovers fall through to the inline scanner, which drops their tags.

pub mod kinds;

use crate::models::verse::{CrossReferenceGroup, InterlinearEntry, Note, Title};

/// Side lists collected by the block extraction pass.
#[derive(Debug, Default)]
pub struct Extracted {
    pub titles: Vec<Title>,
    pub notes: Vec<Note>,
    pub ref_groups: Vec<CrossReferenceGroup>,
    pub interlinear: Vec<InterlinearEntry>,
    pub cross_references: Vec<String>,
}

/// Runs every extraction rule in order over `raw`.
pub fn extract(raw: &str) -> (String, Extracted) {
    let mut out = Extracted::default();
    let stream = kinds::title::extract(raw, &mut out);
    let stream = kinds::ref_group::extract(&stream, &mut out);
    let stream = kinds::note::extract_commentary(&stream, &mut out);
    let stream = kinds::note::extract_generic(&stream, &mut out);
    let stream = kinds::interlinear::extract(&stream, &mut out);
    let stream = kinds::flat_ref::extract(&stream, &mut out);
    (stream, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rules_run_in_order_over_mixed_markup() {
        let raw = "<TS>Em o princípio<Ts>No princípio<sup><RF q=ℕ>nota<Rf></sup> criou<RX Sl 33:6>";
        let (stream, extracted) = extract(raw);
        assert_eq!(stream, " No princípioℕ criou ");
        assert_eq!(extracted.titles.len(), 1);
        assert_eq!(extracted.notes.len(), 1);
        assert_eq!(extracted.cross_references, vec!["Sl 33:6".to_string()]);
    }

    #[test]
    fn unmatched_block_patterns_are_left_alone() {
        let raw = "<TS>título sem fechamento";
        let (stream, extracted) = extract(raw);
        assert_eq!(stream, raw);
        assert!(extracted.titles.is_empty());
    }
}
