//! # The Parsing Pipeline
//!
//! Four stages in fixed order; later stages assume earlier ones already
//! normalized their input:
//!
//! 1. [`blocks`] - whole-block constructs out, sentinels/spaces in
//! 2. [`inline`] - clean text built tag by tag, offsets recorded
//! 3. [`resolve`] - sentinels stamped with final offsets, groups attached
//! 4. assembly - everything packaged into an immutable [`ParsedVerse`]
//!
//! Every stage is a leaf pure function over strings and lists; a call
//! allocates only local state, so independent verses can be parsed from any
//! number of threads without synchronization.

pub mod blocks;
pub mod inline;
pub mod resolve;
pub mod text;

use crate::models::verse::ParsedVerse;

/// Parses one verse's raw markup into clean text plus annotations.
///
/// Pure, deterministic and infallible: identical input yields identical
/// output, and malformed markup degrades (dropped tags, salvaged spans,
/// literal leftovers) instead of failing. An empty input yields an empty
/// `ParsedVerse` with every annotation list absent - a normal result, not an
/// error.
pub fn parse_verse(raw: &str) -> ParsedVerse {
    let (stream, extracted) = blocks::extract(raw);
    let scan = inline::scan(&stream);
    let links = resolve::resolve(&scan.placeholders, extracted.ref_groups);

    ParsedVerse {
        clean_text: scan.text,
        titles: some_if_nonempty(extracted.titles),
        notes: some_if_nonempty(extracted.notes),
        cross_reference_links: some_if_nonempty(links),
        cross_references: some_if_nonempty(extracted.cross_references),
        strong_numbers: some_if_nonempty(scan.strong_numbers),
        interlinear: some_if_nonempty(extracted.interlinear),
        formatting_spans: some_if_nonempty(scan.formatting_spans),
    }
}

/// Empty lists are "absent", not empty-present.
fn some_if_nonempty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
