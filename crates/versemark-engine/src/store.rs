//! # Verse Sources
//!
//! The storage side of the system is out of scope; what lives here is the
//! capability the parser is fed through. A [`VerseSource`] yields raw markup
//! rows for a (book, chapter); a [`VersionRegistry`] owns the open sources
//! and scopes access to them explicitly instead of sharing a global
//! connection map. [`read_chapter`] maps a chapter's rows through the parser
//! into caller-owned [`VerseRecord`]s.
//!
//! [`MemorySource`] is the bundled sample source, enough for demos and for
//! exercising the pipeline without any persistence.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::record::VerseRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("version {0:?} is not open")]
    VersionNotOpen(String),
    #[error("verse source failure: {0}")]
    Source(String),
}

/// One stored row: the raw, unparsed markup of a single verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRow {
    pub book_id: u8,
    pub chapter: u32,
    pub verse: u32,
    pub markup: String,
}

/// Anything that can produce the verse rows of a chapter.
pub trait VerseSource {
    fn verses(&self, book_id: u8, chapter: u32) -> Result<Vec<VerseRow>, StoreError>;
}

/// Registry of open version sources keyed by version id.
///
/// An injected capability with explicit lifetime: callers open sources into
/// a registry they own and borrow them through [`with_version`], so no
/// global mutable state is involved and dropping the registry closes
/// everything.
///
/// [`with_version`]: VersionRegistry::with_version
#[derive(Debug, Default)]
pub struct VersionRegistry<S> {
    open: HashMap<String, S>,
}

impl<S: VerseSource> VersionRegistry<S> {
    pub fn new() -> Self {
        Self {
            open: HashMap::new(),
        }
    }

    /// Opens a source under `id`. Re-opening an id replaces the old source.
    pub fn open(&mut self, id: impl Into<String>, source: S) {
        self.open.insert(id.into(), source);
    }

    /// Closes `id`, returning whether it was open.
    pub fn close(&mut self, id: &str) -> bool {
        self.open.remove(id).is_some()
    }

    /// Runs `f` against the open source for `id`.
    pub fn with_version<T>(
        &self,
        id: &str,
        f: impl FnOnce(&S) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let source = self
            .open
            .get(id)
            .ok_or_else(|| StoreError::VersionNotOpen(id.to_string()))?;
        f(source)
    }
}

/// Parses every row of a chapter into caller-owned records. Verse order is
/// whatever the source yields; a malformed row cannot fail the chapter
/// because the parser itself never fails.
pub fn read_chapter<S: VerseSource>(
    source: &S,
    book_id: u8,
    chapter: u32,
) -> Result<Vec<VerseRecord>, StoreError> {
    Ok(source
        .verses(book_id, chapter)?
        .into_iter()
        .map(|row| VerseRecord::from_markup(row.book_id, row.chapter, row.verse, &row.markup))
        .collect())
}

/// In-memory source seeded with rows up front.
#[derive(Debug, Default)]
pub struct MemorySource {
    rows: Vec<VerseRow>,
}

impl MemorySource {
    pub fn with_rows(rows: Vec<VerseRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, book_id: u8, chapter: u32, verse: u32, markup: impl Into<String>) {
        self.rows.push(VerseRow {
            book_id,
            chapter,
            verse,
            markup: markup.into(),
        });
    }
}

impl VerseSource for MemorySource {
    fn verses(&self, book_id: u8, chapter: u32) -> Result<Vec<VerseRow>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.book_id == book_id && row.chapter == chapter)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> MemorySource {
        let mut source = MemorySource::default();
        source.push(1, 1, 1, "<TS>Em o princípio<Ts>No princípio criou Deus");
        source.push(1, 1, 2, "E a terra era sem forma");
        source.push(1, 2, 1, "Assim os céus");
        source
    }

    #[test]
    fn read_chapter_parses_each_row() {
        let records = read_chapter(&sample(), 1, 1).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "No princípio criou Deus");
        assert_eq!(records[0].titles.as_ref().unwrap()[0].text, "Em o princípio");
        assert_eq!(records[1].text, "E a terra era sem forma");
    }

    #[test]
    fn registry_scopes_access_to_open_versions() {
        let mut registry = VersionRegistry::new();
        registry.open("acf", sample());

        let count = registry
            .with_version("acf", |source| Ok(source.verses(1, 1)?.len()))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn unopened_version_fails_fast() {
        let registry: VersionRegistry<MemorySource> = VersionRegistry::new();
        let err = registry.with_version("nvi", |_| Ok(())).unwrap_err();
        assert!(matches!(err, StoreError::VersionNotOpen(id) if id == "nvi"));
    }

    #[test]
    fn closing_removes_the_source() {
        let mut registry = VersionRegistry::new();
        registry.open("acf", sample());
        assert!(registry.close("acf"));
        assert!(!registry.close("acf"));
        assert!(registry.with_version("acf", |_| Ok(())).is_err());
    }
}
