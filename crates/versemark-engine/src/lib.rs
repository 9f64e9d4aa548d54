//! # versemark-engine
//!
//! Parses the inline markup language embedded in stored scripture text into a
//! structured document: clean display text plus side-channel annotations
//! (section titles, translator notes, grouped cross-references, Strong's
//! numbers, interlinear glosses, formatting spans). All annotation offsets
//! index the final clean text in code points, so downstream overlays (note
//! icons, reference chips, highlight spans) can rely on them.
//!
//! The entry point is [`parse_verse`]: a pure, synchronous, infallible
//! transformation. Malformed markup never aborts a verse - unrecognized tags
//! are dropped, unterminated spans are salvaged, and unmatched block patterns
//! stay in the text as literal content.
//!
//! Collaborator interfaces live alongside the parser: the reference-string
//! grammar ([`reference`]), the injected verse-source capability ([`store`])
//! and search highlighting over clean text ([`search`]).

pub mod models;
pub mod parsing;
pub mod reference;
pub mod search;
pub mod store;

// Re-export key types for easier usage
pub use models::record::VerseRecord;
pub use models::verse::*;
pub use parsing::parse_verse;
