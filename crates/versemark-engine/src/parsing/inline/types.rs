use crate::models::verse::{FormattingSpan, StrongNumber};

/// Which extracted-block family a sentinel character stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Consumes the next queued cross-reference group during resolution.
    CrossReference,
    /// Visual marker only; the note text was fully captured at extraction.
    Note,
}

/// A typed placeholder recorded when the scanner appends a sentinel
/// character. Threaded alongside the text buffer so position resolution
/// never depends on re-finding specific characters in the clean text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    /// Code-point offset of the sentinel in the clean text.
    pub position: usize,
}

/// Everything the inline scan produces.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub text: String,
    pub strong_numbers: Vec<StrongNumber>,
    pub formatting_spans: Vec<FormattingSpan>,
    pub placeholders: Vec<Placeholder>,
}
