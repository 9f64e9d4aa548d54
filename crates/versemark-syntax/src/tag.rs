//! # Tag Classification
//!
//! Maps a tag body (the text between `<` and `>`) onto the tag families the
//! parsing engine acts on. The families and their spellings:
//!
//! - **Strong's numbers**: `WH1234` (Hebrew), `WG1234` (Greek), any case.
//! - **Formatting**: fixed open/close table below. Most spellings follow the
//!   module convention of distinguishing open from close by case alone
//!   (`FI`/`Fi`), with HTML-style pairs (`i`/`/i`) as alternates, so the
//!   table is matched case-sensitively.
//! - **Breaks**: `CM`, `CL`, `PB` - rendered as a single collapsing space.
//! - **Structural**: `CI`, `PF0`-`PF7`, `PI0`-`PI7` indent markers and
//!   `WT...` morphology codes - rendered as nothing.
//!
//! Anything else is [`TagKind::Unknown`]. Unknown tags are not an error:
//! verse markup comes from bulk-converted module files and the engine's
//! contract is to drop what it does not recognize.

use serde::{Deserialize, Serialize};

/// Original-language dictionary a Strong's number points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrongKind {
    Greek,
    Hebrew,
}

/// Rendering intent of a formatting span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    Italic,
    Bold,
    Underline,
    JesusWords,
    OtQuotation,
    Strikethrough,
}

/// A classified tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKind {
    /// A Strong's dictionary number marker. Emits nothing; records a position.
    Strong { kind: StrongKind, number: String },
    /// Opens a formatting span.
    FormatOpen(FormatKind),
    /// Closes the nearest open span of the same kind.
    FormatClose(FormatKind),
    /// Paragraph/line break. Becomes one collapsing space.
    Break,
    /// Layout marker with no textual effect.
    Structural,
    /// Unrecognized tag. Dropped silently.
    Unknown,
}

/// Formatting spellings: (open, close, kind). Matched case-sensitively
/// because open and close often differ only by case.
const FORMAT_TAGS: &[(&str, &str, FormatKind)] = &[
    ("FI", "Fi", FormatKind::Italic),
    ("i", "/i", FormatKind::Italic),
    ("b", "/b", FormatKind::Bold),
    ("u", "/u", FormatKind::Underline),
    ("FR", "Fr", FormatKind::JesusWords),
    ("FO", "Fo", FormatKind::OtQuotation),
    ("s", "/s", FormatKind::Strikethrough),
];

const BREAK_TAGS: &[&str] = &["CM", "CL", "PB"];

/// Classifies a tag body into its family.
pub fn classify(body: &str) -> TagKind {
    let body = body.trim();

    if let Some(strong) = strong_number(body) {
        return strong;
    }

    for (open, close, kind) in FORMAT_TAGS {
        if body == *open {
            return TagKind::FormatOpen(*kind);
        }
        if body == *close {
            return TagKind::FormatClose(*kind);
        }
    }

    if BREAK_TAGS.iter().any(|t| body.eq_ignore_ascii_case(t)) {
        return TagKind::Break;
    }

    if is_structural(body) {
        return TagKind::Structural;
    }

    TagKind::Unknown
}

/// `WH1234` / `WG1234` in any case: W, dictionary letter, then digits only.
fn strong_number(body: &str) -> Option<TagKind> {
    let mut chars = body.chars();
    if !matches!(chars.next(), Some('W') | Some('w')) {
        return None;
    }
    let kind = match chars.next() {
        Some('H') | Some('h') => StrongKind::Hebrew,
        Some('G') | Some('g') => StrongKind::Greek,
        _ => return None,
    };
    let number = chars.as_str();
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(TagKind::Strong {
        kind,
        number: number.to_string(),
    })
}

fn is_structural(body: &str) -> bool {
    if body.eq_ignore_ascii_case("CI") {
        return true;
    }
    // <PF0>-<PF7> / <PI0>-<PI7> indentation markers.
    let b = body.as_bytes();
    if b.len() == 3
        && b[0].eq_ignore_ascii_case(&b'p')
        && (b[1].eq_ignore_ascii_case(&b'f') || b[1].eq_ignore_ascii_case(&b'i'))
        && b[2].is_ascii_digit()
    {
        return true;
    }
    // <WT...> word-type/morphology codes.
    body.len() > 2 && body.as_bytes()[..2].eq_ignore_ascii_case(b"WT")
}
