//! Commentary and miscellaneous note spans.
//!
//! A superscripted note span whose attribute is the `ℕ` marker is translator
//! commentary. Its body usually opens with a bold header of the form
//! `<b><a href='…'>Gn 1:1</a> - TITLE</b>`; when present, the note is emitted
//! as `"Gn 1:1 - TITLE\n\ncontent"` with paragraph breaks in the content
//! preserved as newlines.
//!
//! Any note span left after the cross-reference and commentary rules ran is
//! a miscellaneous note; its attribute, when present, is kept as a
//! `[category]` prefix. Both kinds are replaced by the note sentinel, a
//! purely visual placeholder that is never position-resolved.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::ref_group::RefGroup;
use crate::models::verse::Note;
use crate::parsing::blocks::Extracted;
use crate::parsing::text::{collapse_note_ws, collapse_ws, strip_tags};

pub struct CommentaryNote;

impl CommentaryNote {
    /// Attribute value marking a note span as translator commentary.
    pub const MARKER: char = 'ℕ';

    /// Placeholder left in the stream for commentary and generic notes.
    pub const SENTINEL: char = 'ℕ';
}

static COMMENTARY: OnceLock<Regex> = OnceLock::new();
static HEADER: OnceLock<Regex> = OnceLock::new();
static BREAKS: OnceLock<Regex> = OnceLock::new();
static GENERIC: OnceLock<Regex> = OnceLock::new();

fn commentary_re() -> &'static Regex {
    COMMENTARY.get_or_init(|| {
        Regex::new(r"(?s)<sup><RF q=ℕ>(.*?)<Rf></sup>").expect("invalid commentary regex")
    })
}

fn header_re() -> &'static Regex {
    HEADER.get_or_init(|| {
        Regex::new(r"(?s)^\s*<b><a[^>]*>([^<]*)</a>\s*-\s*(.*?)</b>(.*)$")
            .expect("invalid note header regex")
    })
}

fn breaks_re() -> &'static Regex {
    BREAKS.get_or_init(|| Regex::new(r"(?i)<(?:CM|CL|PB)>").expect("invalid break regex"))
}

fn generic_re() -> &'static Regex {
    GENERIC.get_or_init(|| {
        // case-sensitive: <Rf> is the close spelling, never an opener
        Regex::new(r"(?s)(?:<sup>)?<RF(?:\s+q=([^>]*))?>(.*?)<Rf>(?:</sup>)?")
            .expect("invalid generic note regex")
    })
}

/// Removes commentary note spans, pushing their formatted text onto `out`.
pub fn extract_commentary(stream: &str, out: &mut Extracted) -> String {
    commentary_re()
        .replace_all(stream, |caps: &Captures| {
            if let Some(text) = commentary_text(&caps[1]) {
                out.notes.push(Note { text });
            }
            CommentaryNote::SENTINEL.to_string()
        })
        .into_owned()
}

fn commentary_text(body: &str) -> Option<String> {
    let (header, content) = match header_re().captures(body) {
        Some(caps) => {
            let reference = caps[1].trim().to_string();
            let title = collapse_ws(&strip_tags(&caps[2], " "));
            let header = if title.is_empty() {
                reference
            } else {
                format!("{reference} - {title}")
            };
            (Some(header), caps[3].to_string())
        }
        None => (None, body.to_string()),
    };

    let content = breaks_re().replace_all(&content, "\n");
    let content = collapse_note_ws(&strip_tags(&content, ""));

    match (header, content.is_empty()) {
        (Some(header), true) => Some(header),
        (Some(header), false) => Some(format!("{header}\n\n{content}")),
        (None, false) => Some(content),
        (None, true) => None,
    }
}

/// Removes the note spans no earlier rule claimed, pushing each as a
/// miscellaneous note. Spans carrying the cross-reference or commentary
/// marker outside their expected wrapper are left for the inline scanner.
pub fn extract_generic(stream: &str, out: &mut Extracted) -> String {
    let group_marker = RefGroup::MARKER.to_string();
    let note_marker = CommentaryNote::MARKER.to_string();
    generic_re()
        .replace_all(stream, |caps: &Captures| {
            let attr = caps.get(1).map(|m| m.as_str().trim());
            if attr == Some(group_marker.as_str()) || attr == Some(note_marker.as_str()) {
                return caps[0].to_string();
            }
            let body = collapse_ws(&strip_tags(&caps[2], ""));
            if !body.is_empty() {
                let text = match attr.filter(|a| !a.is_empty()) {
                    Some(category) => format!("[{category}] {body}"),
                    None => body,
                };
                out.notes.push(Note { text });
            }
            CommentaryNote::SENTINEL.to_string()
        })
        .into_owned()
}
