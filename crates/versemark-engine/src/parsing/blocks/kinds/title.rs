//! Title blocks: `<TS>`/`<TS1>`..`<TS3>` through `<Ts>`, matched
//! case-insensitively across newlines.
//!
//! A block may open with a note span whose attribute marks it as an
//! introduction; its text becomes a label joined to the body with `" | "`.
//! Since converted modules sometimes repeat the label inside the body as
//! `label | body`, anything up to and including the body's first pipe is
//! discarded before the join.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::verse::Title;
use crate::parsing::blocks::Extracted;
use crate::parsing::text::{collapse_ws, contains_ignore_case, strip_tags};

pub struct TitleBlock;

impl TitleBlock {
    /// Level used when the open tag carries no digit.
    pub const DEFAULT_LEVEL: u8 = 1;

    /// Lowercase fragment that marks an attribute or label as an
    /// introduction, common prefix of "Introdução" and "Introduction".
    pub const INTRO_MARKER: &'static str = "introdu";
}

static BLOCK: OnceLock<Regex> = OnceLock::new();
static LEADING_NOTE: OnceLock<Regex> = OnceLock::new();
static NOTE_SPAN: OnceLock<Regex> = OnceLock::new();

fn block_re() -> &'static Regex {
    BLOCK.get_or_init(|| Regex::new(r"(?is)<TS(\d?)>(.*?)<Ts>").expect("invalid title regex"))
}

fn leading_note_re() -> &'static Regex {
    LEADING_NOTE.get_or_init(|| {
        Regex::new(r"(?is)^\s*<RF q=([^>]*)>(.*?)<Rf>").expect("invalid leading note regex")
    })
}

fn note_span_re() -> &'static Regex {
    NOTE_SPAN
        .get_or_init(|| Regex::new(r"(?is)<RF[^>]*>.*?<Rf>").expect("invalid note span regex"))
}

/// Removes every title block, pushing extracted titles onto `out`. Titles
/// carry no position, so each block is replaced by a single space.
pub fn extract(stream: &str, out: &mut Extracted) -> String {
    block_re()
        .replace_all(stream, |caps: &Captures| {
            let level = caps[1].parse().unwrap_or(TitleBlock::DEFAULT_LEVEL);
            if let Some(title) = build_title(level, &caps[2]) {
                out.titles.push(title);
            }
            " "
        })
        .into_owned()
}

fn build_title(level: u8, block: &str) -> Option<Title> {
    let (label, body) = split_intro_label(block);
    let body = note_span_re().replace_all(&body, "");
    // duplicate label elimination: the body sometimes repeats the label
    // before a pipe
    let body = match body.find('|') {
        Some(i) => &body[i + 1..],
        None => &body[..],
    };
    let body = collapse_ws(&strip_tags(body, " "));

    let text = match (label, body.is_empty()) {
        (Some(label), false) => format!("{label} | {body}"),
        (Some(label), true) => label,
        (None, false) => body,
        (None, true) => return None,
    };
    Some(Title { level, text })
}

/// Splits an optional leading introduction note off the block, returning the
/// label (if the note qualifies) and the remaining body. A leading note span
/// whose attribute does not signal an introduction is left in place for the
/// generic note-span strip.
fn split_intro_label(block: &str) -> (Option<String>, String) {
    let Some(caps) = leading_note_re().captures(block) else {
        return (None, block.to_string());
    };
    if !contains_ignore_case(&caps[1], TitleBlock::INTRO_MARKER) {
        return (None, block.to_string());
    }

    let text = collapse_ws(&strip_tags(&caps[2], " "));
    let first = text.split('|').next().unwrap_or("").trim().to_string();
    let label = if contains_ignore_case(&first, TitleBlock::INTRO_MARKER) {
        Some(first)
    } else if contains_ignore_case(&text, TitleBlock::INTRO_MARKER) {
        Some(text)
    } else {
        None
    };

    let rest = block[caps.get(0).map_or(0, |m| m.end())..].to_string();
    (label, rest)
}
