//! The inline scan itself.

use versemark_syntax::{TagKind, TokenKind, classify, lex};

use super::stack::{FormatStack, OpenSpan};
use super::types::{Placeholder, PlaceholderKind, ScanOutput};
use crate::models::verse::{FormattingSpan, StrongNumber};
use crate::parsing::blocks::kinds::{CommentaryNote, RefGroup};
use crate::parsing::text::slice_chars;

/// Output buffer tracking its own length in code points, with the collapse
/// rule built into every append: a space is only emitted when the buffer is
/// non-empty and does not already end in one. This keeps the buffer free of
/// leading and doubled spaces at all times, so the final whitespace pass can
/// only ever trim a single trailing space.
#[derive(Debug, Default)]
struct Buffer {
    text: String,
    len: usize,
}

impl Buffer {
    fn push(&mut self, ch: char) {
        self.text.push(ch);
        self.len += 1;
    }

    fn push_space(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with(' ') {
            self.push(' ');
        }
    }
}

/// Scans the block-extracted stream into clean text plus positioned
/// annotations. Infallible: unknown tags and stray angle brackets are
/// dropped, unterminated formatting spans are force-closed at end of stream.
pub fn scan(stream: &str) -> ScanOutput {
    let mut buf = Buffer::default();
    let mut stack = FormatStack::default();
    let mut closed: Vec<OpenSpan> = Vec::new();
    let mut ends: Vec<usize> = Vec::new();
    let mut strong_numbers = Vec::new();
    let mut placeholders = Vec::new();

    for token in lex(stream) {
        match token.kind {
            TokenKind::Text => append_literal(token.text, &mut buf, &mut placeholders),
            TokenKind::Tag => match classify(token.tag_body()) {
                TagKind::Strong { kind, number } => strong_numbers.push(StrongNumber {
                    kind,
                    number,
                    position: buf.len,
                }),
                TagKind::FormatOpen(kind) => stack.open(kind, buf.len),
                TagKind::FormatClose(kind) => {
                    if let Some(open) = stack.close(kind) {
                        closed.push(open);
                        ends.push(buf.len);
                    }
                }
                TagKind::Break => buf.push_space(),
                TagKind::Structural | TagKind::Unknown => {}
            },
            TokenKind::StrayLt => {}
        }
    }

    // salvage whatever is still open
    for open in stack.drain() {
        closed.push(open);
        ends.push(buf.len);
    }

    finalize(buf, closed, ends, strong_numbers, placeholders)
}

fn append_literal(text: &str, buf: &mut Buffer, placeholders: &mut Vec<Placeholder>) {
    for ch in text.chars() {
        if ch == RefGroup::SENTINEL {
            placeholders.push(Placeholder {
                kind: PlaceholderKind::CrossReference,
                position: buf.len,
            });
            buf.push(ch);
        } else if ch == CommentaryNote::SENTINEL {
            placeholders.push(Placeholder {
                kind: PlaceholderKind::Note,
                position: buf.len,
            });
            buf.push(ch);
        } else if ch == '<' || ch == '>' {
            // stray bracket in literal text; never reaches clean text
        } else if ch.is_whitespace() {
            buf.push_space();
        } else {
            buf.push(ch);
        }
    }
}

/// The final whitespace pass. The buffer's incremental collapse leaves at
/// most one trailing space to trim; offsets recorded during the scan are
/// clamped to the trimmed length rather than recomputed, which keeps them in
/// exact agreement with the returned text.
fn finalize(
    buf: Buffer,
    closed: Vec<OpenSpan>,
    ends: Vec<usize>,
    mut strong_numbers: Vec<StrongNumber>,
    mut placeholders: Vec<Placeholder>,
) -> ScanOutput {
    let mut text = buf.text;
    let mut len = buf.len;
    while text.ends_with(' ') {
        text.pop();
        len -= 1;
    }

    for strong in &mut strong_numbers {
        strong.position = strong.position.min(len);
    }
    for placeholder in &mut placeholders {
        placeholder.position = placeholder.position.min(len);
    }

    let formatting_spans = closed
        .into_iter()
        .zip(ends)
        .map(|(open, end)| {
            let start = open.start.min(len);
            let end = end.min(len);
            FormattingSpan {
                kind: open.kind,
                start,
                end,
                text: slice_chars(&text, start, end),
            }
        })
        .collect();

    ScanOutput {
        text,
        strong_numbers,
        formatting_spans,
        placeholders,
    }
}
