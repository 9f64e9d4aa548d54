//! Small text utilities shared by the pipeline stages: whitespace collapse,
//! tag stripping and code-point slicing.

use std::sync::OnceLock;

use regex::Regex;

static TAG: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG.get_or_init(|| Regex::new(r"<[^<>]*>").expect("invalid tag regex"))
}

/// Replaces every remaining `<...>` tag with `sep`. Block rules use `" "` for
/// display text (so adjacent words stay separated) and `""` for note bodies,
/// matching how the source data was cleaned.
pub fn strip_tags(s: &str, sep: &str) -> String {
    tag_re().replace_all(s, sep).into_owned()
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            pending = !out.is_empty();
            continue;
        }
        if pending {
            out.push(' ');
            pending = false;
        }
        out.push(ch);
    }
    out
}

/// Like [`collapse_ws`] but preserves paragraph structure: horizontal runs
/// collapse to one space, a single newline survives, and longer newline runs
/// collapse to one blank line. Used for note bodies where paragraph breaks
/// carry meaning.
pub fn collapse_note_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    let mut newlines = 0usize;
    for ch in s.chars() {
        if ch == '\n' {
            newlines += 1;
            pending_space = false;
            continue;
        }
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !out.is_empty() {
            if newlines >= 2 {
                out.push_str("\n\n");
            } else if newlines == 1 {
                out.push('\n');
            } else if pending_space {
                out.push(' ');
            }
        }
        newlines = 0;
        pending_space = false;
        out.push(ch);
    }
    out
}

/// Slices `s` by code-point offsets `[start, end)`.
pub fn slice_chars(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Case-insensitive containment; `needle_lower` must already be lowercase.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapse_trims_and_dedups() {
        assert_eq!(collapse_ws("  No\t\nprincípio  criou "), "No princípio criou");
    }

    #[test]
    fn collapse_of_whitespace_only_is_empty() {
        assert_eq!(collapse_ws(" \t\n "), "");
    }

    #[test]
    fn note_collapse_keeps_paragraph_breaks() {
        assert_eq!(
            collapse_note_ws("ref - TITLE\n\n\n  corpo   da nota\nsegunda linha  "),
            "ref - TITLE\n\ncorpo da nota\nsegunda linha"
        );
    }

    #[test]
    fn strip_tags_with_space_separates_words() {
        assert_eq!(strip_tags("a<b>c", " "), "a c");
    }

    #[test]
    fn strip_tags_with_empty_glues_words() {
        assert_eq!(strip_tags("<b>Gn 1:1</b>corpo", ""), "Gn 1:1corpo");
    }

    #[test]
    fn slice_chars_counts_code_points() {
        assert_eq!(slice_chars("princípio", 5, 8), "ípi");
    }

    #[test]
    fn contains_ignore_case_matches_accented_prefix() {
        assert!(contains_ignore_case("INTRODUÇÃO | Gênesis", "introdu"));
        assert!(!contains_ignore_case("prefácio", "introdu"));
    }
}
