//! Search-term matching over clean text.
//!
//! Matching is case-insensitive and literal (the term is escaped, never
//! interpreted as a pattern). Offsets come back as code-point ranges in the
//! same unit as every other annotation, so result lists can highlight via
//! the standard span machinery; [`highlight`] additionally renders the
//! matches inline with `<mark>` tags for HTML-ish consumers.

use regex::Regex;

/// Compiled term; escaped, so any user input is a valid pattern.
fn term_re(term: &str) -> Regex {
    Regex::new(&format!("(?i){}", regex::escape(term))).expect("escaped term is a valid pattern")
}

/// Case-insensitive occurrences of `term` in `text` as code-point ranges.
/// An empty term matches nothing.
pub fn find_matches(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return Vec::new();
    }
    let re = term_re(term);
    let mut matches = Vec::new();
    let mut chars_before = 0;
    let mut last_byte = 0;
    for m in re.find_iter(text) {
        chars_before += text[last_byte..m.start()].chars().count();
        let len = text[m.start()..m.end()].chars().count();
        matches.push((chars_before, chars_before + len));
        chars_before += len;
        last_byte = m.end();
    }
    matches
}

/// Wraps every match of `term` in `<mark>` tags, leaving the rest untouched.
pub fn highlight(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    term_re(term)
        .replace_all(text, |caps: &regex::Captures| {
            format!("<mark>{}</mark>", &caps[0])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_are_case_insensitive_code_point_ranges() {
        let matches = find_matches("Criou Deus, e criou o homem", "criou");
        assert_eq!(matches, vec![(0, 5), (14, 19)]);
    }

    #[test]
    fn offsets_count_code_points() {
        let matches = find_matches("princípio e princípio", "princípio");
        assert_eq!(matches, vec![(0, 9), (12, 21)]);
    }

    #[test]
    fn empty_term_matches_nothing() {
        assert!(find_matches("texto", "").is_empty());
        assert_eq!(highlight("texto", ""), "texto");
    }

    #[test]
    fn term_is_literal_not_a_pattern() {
        assert!(find_matches("abc", "a.c").is_empty());
        assert_eq!(find_matches("a.c", "a.c"), vec![(0, 3)]);
    }

    #[test]
    fn highlight_wraps_matches_preserving_case() {
        assert_eq!(
            highlight("Criou Deus, e criou", "criou"),
            "<mark>Criou</mark> Deus, e <mark>criou</mark>"
        );
    }
}
