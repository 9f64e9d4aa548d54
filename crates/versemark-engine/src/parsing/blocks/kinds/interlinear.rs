//! Interlinear blocks: `<Q>`…`<q>` holding up to four glosses for one word.
//!
//! Hebrew, Greek and transliteration have their own open/close pairs. The
//! translation field has no dedicated close tag, so it is captured
//! best-effort up to the next tag boundary; when tags are adjacent this can
//! under-capture, which callers must treat as best-effort rather than a hard
//! contract.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::verse::InterlinearEntry;
use crate::parsing::blocks::Extracted;
use crate::parsing::text::{collapse_ws, strip_tags};

static BLOCK: OnceLock<Regex> = OnceLock::new();
static HEBREW: OnceLock<Regex> = OnceLock::new();
static GREEK: OnceLock<Regex> = OnceLock::new();
static TRANSLIT: OnceLock<Regex> = OnceLock::new();
static TRANSLATION: OnceLock<Regex> = OnceLock::new();

fn block_re() -> &'static Regex {
    // case-sensitive: <q> is the close spelling, never an opener
    BLOCK.get_or_init(|| Regex::new(r"(?s)<Q>(.*?)<q>").expect("invalid interlinear regex"))
}

fn hebrew_re() -> &'static Regex {
    HEBREW.get_or_init(|| Regex::new(r"(?s)<wh>(.*?)</wh>").expect("invalid hebrew field regex"))
}

fn greek_re() -> &'static Regex {
    GREEK.get_or_init(|| Regex::new(r"(?s)<wg>(.*?)</wg>").expect("invalid greek field regex"))
}

fn translit_re() -> &'static Regex {
    TRANSLIT
        .get_or_init(|| Regex::new(r"(?s)<wt>(.*?)</wt>").expect("invalid translit field regex"))
}

fn translation_re() -> &'static Regex {
    // No close tag exists for the translation; stop at the next tag boundary.
    TRANSLATION
        .get_or_init(|| Regex::new(r"<wtr>([^<]*)").expect("invalid translation field regex"))
}

/// Removes every interlinear block, pushing one entry per block that carries
/// at least one recognizable field. Blocks are replaced by a space.
pub fn extract(stream: &str, out: &mut Extracted) -> String {
    block_re()
        .replace_all(stream, |caps: &Captures| {
            if let Some(entry) = parse_block(&caps[1]) {
                out.interlinear.push(entry);
            }
            " "
        })
        .into_owned()
}

fn parse_block(body: &str) -> Option<InterlinearEntry> {
    let field = |re: &Regex| {
        re.captures(body)
            .map(|caps| collapse_ws(&strip_tags(&caps[1], " ")))
            .filter(|text| !text.is_empty())
    };

    let entry = InterlinearEntry {
        hebrew: field(hebrew_re()),
        greek: field(greek_re()),
        transliteration: field(translit_re()),
        translation: field(translation_re()),
    };
    if entry == InterlinearEntry::default() {
        return None;
    }
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entries_of(raw: &str) -> (String, Vec<InterlinearEntry>) {
        let mut out = Extracted::default();
        let stream = extract(raw, &mut out);
        (stream, out.interlinear)
    }

    #[test]
    fn all_four_fields_are_captured() {
        let (stream, entries) =
            entries_of("x<Q><wh>בְּרֵאשִׁית</wh><wg>ἀρχή</wg><wt>bereshit</wt><wtr>no princípio<q>y");
        assert_eq!(stream, "x y");
        assert_eq!(
            entries,
            vec![InterlinearEntry {
                hebrew: Some("בְּרֵאשִׁית".to_string()),
                greek: Some("ἀρχή".to_string()),
                transliteration: Some("bereshit".to_string()),
                translation: Some("no princípio".to_string()),
            }]
        );
    }

    #[test]
    fn missing_fields_stay_absent() {
        let (_, entries) = entries_of("<Q><wh>אֱלֹהִים</wh><q>");
        assert_eq!(entries[0].hebrew.as_deref(), Some("אֱלֹהִים"));
        assert!(entries[0].greek.is_none());
        assert!(entries[0].translation.is_none());
    }

    #[test]
    fn adjacent_tag_truncates_translation_capture() {
        // best-effort lookahead: a tag right after <wtr> leaves it empty
        let (_, entries) = entries_of("<Q><wtr><wh>אוֹר</wh><q>");
        assert_eq!(entries[0].translation, None);
        assert_eq!(entries[0].hebrew.as_deref(), Some("אוֹר"));
    }

    #[test]
    fn fieldless_block_is_removed_without_an_entry() {
        let (stream, entries) = entries_of("a<Q>texto solto<q>b");
        assert_eq!(stream, "a b");
        assert!(entries.is_empty());
    }
}
