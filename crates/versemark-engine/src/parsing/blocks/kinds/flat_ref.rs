//! Flat cross-reference tags: `<RX REF>`, a self-contained tag whose sole
//! attribute is a reference string. Distinct from grouped anchors - flat
//! references carry no display text and no position.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::blocks::Extracted;

static TAG: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG.get_or_init(|| Regex::new(r"(?i)<RX\s+([^>]*)>").expect("invalid flat ref regex"))
}

/// Removes every flat reference tag, pushing its trimmed reference string.
pub fn extract(stream: &str, out: &mut Extracted) -> String {
    tag_re()
        .replace_all(stream, |caps: &Captures| {
            let reference = caps[1].trim();
            if !reference.is_empty() {
                out.cross_references.push(reference.to_string());
            }
            " "
        })
        .into_owned()
}
