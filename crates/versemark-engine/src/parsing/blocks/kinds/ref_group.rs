//! Cross-reference groups: a superscripted note span whose attribute is the
//! `✜` marker, holding one `<a href='bREF'>TEXT</a>` anchor per referenced
//! passage.
//!
//! The whole span is replaced by a single sentinel character. The anchors of
//! one span form one [`CrossReferenceGroup`]; the position resolver later
//! stamps every anchor of the group with the sentinel's offset in the clean
//! text.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::verse::{CrossReferenceAnchor, CrossReferenceGroup};
use crate::parsing::blocks::Extracted;
use crate::parsing::text::collapse_ws;

pub struct RefGroup;

impl RefGroup {
    /// Attribute value marking a note span as a cross-reference group.
    pub const MARKER: char = '✜';

    /// Placeholder left in the stream. The same glyph the source data uses
    /// as its reference icon, so it reads naturally if left in place.
    pub const SENTINEL: char = '✜';
}

static BLOCK: OnceLock<Regex> = OnceLock::new();
static ANCHOR: OnceLock<Regex> = OnceLock::new();

fn block_re() -> &'static Regex {
    BLOCK.get_or_init(|| {
        Regex::new(r"(?s)<sup><RF q=✜>(.*?)<Rf></sup>").expect("invalid ref group regex")
    })
}

fn anchor_re() -> &'static Regex {
    ANCHOR.get_or_init(|| {
        Regex::new(r"(?s)<a href='b([^']*)'>([^<]*)</a>").expect("invalid anchor regex")
    })
}

/// Removes every cross-reference group, queueing one group per match onto
/// `out` in discovery order. A group with no recognizable anchors is still
/// queued so sentinel-to-group pairing stays aligned.
pub fn extract(stream: &str, out: &mut Extracted) -> String {
    block_re()
        .replace_all(stream, |caps: &Captures| {
            let anchors = anchor_re()
                .captures_iter(&caps[1])
                .map(|a| CrossReferenceAnchor {
                    reference: a[1].trim().to_string(),
                    text: collapse_ws(&a[2]),
                })
                .collect();
            out.ref_groups.push(CrossReferenceGroup { anchors });
            RefGroup::SENTINEL.to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn group_collects_anchors_in_order() {
        let raw = "criou<sup><RF q=✜><b>✜</b> - <a href='bPv 8:23'>Pv 8:23</a>; \
                   <a href='bSl 33:6'>Sl 33:6</a><Rf></sup> Deus";
        let mut out = Extracted::default();
        let stream = extract(raw, &mut out);
        assert_eq!(stream, "criou✜ Deus");
        assert_eq!(out.ref_groups.len(), 1);
        let anchors = &out.ref_groups[0].anchors;
        assert_eq!(anchors[0].reference, "Pv 8:23");
        assert_eq!(anchors[0].text, "Pv 8:23");
        assert_eq!(anchors[1].reference, "Sl 33:6");
    }

    #[test]
    fn anchorless_group_is_still_queued() {
        let raw = "a<sup><RF q=✜>sem âncoras<Rf></sup>b";
        let mut out = Extracted::default();
        let stream = extract(raw, &mut out);
        assert_eq!(stream, "a✜b");
        assert_eq!(out.ref_groups.len(), 1);
        assert!(out.ref_groups[0].anchors.is_empty());
    }

    #[test]
    fn two_groups_queue_in_discovery_order() {
        let raw = "x<sup><RF q=✜><a href='bGn 1:1'>Gn 1:1</a><Rf></sup>y\
                   <sup><RF q=✜><a href='bJo 1:1'>Jo 1:1</a><Rf></sup>z";
        let mut out = Extracted::default();
        extract(raw, &mut out);
        assert_eq!(out.ref_groups[0].anchors[0].reference, "Gn 1:1");
        assert_eq!(out.ref_groups[1].anchors[0].reference, "Jo 1:1");
    }

    #[test]
    fn commentary_spans_do_not_match() {
        let raw = "a<sup><RF q=ℕ>nota<Rf></sup>b";
        let mut out = Extracted::default();
        let stream = extract(raw, &mut out);
        assert_eq!(stream, raw);
        assert!(out.ref_groups.is_empty());
    }
}
