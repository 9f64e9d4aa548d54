//! # Position Resolution
//!
//! Stage 3 of the pipeline: cross-reference placeholders consume queued
//! groups in left-to-right discovery order, one group per placeholder, and
//! every anchor of a group becomes a [`CrossReferenceLink`] stamped with the
//! placeholder's offset. Note placeholders need no resolution - their text
//! was fully captured during block extraction - and sentinel characters are
//! left in the clean text.

use super::inline::{Placeholder, PlaceholderKind};
use crate::models::verse::{CrossReferenceGroup, CrossReferenceLink};

/// Zips cross-reference placeholders with their groups. Placeholders beyond
/// the queued groups (or the reverse) are ignored; mismatches only arise
/// from irregular markup and must not fail the verse.
pub fn resolve(
    placeholders: &[Placeholder],
    groups: Vec<CrossReferenceGroup>,
) -> Vec<CrossReferenceLink> {
    let mut queue = groups.into_iter();
    let mut links = Vec::new();

    for placeholder in placeholders {
        if placeholder.kind != PlaceholderKind::CrossReference {
            continue;
        }
        let Some(group) = queue.next() else {
            break;
        };
        for anchor in group.anchors {
            links.push(CrossReferenceLink {
                text: anchor.text,
                reference: anchor.reference,
                position: placeholder.position,
            });
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::verse::CrossReferenceAnchor;
    use pretty_assertions::assert_eq;

    fn group(refs: &[&str]) -> CrossReferenceGroup {
        CrossReferenceGroup {
            anchors: refs
                .iter()
                .map(|r| CrossReferenceAnchor {
                    text: r.to_string(),
                    reference: r.to_string(),
                })
                .collect(),
        }
    }

    fn at(kind: PlaceholderKind, position: usize) -> Placeholder {
        Placeholder { kind, position }
    }

    #[test]
    fn anchors_of_one_group_share_one_position() {
        let links = resolve(
            &[at(PlaceholderKind::CrossReference, 7)],
            vec![group(&["Pv 8:23", "Sl 33:6"])],
        );
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].position, 7);
        assert_eq!(links[1].position, 7);
        assert_eq!(links[0].reference, "Pv 8:23");
        assert_eq!(links[1].reference, "Sl 33:6");
    }

    #[test]
    fn groups_are_consumed_in_placeholder_order() {
        let links = resolve(
            &[
                at(PlaceholderKind::CrossReference, 3),
                at(PlaceholderKind::Note, 5),
                at(PlaceholderKind::CrossReference, 9),
            ],
            vec![group(&["Gn 1:1"]), group(&["Jo 1:1"])],
        );
        assert_eq!(links.len(), 2);
        assert_eq!((links[0].position, links[0].reference.as_str()), (3, "Gn 1:1"));
        assert_eq!((links[1].position, links[1].reference.as_str()), (9, "Jo 1:1"));
    }

    #[test]
    fn surplus_placeholders_resolve_to_nothing() {
        let links = resolve(&[at(PlaceholderKind::CrossReference, 0)], vec![]);
        assert!(links.is_empty());
    }

    #[test]
    fn note_placeholders_never_consume_groups() {
        let links = resolve(
            &[
                at(PlaceholderKind::Note, 1),
                at(PlaceholderKind::CrossReference, 4),
            ],
            vec![group(&["Sl 33:6"])],
        );
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].position, 4);
    }
}
