//! Open-format stack with nearest-matching-kind close.
//!
//! A close tag does not pop strictly: it removes the most recently opened
//! entry of *its* kind, skipping entries of other kinds opened after it.
//! That is what turns interleaved source like
//! `<FI>alpha <b>beta<Fi> gamma</b>` into two overlapping spans
//! (italic over "alpha beta", bold over "beta gamma") instead of forcing
//! nesting or dropping a span.

use versemark_syntax::FormatKind;

/// A formatting span that has been opened but not yet closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenSpan {
    pub kind: FormatKind,
    /// Code-point offset in the output buffer where the span starts.
    pub start: usize,
}

#[derive(Debug, Default)]
pub struct FormatStack {
    entries: Vec<OpenSpan>,
}

impl FormatStack {
    pub fn open(&mut self, kind: FormatKind, start: usize) {
        self.entries.push(OpenSpan { kind, start });
    }

    /// Removes and returns the nearest entry of `kind`, searching from the
    /// top of the stack. `None` if no span of that kind is open.
    pub fn close(&mut self, kind: FormatKind) -> Option<OpenSpan> {
        let index = self.entries.iter().rposition(|e| e.kind == kind)?;
        Some(self.entries.remove(index))
    }

    /// Drains whatever is still open at end of stream, in open order.
    /// Unterminated spans are salvaged rather than dropped.
    pub fn drain(&mut self) -> Vec<OpenSpan> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn close_removes_nearest_matching_kind_not_top() {
        let mut stack = FormatStack::default();
        stack.open(FormatKind::Italic, 0);
        stack.open(FormatKind::Bold, 6);
        // italic close skips over the bold entry opened after it
        let closed = stack.close(FormatKind::Italic).unwrap();
        assert_eq!(closed.start, 0);
        // bold is untouched
        let closed = stack.close(FormatKind::Bold).unwrap();
        assert_eq!(closed.start, 6);
    }

    #[test]
    fn close_prefers_most_recent_of_same_kind() {
        let mut stack = FormatStack::default();
        stack.open(FormatKind::Italic, 0);
        stack.open(FormatKind::Italic, 5);
        assert_eq!(stack.close(FormatKind::Italic).unwrap().start, 5);
        assert_eq!(stack.close(FormatKind::Italic).unwrap().start, 0);
    }

    #[test]
    fn close_without_open_is_none() {
        let mut stack = FormatStack::default();
        assert_eq!(stack.close(FormatKind::Bold), None);
    }

    #[test]
    fn drain_returns_leftovers_in_open_order() {
        let mut stack = FormatStack::default();
        stack.open(FormatKind::Underline, 1);
        stack.open(FormatKind::JesusWords, 4);
        let leftovers = stack.drain();
        assert_eq!(leftovers[0].kind, FormatKind::Underline);
        assert_eq!(leftovers[1].kind, FormatKind::JesusWords);
        assert!(stack.drain().is_empty());
    }
}
