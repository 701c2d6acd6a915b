use crate::matcher::Matcher;

/// An ordered, non-empty list of per-position instruction matchers.
///
/// A pattern of length N matches an instruction stream of length L iff some
/// start offset s in `[0, L - N]` satisfies every position: slot k against
/// instruction s + k. The window is strictly contiguous: an interloping
/// instruction anywhere inside it defeats the match, which is what
/// distinguishes this from a subsequence search. Streams shorter than the
/// pattern never match.
pub struct Pattern<I> {
    slots: Vec<Matcher<I>>,
}

impl<I: 'static> Pattern<I> {
    /// Build a pattern from per-position matchers.
    ///
    /// # Panics
    ///
    /// Panics when `slots` is empty; a zero-length pattern has no defined
    /// match semantics.
    pub fn new(slots: Vec<Matcher<I>>) -> Self {
        assert!(
            !slots.is_empty(),
            "an instruction pattern needs at least one position"
        );
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Search `insns` for a contiguous window satisfying every position.
    /// Worst case O((L - N + 1) * N); each window is abandoned at its first
    /// failing position.
    pub fn matches(&self, insns: &[I]) -> bool {
        let n = self.slots.len();
        if insns.len() < n {
            return false;
        }
        (0..=insns.len() - n).any(|start| {
            self.slots
                .iter()
                .zip(&insns[start..])
                .all(|(slot, insn)| slot.matches(insn))
        })
    }
}

impl<I> Clone for Pattern<I> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::always;

    fn eq(v: i32) -> Matcher<i32> {
        Matcher::new(move |x| *x == v)
    }

    #[test]
    #[should_panic(expected = "at least one position")]
    fn test_empty_pattern_is_rejected() {
        let _ = Pattern::<i32>::new(vec![]);
    }

    #[test]
    fn test_all_accept_pattern_matches_iff_stream_long_enough() {
        let p = Pattern::new(vec![always(), always(), always()]);
        assert!(!p.matches(&[]));
        assert!(!p.matches(&[1, 2]));
        assert!(p.matches(&[1, 2, 3]));
        assert!(p.matches(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_match_at_every_offset() {
        let p = Pattern::new(vec![eq(7), eq(8)]);
        assert!(p.matches(&[7, 8, 0]));
        assert!(p.matches(&[0, 7, 8]));
        assert!(p.matches(&[0, 7, 8, 0]));
        assert!(!p.matches(&[7, 0, 8]));
    }

    #[test]
    fn test_window_is_contiguous() {
        let p = Pattern::new(vec![eq(1), eq(2), eq(3)]);
        assert!(p.matches(&[1, 2, 3]));
        // 1 .. 2 .. 3 appears as a subsequence but never as a window
        assert!(!p.matches(&[1, 9, 2, 3]));
        assert!(!p.matches(&[1, 2, 9, 3]));
    }

    #[test]
    fn test_overlapping_candidates() {
        let p = Pattern::new(vec![eq(1), eq(1), eq(2)]);
        assert!(p.matches(&[1, 1, 1, 2]));
    }

    #[test]
    fn test_pattern_is_reusable() {
        let p = Pattern::new(vec![eq(5)]);
        assert!(p.matches(&[5]));
        assert!(p.matches(&[5]));
        assert!(!p.matches(&[6]));
        let q = p.clone();
        assert!(q.matches(&[4, 5]));
    }
}
