use crate::toc::types::HeadingDepth;

/// Number of heading levels tracked
pub const LEVELS: usize = 6;

/// Snapshot of the outline counters, one slot per depth
pub type Numbering = [u32; LEVELS];

/// Running outline counter for a single document.
///
/// Recording a heading bumps its own slot and clears every deeper slot;
/// shallower slots are left alone, so a new `2.3` wipes `2.3.1` but keeps `2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberingTracker {
    counters: Numbering,
}

impl NumberingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a heading at `depth` and return the counters after the update
    pub fn advance(&mut self, depth: HeadingDepth) -> Numbering {
        let slot = depth.index();
        self.counters[slot] += 1;
        for counter in &mut self.counters[slot + 1..] {
            *counter = 0;
        }
        self.counters
    }

    pub fn current(&self) -> Numbering {
        self.counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance_all(depths: &[u8]) -> Vec<Numbering> {
        let mut tracker = NumberingTracker::new();
        depths
            .iter()
            .map(|&d| tracker.advance(HeadingDepth::new(d).unwrap()))
            .collect()
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(NumberingTracker::new().current(), [0; LEVELS]);
    }

    #[test]
    fn test_nested_sequence() {
        assert_eq!(
            advance_all(&[1, 2, 3]),
            vec![
                [1, 0, 0, 0, 0, 0],
                [1, 1, 0, 0, 0, 0],
                [1, 1, 1, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_shallower_heading_resets_deeper_slots() {
        assert_eq!(
            advance_all(&[1, 2, 3, 3, 2, 3, 3]),
            vec![
                [1, 0, 0, 0, 0, 0],
                [1, 1, 0, 0, 0, 0],
                [1, 1, 1, 0, 0, 0],
                [1, 1, 2, 0, 0, 0],
                [1, 2, 0, 0, 0, 0],
                [1, 2, 1, 0, 0, 0],
                [1, 2, 2, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_shallower_slots_untouched() {
        let mut tracker = NumberingTracker::new();
        tracker.advance(HeadingDepth::new(4).unwrap());
        let snapshot = tracker.advance(HeadingDepth::new(6).unwrap());
        assert_eq!(snapshot, [0, 0, 0, 1, 0, 1]);
        let snapshot = tracker.advance(HeadingDepth::new(5).unwrap());
        assert_eq!(snapshot, [0, 0, 0, 1, 1, 0]);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut tracker = NumberingTracker::new();
        let first = tracker.advance(HeadingDepth::new(1).unwrap());
        tracker.advance(HeadingDepth::new(1).unwrap());
        assert_eq!(first, [1, 0, 0, 0, 0, 0]);
        assert_eq!(tracker.current(), [2, 0, 0, 0, 0, 0]);
    }
}
