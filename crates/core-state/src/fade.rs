//! Fade-in opacities for the most recent committed lines.
//!
//! The table has one slot per visible line, oldest slot first, rising to full
//! opacity in the last slot. While fewer lines exist than the table holds, the
//! displayed lines are aligned to the *end* of the table so the newest line is
//! always drawn at the last slot.

/// Number of committed lines drawn above the active line.
pub const DEFAULT_VISIBLE_LINES: usize = 3;

/// Opacity of the oldest visible slot.
pub const DEFAULT_MIN_OPACITY: f32 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct FadeTable {
    slots: Vec<f32>,
}

impl Default for FadeTable {
    fn default() -> Self {
        Self::linear(DEFAULT_VISIBLE_LINES, DEFAULT_MIN_OPACITY)
    }
}

impl FadeTable {
    /// Evenly spaced opacities from `min_opacity` up to `1.0`.
    ///
    /// `visible_lines` below 1 is treated as 1; `min_opacity` is clamped into `0.0..=1.0`.
    pub fn linear(visible_lines: usize, min_opacity: f32) -> Self {
        let n = visible_lines.max(1);
        let min = min_opacity.clamp(0.0, 1.0);
        if n == 1 {
            return Self { slots: vec![1.0] };
        }
        let step = (1.0 - min) / (n - 1) as f32;
        let mut slots: Vec<f32> = (0..n).map(|i| min + step * i as f32).collect();
        // float accumulation must not leave the newest slot short of opaque
        slots[n - 1] = 1.0;
        Self { slots }
    }

    /// Explicit table, oldest slot first. An empty table degrades to a single opaque slot.
    pub fn from_slots(slots: impl IntoIterator<Item = f32>) -> Self {
        let slots: Vec<f32> = slots.into_iter().map(|o| o.clamp(0.0, 1.0)).collect();
        if slots.is_empty() {
            return Self { slots: vec![1.0] };
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[f32] {
        &self.slots
    }

    pub fn visible_line_count(&self) -> usize {
        self.slots.len()
    }

    /// The most recent committed lines that fit the table, oldest first.
    pub fn visible<'a>(&self, lines: &'a [String]) -> &'a [String] {
        let start = lines.len().saturating_sub(self.slots.len());
        &lines[start..]
    }

    /// Opacity of the displayed line at `index` when `displayed` lines are shown.
    ///
    /// Slot is `index + (visible_line_count - displayed)`. Lines that fall
    /// before the first slot, and indices outside the display, get `0.0`.
    pub fn opacity(&self, displayed: usize, index: usize) -> f32 {
        if index >= displayed {
            return 0.0;
        }
        (index + self.slots.len())
            .checked_sub(displayed)
            .and_then(|slot| self.slots.get(slot))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn linear_table_rises_to_opaque() {
        let t = FadeTable::linear(3, 0.25);
        assert_eq!(t.slots(), [0.25, 0.625, 1.0]);
    }

    #[test]
    fn single_slot_is_opaque() {
        assert_eq!(FadeTable::linear(1, 0.1).slots(), [1.0]);
        assert_eq!(FadeTable::linear(0, 0.1).slots(), [1.0]);
    }

    #[test]
    fn shift_matches_observed_corrections() {
        let t = FadeTable::from_slots([0.2, 0.5, 1.0]);
        // one line: +2
        assert_eq!(t.opacity(1, 0), 1.0);
        // two lines: +1
        assert_eq!(t.opacity(2, 0), 0.5);
        assert_eq!(t.opacity(2, 1), 1.0);
        // full table: no shift
        assert_eq!(t.opacity(3, 0), 0.2);
        assert_eq!(t.opacity(3, 2), 1.0);
    }

    #[test]
    fn newest_line_always_opaque() {
        let t = FadeTable::linear(5, 0.0);
        for displayed in 1..=5 {
            assert_eq!(t.opacity(displayed, displayed - 1), 1.0);
        }
    }

    #[test]
    fn out_of_range_is_transparent() {
        let t = FadeTable::default();
        assert_eq!(t.opacity(0, 0), 0.0);
        assert_eq!(t.opacity(2, 2), 0.0);
        // more displayed than slots: oldest extras fall off the table
        assert_eq!(t.opacity(5, 0), 0.0);
        assert_eq!(t.opacity(5, 4), 1.0);
    }

    #[test]
    fn visible_takes_most_recent() {
        let t = FadeTable::default();
        let all = lines(5);
        assert_eq!(t.visible(&all), ["line 2", "line 3", "line 4"]);
        let few = lines(2);
        assert_eq!(t.visible(&few), ["line 0", "line 1"]);
        assert!(t.visible(&[]).is_empty());
    }
}
