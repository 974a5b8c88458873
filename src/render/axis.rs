//! Category slot axis.
//!
//! Slot `i` is centered at integer position `i`, with half a slot of
//! padding on each side of the axis. Ticks sit exactly on the slot centers
//! and are labeled with the category strings, which the stock numeric
//! ranges cannot guarantee.
use std::ops::Range;

use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};

#[derive(Debug, Clone)]
pub(crate) struct SlotAxis {
    labels: Vec<String>,
}

impl SlotAxis {
    pub(crate) fn new(labels: Vec<String>) -> Self {
        SlotAxis { labels }
    }
}

impl Ranged for SlotAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let Range { start, end } = self.range();
        if end <= start {
            return limit.0;
        }
        let ratio = (value - start) / (end - start);
        limit.0 + ((limit.1 - limit.0) as f64 * ratio).round() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        let n = self.labels.len();
        let max = hint.max_num_points();
        if n == 0 || max == 0 {
            return Vec::new();
        }
        // thin out every k-th slot when there is not enough room
        let step = n.div_ceil(max).max(1);
        (0..n).step_by(step).map(|i| i as f64).collect()
    }

    fn range(&self) -> Range<f64> {
        -0.5..(self.labels.len() as f64 - 0.5)
    }
}

impl ValueFormatter<f64> for SlotAxis {
    fn format_ext(&self, value: &f64) -> String {
        let slot = value.round();
        if slot >= 0.0 && (value - slot).abs() < 1e-6 {
            if let Some(label) = self.labels.get(slot as usize) {
                return label.clone();
            }
        }
        String::new()
    }
}
