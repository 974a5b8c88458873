/*!
 * Grouped bar layout.
 *
 * Category slot `i` is centered at integer position `i` on the category
 * axis. With `M` series sharing a slot and a width scale `w`, each bar is
 * `w / M` wide and the `M` bars sit side by side, contiguous and jointly
 * centered on the slot center. The computation is a pure function of the
 * series count and width scale; rendering backends are not involved.
 */
use crate::error::Error;

/// Horizontal layout of the bars of a series group.
///
/// Holds the common bar width and one per-series offset from the slot
/// center. Offsets are evenly spaced by the bar width and symmetric about
/// zero, so the group occupies exactly `width_scale` of the slot.
#[derive(Debug, Clone)]
pub struct BarLayout {
    bar_width: f64,
    offsets: Vec<f64>,
}

impl BarLayout {
    /// Compute the layout for `n_series` series sharing each slot.
    ///
    /// `width_scale` is the fraction of the slot width allotted to all bars
    /// combined; the remainder is the visual gap between categories. Values
    /// outside `(0, 1]` are not rejected but make bars bleed into
    /// neighbouring slots.
    ///
    /// Fails with [`Error::EmptyGroup`] when `n_series` is zero.
    pub fn compute(n_series: usize, width_scale: f64) -> Result<Self, Error> {
        if n_series == 0 {
            return Err(Error::EmptyGroup);
        }

        let m = n_series as f64;
        let bar_width = width_scale / m;
        let first = bar_width * (1.0 - m) / 2.0;

        let offsets = (0..n_series)
            .map(|j| first + j as f64 * bar_width)
            .collect();

        Ok(BarLayout { bar_width, offsets })
    }

    /// Get the width of one bar, as a fraction of the slot width
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    /// Get the per-series offsets from the slot center
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Get the bar center positions of one series across `n_slots` slots.
    ///
    /// Slot centers are the integer positions `0..n_slots`; bar `j` of slot
    /// `i` is centered at `i + offsets[j]`.
    ///
    /// Panics if `series` is out of range; the length of the offsets is the
    /// series count the layout was computed for.
    pub fn positions(&self, series: usize, n_slots: usize) -> Vec<f64> {
        let offset = self.offsets[series];
        (0..n_slots).map(|i| i as f64 + offset).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    #[test]
    fn test_empty_group_rejected() {
        assert!(matches!(
            BarLayout::compute(0, 0.7),
            Err(Error::EmptyGroup)
        ));
    }

    #[test]
    fn test_single_series_is_centered() {
        let layout = BarLayout::compute(1, 0.7).unwrap();
        assert_near!(abs, layout.bar_width(), 0.7);
        assert_eq!(layout.offsets().len(), 1);
        assert_near!(abs, layout.offsets()[0], 0.0);

        // positions degrade to the plain slot centers
        let positions = layout.positions(0, 2);
        assert_near!(abs, positions[0], 0.0);
        assert_near!(abs, positions[1], 1.0);
    }

    #[test]
    fn test_two_series_standard_scale() {
        let layout = BarLayout::compute(2, 0.7).unwrap();
        assert_near!(abs, layout.bar_width(), 0.35);
        assert_near!(abs, layout.offsets()[0], -0.175);
        assert_near!(abs, layout.offsets()[1], 0.175);

        let second = layout.positions(1, 5);
        assert_eq!(second.len(), 5);
        for (i, x) in second.iter().enumerate() {
            assert_near!(abs, *x, i as f64 + 0.175);
        }
    }

    #[test]
    fn test_offsets_evenly_spaced_and_symmetric() {
        for m in 1..12 {
            for scale in [0.2, 0.7, 1.0] {
                let layout = BarLayout::compute(m, scale).unwrap();
                let offsets = layout.offsets();
                assert_eq!(offsets.len(), m);

                for pair in offsets.windows(2) {
                    assert_near!(abs, pair[1] - pair[0], scale / m as f64);
                }

                // contiguous bars jointly centered on the slot
                let sum: f64 = offsets.iter().sum();
                assert_near!(abs, sum, 0.0, 1e-12);
                let span = offsets[m - 1] - offsets[0] + layout.bar_width();
                assert_near!(abs, span, scale);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let a = BarLayout::compute(3, 0.7).unwrap();
        let b = BarLayout::compute(3, 0.7).unwrap();
        assert_eq!(a.offsets(), b.offsets());
        assert_eq!(a.positions(2, 4), b.positions(2, 4));
    }
}
