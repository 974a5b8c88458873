#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # pubfig
 * _Camera-ready figures without the notebook_. A small helper library for
 * producing publication-quality bar and line charts sized to a document
 * template's column or page width.
 *
 * Pubfig separates figure content (data series) from presentation (an
 * explicit [`Style`] value) and from document geometry (a [`doc::DocClass`]
 * metrics table). Rendering and file serialization are delegated to
 * [plotters](https://crates.io/crates/plotters); every plot call writes both
 * a vector (`.svg`) and a raster (`.png`) file, so the same figure can go in
 * the paper and in the slides.
 *
 * ## Get started
 *
 * ```no_run
 * use pubfig::{BarGroup, PlotOptions, Series, Style, bar_chart};
 *
 * # fn main() -> Result<(), pubfig::Error> {
 * // Two series sharing one category axis. Each series carries one value
 * // and one symmetric error magnitude per category.
 * let group = BarGroup::new(
 *     vec!["0-12", "13-17", "18-29", "30-49", "50+"],
 *     vec![
 *         Series::new("Cilantro", vec![12.0, 32.0, 48.0, 41.0, 85.0], vec![1.0, 2.0, 1.0, 10.0, 20.0]),
 *         Series::new("Basil", vec![84.0, 72.0, 99.0, 87.0, 60.0], vec![5.0, 6.0, 2.0, 10.0, 18.0]),
 *     ],
 * );
 *
 * // The default style targets the ACM sigconf template: serif fonts,
 * // footnote-size labels, and a figure that spans exactly one column.
 * let style = Style::default();
 *
 * let opts = PlotOptions::default()
 *     .with_x_label("Age group")
 *     .with_y_label("Fraction of people (%)");
 *
 * // Writes `survey.svg` and `survey.png` in the current directory.
 * bar_chart(&group, "survey", std::env::current_dir()?.as_path(), &style, &opts)?;
 * # Ok(())
 * # }
 * ```
 *
 * ## Notes about pubfig's design
 *
 * The grouped bar chart places the bars of all series side by side within
 * each category slot: with `M` series and a width scale `w`, each bar is
 * `w / M` wide and the group of `M` bars is centered on the slot. The
 * layout lives in [`layout::BarLayout`] and is a pure function of the
 * series count and width scale, so it can be tested without a rendering
 * backend.
 *
 * Colors, hatch patterns and dash patterns are assigned to series by their
 * position in the group, cycling through fixed palettes. There is no global
 * mutable style state: a [`Style`] is built once and passed by reference
 * into each plot call.
 */

pub mod doc;
pub mod error;
pub mod layout;
pub mod render;
pub mod series;
pub mod style;

pub use doc::{DocClass, FigSize};
pub use error::Error;
pub use layout::BarLayout;
pub use render::{LegendPlacement, PlotOptions, bar_chart, line_chart};
pub use series::{BarGroup, Series, XySeries};
pub use style::{DashPattern, Hatch, Style};

#[cfg(test)]
pub(crate) mod tests {
    pub trait Near {
        fn near_abs(&self, other: &Self, tol: f64) -> bool;
        fn near_rel(&self, other: &Self, err: f64) -> bool;
    }

    impl Near for f64 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() <= tol
        }

        fn near_rel(&self, other: &Self, err: f64) -> bool {
            let diff = (self - other).abs();
            let largest = self.abs().max(other.abs());
            diff <= largest * err
        }
    }

    macro_rules! assert_near {
        (abs, $a:expr, $b:expr, $tol:expr) => {
            assert!($a.near_abs(&$b, $tol), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nTolerance: {}", $a, $b, $tol);
        };
        (abs, $a:expr, $b:expr) => {
            assert_near!(abs, $a, $b, 1e-8);
        };
        (rel, $a:expr, $b:expr, $err:expr) => {
            assert!($a.near_rel(&$b, $err), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nRelative error: {}", $a, $b, $err);
        };
        (rel, $a:expr, $b:expr) => {
            assert_near!(rel, $a, $b, 1e-8);
        };
    }

    pub(crate) use assert_near;

    #[test]
    fn test_close_to() {
        let a = 1.0;
        let b = 1.0 + 1e-9;
        assert_near!(abs, a, b);
        assert!(!a.near_abs(&b, 1e-10));
        assert_near!(rel, a, b);
        assert!(!a.near_rel(&b, 1e-10));
    }
}
