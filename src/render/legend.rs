//! Legend box layout and drawing.
//!
//! The rendering backend's built-in series-label box supports neither
//! multi-column layouts nor placement above the axes, so the legend is laid
//! out here from the explicit plot options and drawn with plain elements.
//! Text widths are estimated from the character count; the box is sized
//! generously enough that the estimate does not clip.
use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::Error;
use crate::render::LegendPlacement;
use crate::render::hatch::{self, PxRect};
use crate::style::{DashPattern, Hatch};

/// The swatch drawn next to a legend label.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Sample {
    /// Hatched bar outline
    Bar(Hatch),
    /// Line with the series dash pattern
    Line(DashPattern),
}

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub label: String,
    pub color: RGBColor,
    pub sample: Sample,
}

#[derive(Debug)]
pub(crate) struct LegendBox<'a> {
    entries: &'a [Entry],
    columns: usize,
    font_family: &'a str,
    font_px: f64,
    outline_px: u32,
    line_px: f64,
    hatch_spacing_px: f64,
}

impl<'a> LegendBox<'a> {
    pub(crate) fn new(
        entries: &'a [Entry],
        columns: usize,
        font_family: &'a str,
        font_px: f64,
        outline_px: u32,
        line_px: f64,
        hatch_spacing_px: f64,
    ) -> Self {
        LegendBox {
            entries,
            columns: columns.max(1),
            font_family,
            font_px,
            outline_px,
            line_px,
            hatch_spacing_px,
        }
    }

    fn swatch_size(&self) -> (f64, f64) {
        (self.font_px * 1.9, self.font_px * 0.9)
    }

    fn padding(&self) -> f64 {
        self.font_px * 0.7
    }

    fn row_height(&self) -> f64 {
        self.font_px * 1.4
    }

    fn n_rows(&self) -> usize {
        self.entries.len().div_ceil(self.columns)
    }

    fn n_columns(&self) -> usize {
        self.columns.min(self.entries.len().max(1))
    }

    fn entry_width(&self, entry: &Entry) -> f64 {
        let (swatch_w, _) = self.swatch_size();
        swatch_w + self.font_px * 0.5 + estimate_text_width(&entry.label, self.font_px)
    }

    /// Width of each column: the widest entry assigned to it (row-major)
    fn column_widths(&self) -> Vec<f64> {
        let mut widths = vec![0.0f64; self.n_columns()];
        for (idx, entry) in self.entries.iter().enumerate() {
            let col = idx % self.columns;
            widths[col] = widths[col].max(self.entry_width(entry));
        }
        widths
    }

    /// Outer size of the legend box, in pixels
    pub(crate) fn size(&self) -> (i32, i32) {
        if self.entries.is_empty() {
            return (0, 0);
        }
        let col_spacing = self.font_px * 1.2;
        let widths = self.column_widths();
        let w = self.padding() * 2.0
            + widths.iter().sum::<f64>()
            + col_spacing * (widths.len() - 1) as f64;
        let h = self.padding() * 2.0 + self.row_height() * self.n_rows() as f64;
        (w.ceil() as i32, h.ceil() as i32)
    }

    /// Draw the box at its place relative to the plot pixel area
    pub(crate) fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        plot_x: &Range<i32>,
        plot_y: &Range<i32>,
        placement: LegendPlacement,
    ) -> Result<(), Error> {
        if self.entries.is_empty() || placement == LegendPlacement::Hidden {
            return Ok(());
        }

        let (w, h) = self.size();
        let margin = (self.font_px * 0.6).round() as i32;
        let (x0, y0) = match placement {
            LegendPlacement::InTopLeft => (plot_x.start + margin, plot_y.start + margin),
            LegendPlacement::InTopRight => (plot_x.end - w - margin, plot_y.start + margin),
            LegendPlacement::InBottomLeft => (plot_x.start + margin, plot_y.end - h - margin),
            LegendPlacement::InBottomRight => (plot_x.end - w - margin, plot_y.end - h - margin),
            LegendPlacement::OutTop => {
                let gap = (self.font_px * 0.4).round() as i32;
                (plot_x.end - w, (plot_y.start - h - gap).max(0))
            }
            LegendPlacement::Hidden => unreachable!(),
        };

        area.draw(&Rectangle::new(
            [(x0, y0), (x0 + w, y0 + h)],
            WHITE.mix(0.8).filled(),
        ))?;
        area.draw(&Rectangle::new(
            [(x0, y0), (x0 + w, y0 + h)],
            ShapeStyle {
                color: BLACK.to_rgba(),
                filled: false,
                stroke_width: 1,
            },
        ))?;

        let (swatch_w, swatch_h) = self.swatch_size();
        let col_spacing = self.font_px * 1.2;
        let widths = self.column_widths();
        let text_style = (self.font_family, self.font_px)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));

        for (idx, entry) in self.entries.iter().enumerate() {
            let row = idx / self.columns;
            let col = idx % self.columns;
            let cell_x = x0 as f64
                + self.padding()
                + widths[..col].iter().sum::<f64>()
                + col_spacing * col as f64;
            let center_y = y0 as f64 + self.padding() + self.row_height() * (row as f64 + 0.5);

            let swatch = PxRect::new(
                (cell_x.round() as i32, (center_y - swatch_h / 2.0).round() as i32),
                (
                    (cell_x + swatch_w).round() as i32,
                    (center_y + swatch_h / 2.0).round() as i32,
                ),
            );
            let stroke = ShapeStyle {
                color: entry.color.to_rgba(),
                filled: false,
                stroke_width: self.outline_px,
            };

            match entry.sample {
                Sample::Bar(pattern) => {
                    area.draw(&Rectangle::new(
                        [(swatch.left, swatch.top), (swatch.right, swatch.bottom)],
                        stroke,
                    ))?;
                    for (p, q) in hatch::segments(swatch, pattern, self.hatch_spacing_px) {
                        area.draw(&PathElement::new(vec![p, q], stroke))?;
                    }
                }
                Sample::Line(pattern) => {
                    let y = center_y.round() as i32;
                    let line_stroke = ShapeStyle {
                        color: entry.color.to_rgba(),
                        filled: false,
                        stroke_width: (self.line_px.round() as u32).max(1),
                    };
                    for (p, q) in dash_segments(
                        swatch.left as f64,
                        swatch.right as f64,
                        y,
                        pattern,
                        self.line_px,
                    ) {
                        area.draw(&PathElement::new(vec![p, q], line_stroke))?;
                    }
                }
            }

            let text_x = (cell_x + swatch_w + self.font_px * 0.5).round() as i32;
            area.draw(&Text::new(
                entry.label.clone(),
                (text_x, center_y.round() as i32),
                text_style.clone(),
            ))?;
        }

        Ok(())
    }
}

/// Rough text width; the backend is not consulted so the result is the same
/// for every backend and resolution scale.
pub(crate) fn estimate_text_width(text: &str, font_px: f64) -> f64 {
    text.chars().count() as f64 * font_px * 0.62
}

/// Split a horizontal line into dash strokes. Dash and gap lengths are in
/// line-width units, matching the series dash patterns.
pub(crate) fn dash_segments(
    x0: f64,
    x1: f64,
    y: i32,
    pattern: DashPattern,
    line_px: f64,
) -> Vec<((i32, i32), (i32, i32))> {
    match pattern {
        DashPattern::Solid => vec![((x0.round() as i32, y), (x1.round() as i32, y))],
        DashPattern::Dashed { dash, gap } => {
            let dash_px = (dash * line_px).max(1.0);
            let gap_px = (gap * line_px).max(1.0);
            let mut segs = Vec::new();
            let mut x = x0;
            while x < x1 {
                let end = (x + dash_px).min(x1);
                segs.push(((x.round() as i32, y), (end.round() as i32, y)));
                x = end + gap_px;
            }
            segs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry {
                label: format!("series {}", i),
                color: RGBColor(0, 0, 0),
                sample: Sample::Bar(Hatch::Cross),
            })
            .collect()
    }

    #[test]
    fn test_columns_shrink_height() {
        let entries = entries(4);
        let one = LegendBox::new(&entries, 1, "serif", 10.0, 1, 2.0, 3.0);
        let two = LegendBox::new(&entries, 2, "serif", 10.0, 1, 2.0, 3.0);
        let (w1, h1) = one.size();
        let (w2, h2) = two.size();
        assert_eq!(one.n_rows(), 4);
        assert_eq!(two.n_rows(), 2);
        assert!(h2 < h1);
        assert!(w2 > w1);
    }

    #[test]
    fn test_columns_capped_by_entries() {
        let entries = entries(2);
        let wide = LegendBox::new(&entries, 5, "serif", 10.0, 1, 2.0, 3.0);
        assert_eq!(wide.n_columns(), 2);
        assert_eq!(wide.n_rows(), 1);
    }

    #[test]
    fn test_empty_box_has_no_size() {
        let empty: Vec<Entry> = Vec::new();
        let legend = LegendBox::new(&empty, 1, "serif", 10.0, 1, 2.0, 3.0);
        assert_eq!(legend.size(), (0, 0));
    }

    #[test]
    fn test_dash_segments_cover_span() {
        let segs = dash_segments(0.0, 30.0, 5, DashPattern::Dashed { dash: 2.0, gap: 1.0 }, 2.0);
        assert!(segs.len() > 1);
        assert_eq!(segs.first().unwrap().0.0, 0);
        assert!(segs.last().unwrap().1.0 <= 30);
        for ((sx, sy), (ex, ey)) in &segs {
            assert_eq!(sy, ey);
            assert!(ex > sx);
        }

        let solid = dash_segments(0.0, 30.0, 5, DashPattern::Solid, 2.0);
        assert_eq!(solid, vec![((0, 5), (30, 5))]);
    }
}
