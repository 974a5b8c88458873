/*!
 * Figure rendering.
 *
 * This module bridges the data model and the rendering backend. Validation
 * and bar layout happen before any backend call; the backend then owns
 * pixel-level rendering, text layout and file encoding. Every figure is
 * written twice, as a vector `.svg` for the document and a raster `.png`
 * for slideware, both named `{fig_name}.{ext}` under the destination
 * directory.
 */
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::TRANSPARENT;

use crate::doc::FigSize;
use crate::error::Error;
use crate::layout::BarLayout;
use crate::series::{BarGroup, XySeries};
use crate::style::{DashPattern, Style, defaults};

mod axis;
mod hatch;
mod legend;

use axis::SlotAxis;
use hatch::PxRect;
use legend::{Entry, LegendBox, Sample};

/// Where the legend goes, relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPlacement {
    /// Inside the plot area, top left corner
    InTopLeft,
    /// Inside the plot area, top right corner
    #[default]
    InTopRight,
    /// Inside the plot area, bottom left corner
    InBottomLeft,
    /// Inside the plot area, bottom right corner
    InBottomRight,
    /// Above the plot area, right aligned, clear of the data
    OutTop,
    /// No legend
    Hidden,
}

/// Per-plot presentation options.
///
/// Everything has a default: no axis labels, legend inside the top right
/// corner in one column, figure sized to one document column, and 70% of
/// each category slot used by the bars.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    x_label: Option<String>,
    y_label: Option<String>,
    legend: LegendPlacement,
    legend_columns: u32,
    fig_size: Option<FigSize>,
    width_scale: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            x_label: None,
            y_label: None,
            legend: LegendPlacement::default(),
            legend_columns: 1,
            fig_size: None,
            width_scale: defaults::WIDTH_SCALE,
        }
    }
}

impl PlotOptions {
    /// Create the default options
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the x axis label and return self for chaining
    pub fn with_x_label(self, label: impl Into<String>) -> Self {
        PlotOptions {
            x_label: Some(label.into()),
            ..self
        }
    }

    /// Set the y axis label and return self for chaining
    pub fn with_y_label(self, label: impl Into<String>) -> Self {
        PlotOptions {
            y_label: Some(label.into()),
            ..self
        }
    }

    /// Set the legend placement and return self for chaining
    pub fn with_legend(self, legend: LegendPlacement) -> Self {
        PlotOptions { legend, ..self }
    }

    /// Set the number of legend columns and return self for chaining.
    /// Zero is treated as one.
    pub fn with_legend_columns(self, legend_columns: u32) -> Self {
        PlotOptions {
            legend_columns,
            ..self
        }
    }

    /// Override the figure size and return self for chaining.
    /// Without an override, figures span one column of the document class.
    pub fn with_fig_size(self, fig_size: FigSize) -> Self {
        PlotOptions {
            fig_size: Some(fig_size),
            ..self
        }
    }

    /// Set the fraction of each category slot used by the bars and return
    /// self for chaining
    pub fn with_width_scale(self, width_scale: f64) -> Self {
        PlotOptions {
            width_scale,
            ..self
        }
    }

    /// Get the x axis label, if any
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    /// Get the y axis label, if any
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Get the legend placement
    pub fn legend(&self) -> LegendPlacement {
        self.legend
    }

    /// Get the number of legend columns
    pub fn legend_columns(&self) -> u32 {
        self.legend_columns.max(1)
    }

    /// Get the figure size override, if any
    pub fn fig_size(&self) -> Option<FigSize> {
        self.fig_size
    }

    /// Get the fraction of each category slot used by the bars
    pub fn width_scale(&self) -> f64 {
        self.width_scale
    }
}

/// Plot a group of series as side-by-side bars with error bars.
///
/// Bars are unfilled, with a colored outline and a hatched interior; colors
/// and hatches are assigned by series position, cycling through the style
/// palettes. Writes `{fig_name}.svg` and `{fig_name}.png` under `dest_dir`.
///
/// Fails with [`Error::DestinationUnwritable`] when `dest_dir` is not an
/// existing writable directory, [`Error::EmptyGroup`] when the group has no
/// series, and [`Error::InvalidSeriesShape`] when a series length does not
/// match the category axis, all before any rendering takes place.
pub fn bar_chart(
    group: &BarGroup,
    fig_name: &str,
    dest_dir: &Path,
    style: &Style,
    opts: &PlotOptions,
) -> Result<(), Error> {
    check_dest(dest_dir)?;
    group.validate()?;
    let layout = BarLayout::compute(group.n_series(), opts.width_scale())?;

    let fig = BarFig {
        group,
        layout,
        style,
        opts,
    };
    save_figure(&fig, fig_name, dest_dir, fig_size(style, opts), style.dpi())
}

/// Plot x/y series as lines with symmetric error bars.
///
/// Each series gets a color and a dash pattern from the style cycles by its
/// position in the slice. Writes `{fig_name}.svg` and `{fig_name}.png`
/// under `dest_dir`.
///
/// Fails with [`Error::DestinationUnwritable`] when `dest_dir` is not an
/// existing writable directory, [`Error::EmptyGroup`] when `series` is
/// empty, and [`Error::InvalidSeriesShape`] when a series' x, y and error
/// lengths disagree, all before any rendering takes place.
pub fn line_chart(
    series: &[XySeries],
    fig_name: &str,
    dest_dir: &Path,
    style: &Style,
    opts: &PlotOptions,
) -> Result<(), Error> {
    check_dest(dest_dir)?;
    if series.is_empty() {
        return Err(Error::EmptyGroup);
    }
    for s in series {
        s.check_shape()?;
    }

    let fig = LineFig { series, style, opts };
    save_figure(&fig, fig_name, dest_dir, fig_size(style, opts), style.dpi())
}

fn fig_size(style: &Style, opts: &PlotOptions) -> FigSize {
    opts.fig_size()
        .unwrap_or_else(|| FigSize::column(style.doc()))
}

fn check_dest(dest_dir: &Path) -> Result<(), Error> {
    let meta = std::fs::metadata(dest_dir)
        .map_err(|_| Error::DestinationUnwritable(dest_dir.to_path_buf()))?;
    if !meta.is_dir() || meta.permissions().readonly() {
        return Err(Error::DestinationUnwritable(dest_dir.to_path_buf()));
    }
    Ok(())
}

/// A figure that can draw itself on any backend at a given resolution
trait Figure {
    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>, dpi: f64)
    -> Result<(), Error>;
}

fn save_figure<F: Figure>(
    fig: &F,
    fig_name: &str,
    dest_dir: &Path,
    size: FigSize,
    raster_dpi: f64,
) -> Result<(), Error> {
    let svg_path = dest_dir.join(format!("{fig_name}.svg"));
    {
        let area = SVGBackend::new(&svg_path, size.to_pixels(defaults::VECTOR_DPI))
            .into_drawing_area();
        fig.draw(&area, defaults::VECTOR_DPI)?;
        area.present()?;
    }
    log::debug!("wrote {}", svg_path.display());

    let png_path = dest_dir.join(format!("{fig_name}.png"));
    {
        let area =
            BitMapBackend::new(&png_path, size.to_pixels(raster_dpi)).into_drawing_area();
        fig.draw(&area, raster_dpi)?;
        area.present()?;
    }
    log::debug!("wrote {}", png_path.display());

    Ok(())
}

/// Point-to-pixel conversion at the backend resolution
fn px(dpi: f64, pt: f64) -> f64 {
    pt * dpi / 72.0
}

/// Stroke widths are integer pixels; hairlines keep at least one pixel
/// so they survive the vector backend's nominal resolution
fn stroke_px(dpi: f64, pt: f64) -> u32 {
    px(dpi, pt).round().max(1.0) as u32
}

fn grid_stroke(dpi: f64, style: &Style) -> ShapeStyle {
    ShapeStyle {
        color: RGBColor(0xB0, 0xB0, 0xB0).mix(style.grid_alpha()),
        filled: false,
        stroke_width: stroke_px(dpi, style.grid_line_width()),
    }
}

fn axis_stroke(dpi: f64, style: &Style) -> ShapeStyle {
    ShapeStyle {
        color: BLACK.to_rgba(),
        filled: false,
        stroke_width: stroke_px(dpi, style.axis_line_width()),
    }
}

fn base_margin(dpi: f64, style: &Style) -> i32 {
    px(dpi, defaults::FIG_PADDING * style.font_size())
        .round()
        .max(2.0) as i32
}

fn legend_gap(legend_px: f64) -> i32 {
    (legend_px * 0.4).round() as i32
}

struct BarFig<'a> {
    group: &'a BarGroup,
    layout: BarLayout,
    style: &'a Style,
    opts: &'a PlotOptions,
}

impl Figure for BarFig<'_> {
    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        dpi: f64,
    ) -> Result<(), Error> {
        let style = self.style;
        let opts = self.opts;
        let n = self.group.n_slots();

        area.fill(&WHITE)?;

        let tick_px = px(dpi, style.font_size());
        let label_px = px(dpi, style.label_size());
        let legend_px = px(dpi, style.legend_size());

        let mut y_min = self.group.min_with_errors().min(0.0);
        let mut y_max = self.group.max_with_errors().max(0.0);
        if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
            y_min = 0.0;
            y_max = 1.0;
        }
        let headroom = (y_max - y_min) * 0.05;
        y_max += headroom;
        if y_min < 0.0 {
            y_min -= headroom;
        }

        let entries: Vec<Entry> = self
            .group
            .series()
            .iter()
            .enumerate()
            .map(|(idx, s)| Entry {
                label: s.label().to_string(),
                color: style.series_color(idx),
                sample: Sample::Bar(style.series_hatch(idx)),
            })
            .collect();
        let legend_box = LegendBox::new(
            &entries,
            opts.legend_columns() as usize,
            style.font_family(),
            legend_px,
            stroke_px(dpi, style.bar_outline_width()),
            px(dpi, style.line_width()),
            px(dpi, style.hatch_spacing()),
        );

        let margin = base_margin(dpi, style);
        let top_margin = if opts.legend() == LegendPlacement::OutTop {
            margin + legend_box.size().1 + legend_gap(legend_px)
        } else {
            margin
        };
        let x_label_area = label_area(tick_px, label_px, opts.x_label().is_some());
        let y_label_area = (tick_px * 2.8
            + if opts.y_label().is_some() {
                label_px * 1.6
            } else {
                0.0
            })
        .round() as i32;

        let mut builder = ChartBuilder::on(area);
        builder
            .margin_top(top_margin)
            .margin_right(margin)
            .margin_bottom(margin)
            .margin_left(margin)
            .x_label_area_size(x_label_area)
            .y_label_area_size(y_label_area);
        let mut chart = builder.build_cartesian_2d(
            SlotAxis::new(self.group.categories().to_vec()),
            y_min..y_max,
        )?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .bold_line_style(grid_stroke(dpi, style))
            .light_line_style(&TRANSPARENT)
            .axis_style(axis_stroke(dpi, style))
            .set_all_tick_mark_size(0)
            .x_labels(n)
            .label_style(
                (style.font_family(), tick_px)
                    .into_font()
                    .color(&BLACK),
            )
            .axis_desc_style(
                (style.font_family(), label_px)
                    .into_font()
                    .color(&BLACK),
            );
        if let Some(x_label) = opts.x_label() {
            mesh.x_desc(x_label);
        }
        if let Some(y_label) = opts.y_label() {
            mesh.y_desc(y_label);
        }
        mesh.draw()?;

        let half = self.layout.bar_width() / 2.0;
        let outline_px = stroke_px(dpi, style.bar_outline_width());
        let err_style = ShapeStyle {
            color: BLACK.to_rgba(),
            filled: false,
            stroke_width: stroke_px(dpi, style.error_line_width()),
        };
        let cap_px = px(dpi, style.error_cap_size()).round().max(1.0) as u32;

        for (idx, series) in self.group.series().iter().enumerate() {
            let color = style.series_color(idx);
            let pattern = style.series_hatch(idx);
            let positions = self.layout.positions(idx, n);
            let outline = ShapeStyle {
                color: color.to_rgba(),
                filled: false,
                stroke_width: outline_px,
            };

            chart.draw_series(
                positions
                    .iter()
                    .zip(series.values())
                    .map(|(x, v)| Rectangle::new([(x - half, 0.0), (x + half, *v)], outline)),
            )?;

            // the backend has no hatch fills; strokes are clipped to each
            // bar in pixel space
            for (x, v) in positions.iter().zip(series.values()) {
                let rect = PxRect::new(
                    chart.backend_coord(&(x - half, *v)),
                    chart.backend_coord(&(x + half, 0.0)),
                );
                for (p, q) in hatch::segments(rect, pattern, px(dpi, style.hatch_spacing())) {
                    area.draw(&PathElement::new(vec![p, q], outline))?;
                }
            }

            chart.draw_series(
                positions
                    .iter()
                    .zip(series.values().iter().zip(series.errors()))
                    .filter(|(_, (_, e))| **e > 0.0)
                    .map(|(x, (v, e))| {
                        ErrorBar::new_vertical(*x, v - e, *v, v + e, err_style, cap_px)
                    }),
            )?;
        }

        if opts.legend() != LegendPlacement::Hidden {
            let (plot_x, plot_y) = chart.plotting_area().get_pixel_range();
            legend_box.draw(area, &plot_x, &plot_y, opts.legend())?;
        }

        Ok(())
    }
}

struct LineFig<'a> {
    series: &'a [XySeries],
    style: &'a Style,
    opts: &'a PlotOptions,
}

impl LineFig<'_> {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in self.series {
            for x in s.x() {
                if x.is_finite() {
                    x_min = x_min.min(*x);
                    x_max = x_max.max(*x);
                }
            }
            for (y, e) in s.y().iter().zip(s.errors()) {
                if y.is_finite() && e.is_finite() {
                    y_min = y_min.min(y - e);
                    y_max = y_max.max(y + e);
                }
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            (x_min, x_max) = (0.0, 1.0);
        } else if x_max <= x_min {
            (x_min, x_max) = (x_min - 0.5, x_max + 0.5);
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            (y_min, y_max) = (0.0, 1.0);
        } else if y_max <= y_min {
            (y_min, y_max) = (y_min - 0.5, y_max + 0.5);
        }
        let x_pad = (x_max - x_min) * 0.05;
        let y_pad = (y_max - y_min) * 0.05;
        (x_min - x_pad, x_max + x_pad, y_min - y_pad, y_max + y_pad)
    }
}

impl Figure for LineFig<'_> {
    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        dpi: f64,
    ) -> Result<(), Error> {
        let style = self.style;
        let opts = self.opts;

        area.fill(&WHITE)?;

        let tick_px = px(dpi, style.font_size());
        let label_px = px(dpi, style.label_size());
        let legend_px = px(dpi, style.legend_size());
        let line_px = px(dpi, style.line_width());

        let (x_min, x_max, y_min, y_max) = self.bounds();

        let entries: Vec<Entry> = self
            .series
            .iter()
            .enumerate()
            .map(|(idx, s)| Entry {
                label: s.label().to_string(),
                color: style.series_color(idx),
                sample: Sample::Line(style.series_dash(idx)),
            })
            .collect();
        let legend_box = LegendBox::new(
            &entries,
            opts.legend_columns() as usize,
            style.font_family(),
            legend_px,
            stroke_px(dpi, style.bar_outline_width()),
            line_px,
            px(dpi, style.hatch_spacing()),
        );

        let margin = base_margin(dpi, style);
        let top_margin = if opts.legend() == LegendPlacement::OutTop {
            margin + legend_box.size().1 + legend_gap(legend_px)
        } else {
            margin
        };
        let x_label_area = label_area(tick_px, label_px, opts.x_label().is_some());
        let y_label_area = (tick_px * 2.8
            + if opts.y_label().is_some() {
                label_px * 1.6
            } else {
                0.0
            })
        .round() as i32;

        let mut builder = ChartBuilder::on(area);
        builder
            .margin_top(top_margin)
            .margin_right(margin)
            .margin_bottom(margin)
            .margin_left(margin)
            .x_label_area_size(x_label_area)
            .y_label_area_size(y_label_area);
        let mut chart = builder.build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        let mut mesh = chart.configure_mesh();
        mesh.bold_line_style(grid_stroke(dpi, style))
            .light_line_style(&TRANSPARENT)
            .axis_style(axis_stroke(dpi, style))
            .set_all_tick_mark_size(0)
            .label_style(
                (style.font_family(), tick_px)
                    .into_font()
                    .color(&BLACK),
            )
            .axis_desc_style(
                (style.font_family(), label_px)
                    .into_font()
                    .color(&BLACK),
            );
        if let Some(x_label) = opts.x_label() {
            mesh.x_desc(x_label);
        }
        if let Some(y_label) = opts.y_label() {
            mesh.y_desc(y_label);
        }
        mesh.draw()?;

        let cap_px = px(dpi, style.error_cap_size()).round().max(1.0) as u32;

        for (idx, series) in self.series.iter().enumerate() {
            let color = style.series_color(idx);
            let line_style = ShapeStyle::from(&color).stroke_width(stroke_px(
                dpi,
                style.line_width(),
            ));
            let points: Vec<(f64, f64)> = series
                .x()
                .iter()
                .copied()
                .zip(series.y().iter().copied())
                .collect();

            match style.series_dash(idx) {
                DashPattern::Solid => {
                    chart.draw_series(LineSeries::new(points, line_style))?;
                }
                DashPattern::Dashed { dash, gap } => {
                    let dash_px = ((dash * line_px).round() as i32).max(1);
                    let gap_px = ((gap * line_px).round() as i32).max(1);
                    chart.draw_series(DashedLineSeries::new(
                        points,
                        dash_px,
                        gap_px,
                        line_style,
                    ))?;
                }
            }

            // error bars take the series color, same width as the line
            chart.draw_series(
                series
                    .x()
                    .iter()
                    .zip(series.y().iter().zip(series.errors()))
                    .filter(|(_, (_, e))| **e > 0.0)
                    .map(|(x, (y, e))| {
                        ErrorBar::new_vertical(*x, y - e, *y, y + e, line_style, cap_px)
                    }),
            )?;
        }

        if opts.legend() != LegendPlacement::Hidden {
            let (plot_x, plot_y) = chart.plotting_area().get_pixel_range();
            legend_box.draw(area, &plot_x, &plot_y, opts.legend())?;
        }

        Ok(())
    }
}

fn label_area(tick_px: f64, label_px: f64, has_label: bool) -> i32 {
    (tick_px * 1.8 + if has_label { label_px * 1.6 } else { 0.0 }).round() as i32
}
