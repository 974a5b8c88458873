/*!
 * Style definitions for publication figures.
 *
 * A [`Style`] gathers everything presentation-related in one explicit value:
 * the series color, hatch and dash palettes, the stroke widths, the font
 * sizes (resolved from a [`DocClass`] font table) and the raster resolution.
 * It is built once and passed by reference into each plot call; nothing is
 * stored in process-wide state.
 */
use plotters::style::RGBColor;

use crate::doc::DocClass;

pub(crate) mod defaults {
    pub const LINE_WIDTH: f64 = 2.0;
    pub const ERROR_LINE_WIDTH: f64 = 0.5;
    pub const ERROR_CAP_SIZE: f64 = 1.0;

    pub const GRID_LINE_WIDTH: f64 = 0.2;
    pub const GRID_ALPHA: f64 = 0.4;
    pub const AXIS_LINE_WIDTH: f64 = 0.2;
    pub const BAR_OUTLINE_WIDTH: f64 = 0.2;

    pub const HATCH_SPACING: f64 = 2.5;
    pub const RASTER_DPI: f64 = 1000.0;
    pub const VECTOR_DPI: f64 = 96.0;

    pub const FONT_FAMILY: &str = "serif";

    pub const WIDTH_SCALE: f64 = 0.7;
    pub const FIG_PADDING: f64 = 0.21;
}

/// A paired-steps, colorblind-friendly series palette.
/// When the cycle wraps, the hatch cycle keeps repeated colors apart.
const PALETTE: &[RGBColor] = &[
    RGBColor(0x19, 0xB2, 0xFF), // sky blue
    RGBColor(0x2C, 0xA0, 0x2C), // green
    RGBColor(0xFF, 0x7F, 0x00), // orange
    RGBColor(0x65, 0x4C, 0xFF), // violet
    RGBColor(0xE5, 0x19, 0x32), // red
    RGBColor(0xFF, 0xBF, 0x7F), // light orange
    RGBColor(0xFF, 0xFF, 0x99), // pale yellow
    RGBColor(0xB2, 0xFF, 0x8C), // light green
    RGBColor(0xA5, 0xED, 0xFF), // pale blue
    RGBColor(0xCC, 0xBF, 0xFF), // pale violet
];

const HATCHES: &[Hatch] = &[
    Hatch::ForwardDiagonal,
    Hatch::Horizontal,
    Hatch::Cross,
    Hatch::Vertical,
];

const DASHES: &[DashPattern] = &[
    DashPattern::Solid,
    DashPattern::Dashed { dash: 4.0, gap: 1.0 },
    DashPattern::Dashed { dash: 2.0, gap: 0.5 },
    DashPattern::Dashed { dash: 1.0, gap: 0.5 },
    DashPattern::Dashed { dash: 0.5, gap: 0.5 },
    DashPattern::Dashed { dash: 4.0, gap: 0.5 },
    DashPattern::Dashed { dash: 3.0, gap: 1.0 },
    DashPattern::Dashed { dash: 8.0, gap: 1.0 },
    DashPattern::Dashed { dash: 6.0, gap: 2.0 },
    DashPattern::Dashed { dash: 2.0, gap: 2.0 },
];

/// Fill pattern drawn inside unfilled bars.
///
/// Bars are drawn with a colored outline and a patterned interior, so that
/// series remain distinguishable in grayscale print and when the color
/// cycle wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hatch {
    /// Diagonal strokes rising to the right
    ForwardDiagonal,
    /// Horizontal strokes
    Horizontal,
    /// Crossed horizontal and vertical strokes
    Cross,
    /// Vertical strokes
    Vertical,
}

/// Dash pattern for line series
///
/// Dash and gap lengths are relative to the line width, so a pattern scales
/// with the line and remains visually consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashPattern {
    /// Solid line
    Solid,
    /// Alternating dash and gap
    Dashed {
        /// Dash length, in line-width units
        dash: f64,
        /// Gap length, in line-width units
        gap: f64,
    },
}

/// Overall style definition for figures
///
/// Stroke widths and font sizes are in points; they are converted to pixels
/// at each backend's resolution when a figure is rendered. Font sizes are
/// resolved from the document class font table at construction and can be
/// overridden afterwards.
#[derive(Debug, Clone)]
pub struct Style {
    doc: DocClass,
    line_width: f64,
    error_line_width: f64,
    error_cap_size: f64,
    grid_line_width: f64,
    grid_alpha: f64,
    axis_line_width: f64,
    bar_outline_width: f64,
    hatch_spacing: f64,
    dpi: f64,
    font_family: String,
    font_size: f64,
    label_size: f64,
    legend_size: f64,
}

impl Style {
    /// Create a style targeting the given document class.
    /// Tick and legend labels use the template's footnote size, axis labels
    /// its `\small` size.
    pub fn new(doc: DocClass) -> Self {
        Style {
            doc,
            line_width: defaults::LINE_WIDTH,
            error_line_width: defaults::ERROR_LINE_WIDTH,
            error_cap_size: defaults::ERROR_CAP_SIZE,
            grid_line_width: defaults::GRID_LINE_WIDTH,
            grid_alpha: defaults::GRID_ALPHA,
            axis_line_width: defaults::AXIS_LINE_WIDTH,
            bar_outline_width: defaults::BAR_OUTLINE_WIDTH,
            hatch_spacing: defaults::HATCH_SPACING,
            dpi: defaults::RASTER_DPI,
            font_family: defaults::FONT_FAMILY.to_string(),
            font_size: doc.footnotesize(),
            label_size: doc.small(),
            legend_size: doc.footnotesize(),
        }
    }

    /// Set the line width for line series, in points, and return self for chaining
    pub fn with_line_width(self, line_width: f64) -> Self {
        Style { line_width, ..self }
    }

    /// Set the error bar line width, in points, and return self for chaining
    pub fn with_error_line_width(self, error_line_width: f64) -> Self {
        Style {
            error_line_width,
            ..self
        }
    }

    /// Set the error bar cap size, in points, and return self for chaining
    pub fn with_error_cap_size(self, error_cap_size: f64) -> Self {
        Style {
            error_cap_size,
            ..self
        }
    }

    /// Set the hatch stroke spacing, in points, and return self for chaining
    pub fn with_hatch_spacing(self, hatch_spacing: f64) -> Self {
        Style {
            hatch_spacing,
            ..self
        }
    }

    /// Set the raster output resolution, in pixels per inch, and return self for chaining
    pub fn with_dpi(self, dpi: f64) -> Self {
        Style { dpi, ..self }
    }

    /// Set the font family and return self for chaining
    pub fn with_font_family(self, family: impl Into<String>) -> Self {
        Style {
            font_family: family.into(),
            ..self
        }
    }

    /// Set the tick label font size, in points, and return self for chaining
    pub fn with_font_size(self, font_size: f64) -> Self {
        Style { font_size, ..self }
    }

    /// Set the axis label font size, in points, and return self for chaining
    pub fn with_label_size(self, label_size: f64) -> Self {
        Style { label_size, ..self }
    }

    /// Set the legend font size, in points, and return self for chaining
    pub fn with_legend_size(self, legend_size: f64) -> Self {
        Style {
            legend_size,
            ..self
        }
    }

    /// Get the document class this style targets
    pub fn doc(&self) -> DocClass {
        self.doc
    }

    /// Get the line width for line series, in points
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Get the error bar line width, in points
    pub fn error_line_width(&self) -> f64 {
        self.error_line_width
    }

    /// Get the error bar cap size, in points
    pub fn error_cap_size(&self) -> f64 {
        self.error_cap_size
    }

    /// Get the grid line width, in points
    pub fn grid_line_width(&self) -> f64 {
        self.grid_line_width
    }

    /// Get the grid line opacity (0.0 to 1.0)
    pub fn grid_alpha(&self) -> f64 {
        self.grid_alpha
    }

    /// Get the axis spine line width, in points
    pub fn axis_line_width(&self) -> f64 {
        self.axis_line_width
    }

    /// Get the bar outline width, in points
    pub fn bar_outline_width(&self) -> f64 {
        self.bar_outline_width
    }

    /// Get the hatch stroke spacing, in points
    pub fn hatch_spacing(&self) -> f64 {
        self.hatch_spacing
    }

    /// Get the raster output resolution, in pixels per inch
    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Get the font family
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Get the tick label font size, in points
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Get the axis label font size, in points
    pub fn label_size(&self) -> f64 {
        self.label_size
    }

    /// Get the legend font size, in points
    pub fn legend_size(&self) -> f64 {
        self.legend_size
    }

    /// Get the color for the series at the given position in its group.
    /// The palette repeats when the index exceeds its length.
    pub fn series_color(&self, index: usize) -> RGBColor {
        PALETTE[index % PALETTE.len()]
    }

    /// Get the hatch pattern for the series at the given position in its group.
    /// The hatch cycle repeats when the index exceeds its length.
    pub fn series_hatch(&self, index: usize) -> Hatch {
        HATCHES[index % HATCHES.len()]
    }

    /// Get the dash pattern for the series at the given position in its group.
    /// The dash cycle repeats when the index exceeds its length.
    pub fn series_dash(&self, index: usize) -> DashPattern {
        DASHES[index % DASHES.len()]
    }

    /// Get the number of distinct series colors before the palette repeats
    pub fn palette_len(&self) -> usize {
        PALETTE.len()
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::new(DocClass::default())
    }
}
