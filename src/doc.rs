//! Document metrics for publication templates.
//!
//! A [`DocClass`] provides the column and text widths and the named font
//! sizes of a target document template, so that figures can be sized to
//! fit a column or a page exactly instead of being scaled in the document.
//! All widths are in TeX points, all figure sizes in inches.

/// TeX points per inch.
pub const POINTS_PER_INCH: f64 = 72.27;

/// The golden ratio, used for pleasing default aspect ratios.
pub const GOLDEN_RATIO: f64 = 1.618033988749895;

/// A known document template with fixed page geometry and font table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocClass {
    /// ACM conference proceedings (`acmart` with the `sigconf` option).
    #[default]
    AcmSigconf,
    /// IEEE conference proceedings (`IEEEtran` with the `conference` option).
    IeeeConference,
}

impl DocClass {
    /// Width of one text column, in TeX points
    pub fn columnwidth(&self) -> f64 {
        match self {
            DocClass::AcmSigconf => 241.14749,
            DocClass::IeeeConference => 252.0,
        }
    }

    /// Width of the full text block (both columns plus the gutter), in TeX points
    pub fn textwidth(&self) -> f64 {
        match self {
            DocClass::AcmSigconf => 506.295,
            DocClass::IeeeConference => 516.0,
        }
    }

    /// The template's body font size, in points
    pub fn normalsize(&self) -> f64 {
        match self {
            DocClass::AcmSigconf => 9.0,
            DocClass::IeeeConference => 10.0,
        }
    }

    /// The template's `\small` font size, in points
    pub fn small(&self) -> f64 {
        match self {
            DocClass::AcmSigconf => 8.5,
            DocClass::IeeeConference => 9.0,
        }
    }

    /// The template's `\footnotesize` font size, in points
    pub fn footnotesize(&self) -> f64 {
        match self {
            DocClass::AcmSigconf => 8.0,
            DocClass::IeeeConference => 8.0,
        }
    }

    /// The template's `\scriptsize` font size, in points
    pub fn scriptsize(&self) -> f64 {
        match self {
            DocClass::AcmSigconf => 7.0,
            DocClass::IeeeConference => 7.0,
        }
    }

    /// The font size used for figure captions, in points
    pub fn caption(&self) -> f64 {
        match self {
            DocClass::AcmSigconf => 8.0,
            DocClass::IeeeConference => 8.0,
        }
    }
}

/// A figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigSize {
    /// Figure width in inches
    pub width: f64,
    /// Figure height in inches
    pub height: f64,
}

impl FigSize {
    /// Create a figure size from explicit width and height in inches
    pub fn new(width: f64, height: f64) -> Self {
        FigSize { width, height }
    }

    /// A figure spanning one column of the document.
    ///
    /// The height follows the golden ratio, shortened by 20% so that two
    /// stacked column figures leave room for their captions.
    pub fn column(doc: DocClass) -> Self {
        let width = doc.columnwidth() / POINTS_PER_INCH;
        let height = width / GOLDEN_RATIO * 0.8;
        FigSize { width, height }
    }

    /// A figure spanning one third of the text width, golden-ratio tall.
    /// Three of these sit side by side across a full page.
    pub fn third(doc: DocClass) -> Self {
        let width = doc.textwidth() / 3.0 / POINTS_PER_INCH;
        let height = width / GOLDEN_RATIO;
        FigSize { width, height }
    }

    /// A wide, flat figure spanning the full text width.
    pub fn full_width(doc: DocClass) -> Self {
        let width = doc.textwidth() / POINTS_PER_INCH;
        let height = width / GOLDEN_RATIO / 3.0;
        FigSize { width, height }
    }

    /// Convert to a pixel size at the given resolution.
    /// Both dimensions are at least one pixel.
    pub fn to_pixels(&self, dpi: f64) -> (u32, u32) {
        let w = (self.width * dpi).round().max(1.0) as u32;
        let h = (self.height * dpi).round().max(1.0) as u32;
        (w, h)
    }
}
