/*!
 * Data series definitions.
 *
 * Series are plain in-memory values: a label, an ordered value sequence and
 * an ordered sequence of symmetric error magnitudes of the same length.
 * A [`BarGroup`] ties several series to one shared category axis; an
 * [`XySeries`] carries explicit x coordinates for line charts.
 */
use crate::error::Error;

/// One labeled set of values with symmetric error magnitudes,
/// plotted as same-colored, same-hatched bars across a category axis.
#[derive(Debug, Clone)]
pub struct Series {
    label: String,
    values: Vec<f64>,
    errors: Vec<f64>,
}

impl Series {
    /// Create a series from a label, values and per-value error magnitudes.
    /// Values and errors must have one entry per category of the group the
    /// series is plotted in; this is checked when the group is validated.
    pub fn new(label: impl Into<String>, values: Vec<f64>, errors: Vec<f64>) -> Self {
        Series {
            label: label.into(),
            values,
            errors,
        }
    }

    /// Create a series without error bars (all error magnitudes zero)
    pub fn without_errors(label: impl Into<String>, values: Vec<f64>) -> Self {
        let errors = vec![0.0; values.len()];
        Series {
            label: label.into(),
            values,
            errors,
        }
    }

    /// Get the series label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the error magnitudes
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    pub(crate) fn check_len(&self, expected: usize) -> Result<(), Error> {
        if self.values.len() != expected || self.errors.len() != expected {
            let len = if self.values.len() != expected {
                self.values.len()
            } else {
                self.errors.len()
            };
            return Err(Error::InvalidSeriesShape {
                label: self.label.clone(),
                len,
                expected,
            });
        }
        Ok(())
    }
}

/// A group of series sharing one category axis.
///
/// All series render into the same category slots, side by side; the group
/// defines the slot count, the series order defines the bar order, colors
/// and hatches.
#[derive(Debug, Clone)]
pub struct BarGroup {
    categories: Vec<String>,
    series: Vec<Series>,
}

impl BarGroup {
    /// Create a group from its category labels and series
    pub fn new<S: Into<String>>(categories: Vec<S>, series: Vec<Series>) -> Self {
        BarGroup {
            categories: categories.into_iter().map(Into::into).collect(),
            series,
        }
    }

    /// Add a series and return self for chaining
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Get the category labels
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Get the series
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Get the number of category slots
    pub fn n_slots(&self) -> usize {
        self.categories.len()
    }

    /// Get the number of series
    pub fn n_series(&self) -> usize {
        self.series.len()
    }

    /// Check the group invariants.
    ///
    /// Fails with [`Error::EmptyGroup`] when there is no series or no
    /// category slot, and with [`Error::InvalidSeriesShape`] when any series
    /// length differs from the category axis length. Plot calls run this
    /// before touching the rendering backend.
    pub fn validate(&self) -> Result<(), Error> {
        if self.series.is_empty() || self.categories.is_empty() {
            return Err(Error::EmptyGroup);
        }
        for series in &self.series {
            series.check_len(self.categories.len())?;
        }
        Ok(())
    }

    /// Largest value plus error over all series, for axis sizing.
    /// Non-finite entries are ignored.
    pub(crate) fn max_with_errors(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().zip(&s.errors))
            .map(|(v, e)| v + e)
            .filter(|y| y.is_finite())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest value minus error over all series.
    pub(crate) fn min_with_errors(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().zip(&s.errors))
            .map(|(v, e)| v - e)
            .filter(|y| y.is_finite())
            .fold(f64::INFINITY, f64::min)
    }
}

/// One labeled x/y series with symmetric y error magnitudes,
/// plotted as a line with error bars.
#[derive(Debug, Clone)]
pub struct XySeries {
    label: String,
    x: Vec<f64>,
    y: Vec<f64>,
    errors: Vec<f64>,
}

impl XySeries {
    /// Create a series from a label, x and y coordinates and per-point
    /// error magnitudes. The three sequences must have the same length;
    /// this is checked at plot time.
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>, errors: Vec<f64>) -> Self {
        XySeries {
            label: label.into(),
            x,
            y,
            errors,
        }
    }

    /// Create a series without error bars (all error magnitudes zero)
    pub fn without_errors(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        let errors = vec![0.0; y.len()];
        XySeries {
            label: label.into(),
            x,
            y,
            errors,
        }
    }

    /// Get the series label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the x coordinates
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Get the y coordinates
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Get the error magnitudes
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    pub(crate) fn check_shape(&self) -> Result<(), Error> {
        let expected = self.x.len();
        if self.y.len() != expected || self.errors.len() != expected {
            let len = if self.y.len() != expected {
                self.y.len()
            } else {
                self.errors.len()
            };
            return Err(Error::InvalidSeriesShape {
                label: self.label.clone(),
                len,
                expected,
            });
        }
        Ok(())
    }
}
