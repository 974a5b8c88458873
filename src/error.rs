//! Error type for figure validation and rendering.
use std::path::PathBuf;
use std::{fmt, io};

use plotters::drawing::DrawingAreaErrorKind;

/// Errors that can occur while validating or rendering a figure
#[derive(Debug)]
pub enum Error {
    /// A series length does not match the category axis length
    InvalidSeriesShape {
        /// Label of the offending series
        label: String,
        /// Actual number of values or errors in the series
        len: usize,
        /// Expected length, from the category axis
        expected: usize,
    },
    /// No series (or no category slots) were supplied
    EmptyGroup,
    /// The destination is not an existing, writable directory
    DestinationUnwritable(PathBuf),
    /// An I/O error while writing an output file
    Io(io::Error),
    /// An error reported by the rendering backend
    Render(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSeriesShape {
                label,
                len,
                expected,
            } => write!(
                f,
                "series \"{}\" has {} entries for {} categories",
                label, len, expected
            ),
            Error::EmptyGroup => write!(f, "no series supplied"),
            Error::DestinationUnwritable(path) => {
                write!(f, "destination is not a writable directory: {}", path.display())
            }
            Error::Io(err) => write!(f, "i/o error: {}", err),
            Error::Render(reason) => write!(f, "rendering failed: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Render(err.to_string())
    }
}
