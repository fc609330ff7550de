//! Error types and path context for generation and export operations

use plotters::drawing::DrawingAreaErrorKind;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all generator operations
#[derive(Debug)]
pub enum GeneratorError {
    /// Seed collection does not hold exactly one value per window slot
    InvalidSeedCount {
        /// Number of seeds the window requires
        expected: usize,
        /// Number of seeds supplied
        found: usize,
    },

    /// Scale is zero, negative or NaN
    InvalidScale {
        /// Rejected scale, as given
        value: String,
    },

    /// Presentation or export parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Chart drawing failed before anything was saved
    Rendering {
        /// Description reported by the drawing backend
        message: String,
    },

    /// Failed to save a rendered plot to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to write the sequence as CSV
    CsvExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying CSV writer error
        source: csv::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl GeneratorError {
    /// Whether the error came from rejected generator input rather than output
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSeedCount { .. }
                | Self::InvalidScale { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeedCount { expected, found } => {
                write!(f, "Expected exactly {expected} seeds, got {found}")
            }
            Self::InvalidScale { value } => {
                write!(f, "Scale must be strictly positive, got '{value}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Rendering { message } => write!(f, "Failed to render plot: {message}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::CsvExport { path, source } => {
                write!(f, "Failed to export CSV to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::CsvExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Attaches the path an export or file system failure happened on
pub trait WithPath<T> {
    /// Replace the placeholder path of a path-carrying error
    ///
    /// # Errors
    ///
    /// Propagates the original error with `path` applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<GeneratorError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Validation errors have no path to enrich
            match &mut error {
                GeneratorError::ImageExport { path: slot, .. }
                | GeneratorError::CsvExport { path: slot, .. }
                | GeneratorError::FileSystem { path: slot, .. } => {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for GeneratorError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<csv::Error> for GeneratorError {
    fn from(err: csv::Error) -> Self {
        Self::CsvExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for GeneratorError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Rendering {
            message: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GeneratorError {
    GeneratorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
