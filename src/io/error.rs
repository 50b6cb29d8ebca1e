//! Error types for table generation and sheet conversion

use std::fmt;
use std::path::PathBuf;

use crate::spatial::subtile::SubtileCoord;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum AutotileError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a converted sheet to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Source sheet doesn't match the autotile layout
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Two reorder entries read the same generated combination
    DuplicateSourceIndex {
        /// Linear index on the reference grid
        index: usize,
    },

    /// Two reorder entries write the same output cell
    DuplicateTargetIndex {
        /// Linear index on the reference grid
        index: usize,
    },

    /// Reorder entry points outside the 7x7 reference grid
    ReorderOutOfBounds {
        /// Offending `(source, target)` entry
        entry: ([usize; 2], [usize; 2]),
    },

    /// Reference lookup ran on a combination with the wrong number of quadrants
    IncompleteCombination {
        /// Stage being resolved
        stage: &'static str,
        /// Quadrants required before this stage
        expected: usize,
        /// Quadrants actually present
        found: usize,
    },

    /// Wall coordinate would move above row zero
    CoordinateUnderflow {
        /// Coordinate being shifted
        coord: SubtileCoord,
        /// Rows it was shifted by
        shift: u32,
    },

    /// Cell list does not fill the requested grid
    GridSizeMismatch {
        /// Cells required by the grid shape
        expected: usize,
        /// Cells provided
        found: usize,
        /// Underlying shape error
        source: ndarray::ShapeError,
    },
}

impl fmt::Display for AutotileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DuplicateSourceIndex { index } => {
                write!(f, "Reorder table reads source index {index} more than once")
            }
            Self::DuplicateTargetIndex { index } => {
                write!(f, "Reorder table writes target index {index} more than once")
            }
            Self::ReorderOutOfBounds { entry } => {
                write!(
                    f,
                    "Reorder entry {:?} -> {:?} lies outside the reference grid",
                    entry.0, entry.1
                )
            }
            Self::IncompleteCombination {
                stage,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Cannot resolve {stage}: expected {expected} quadrants, found {found}"
                )
            }
            Self::CoordinateUnderflow { coord, shift } => {
                write!(f, "Subtile {coord} cannot be shifted up by {shift} rows")
            }
            Self::GridSizeMismatch {
                expected, found, ..
            } => {
                write!(f, "Grid needs {expected} cells but {found} were provided")
            }
        }
    }
}

impl std::error::Error for AutotileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::GridSizeMismatch { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, AutotileError>;

impl From<std::io::Error> for AutotileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AutotileError {
    AutotileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> AutotileError {
    AutotileError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
