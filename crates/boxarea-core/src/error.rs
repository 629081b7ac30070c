//! Error types for boxarea
//!
//! Provides error handling for:
//! - Record construction from raw text fields
//! - CSV loading (missing file, I/O, malformed rows)
//! - Configuration parsing

use std::path::PathBuf;

/// Errors while building a [`BoxRecord`](crate::BoxRecord) from text fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Row does not have the expected number of fields
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Required field count
        expected: usize,
        /// Fields present in the row
        found: usize,
    },

    /// Coordinate field is not a finite number
    #[error("invalid coordinate {field}: '{value}' is not a finite number")]
    InvalidCoordinate {
        /// Coordinate name (`x1`, `y1`, `x2` or `y2`)
        field: &'static str,
        /// Offending raw value
        value: String,
    },
}

impl RecordError {
    /// Create invalid coordinate error
    pub fn invalid_coordinate(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            field,
            value: value.into(),
        }
    }
}

/// Errors during CSV loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Input path does not exist
    #[error("file not found: {}", .path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// Any other IO error during file read
    #[error("io error reading {}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Malformed data line
    #[error("parse error in {} at line {line} ('{content}')", .path.display())]
    Parse {
        /// File being read
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
        /// Why the row was rejected
        #[source]
        source: RecordError,
    },
}

impl LoadError {
    /// Map an IO error for `path`, splitting out the not-found case
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create parse error for a line
    pub fn parse_error(
        path: impl Into<PathBuf>,
        line: usize,
        content: impl Into<String>,
        source: RecordError,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            content: content.into(),
            source,
        }
    }

    /// Check if the input file was missing
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Line number of a parse failure, if any
    #[inline]
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Errors while reading loader configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {}", .path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid TOML for the expected shape
    #[error("invalid config toml")]
    Toml(#[from] toml::de::Error),

    /// Config values are inconsistent
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
