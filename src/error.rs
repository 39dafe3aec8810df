//! Error taxonomy shared by the preprocessing and reporting passes.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading, transforming or writing dataset tables.
///
/// Every variant is fatal for the run; callers at the binary boundary wrap it
/// in `anyhow` and exit non-zero.
#[derive(Debug, Error)]
pub enum EdaError {
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse {column} value '{value}' ({location})")]
    Parse {
        column: String,
        value: String,
        location: String,
    },

    #[error("Schema error in {}: missing column(s) {}", path.display(), missing.join(", "))]
    Schema { path: PathBuf, missing: Vec<String> },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Query failed: {0}")]
    Query(#[from] polars::error::PolarsError),
}

impl EdaError {
    pub fn parse(
        column: impl Into<String>,
        value: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self::Parse {
            column: column.into(),
            value: value.into(),
            location: location.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound {
                path: path.to_path_buf(),
            };
        }
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Maps a CSV error, turning field deserialization failures into
    /// [`EdaError::Parse`] and missing files into [`EdaError::FileNotFound`].
    pub fn csv(path: &Path, headers: Option<&csv::StringRecord>, source: csv::Error) -> Self {
        let mapped = match source.kind() {
            csv::ErrorKind::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Some(Self::FileNotFound {
                    path: path.to_path_buf(),
                })
            }
            csv::ErrorKind::Deserialize { pos, err } => {
                let column = err
                    .field()
                    .and_then(|idx| usize::try_from(idx).ok())
                    .and_then(|idx| headers.and_then(|h| h.get(idx)))
                    .unwrap_or("?")
                    .to_string();
                let location = pos.as_ref().map_or_else(
                    || path.display().to_string(),
                    |p| format!("{} line {}", path.display(), p.line()),
                );
                Some(Self::Parse {
                    column,
                    value: err.kind().to_string(),
                    location,
                })
            }
            _ => None,
        };

        mapped.unwrap_or_else(|| Self::Csv {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub type Result<T> = std::result::Result<T, EdaError>;
