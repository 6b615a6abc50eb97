// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use std::path::PathBuf;

/// Failures of a header generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The dashboard page to embed does not exist.
    #[error("{} not found", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid header options: {0}")]
    InvalidOptions(String),
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
