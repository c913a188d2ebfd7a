//! Typed errors for loading and importing selection data

use std::path::PathBuf;

/// Failure while importing a selection file
///
/// Either variant leaves every row exactly as it was before the import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Invalid selection file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while loading a classification result
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse classification YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}
