//! Writing export artifacts to disk

use crate::model::{ExportArtifacts, ExportPayload};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of the two files written by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub text: PathBuf,
    pub json: PathBuf,
}

/// Write the text list and the JSON selection state into `dir`
pub fn write_export(dir: &Path, payload: &ExportPayload) -> Result<ExportedFiles> {
    let artifacts =
        ExportArtifacts::from_payload(payload).context("Failed to serialize selection state")?;

    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    }

    let text = dir.join(&artifacts.text_name);
    fs::write(&text, &artifacts.text)
        .with_context(|| format!("Failed to write {}", text.display()))?;

    let json = dir.join(artifacts.json_name);
    fs::write(&json, &artifacts.json)
        .with_context(|| format!("Failed to write {}", json.display()))?;

    tracing::info!(
        kind = %payload.kind,
        artists = payload.artists.len(),
        files = payload.files.len(),
        dir = %dir.display(),
        "exported selection"
    );

    Ok(ExportedFiles { text, json })
}
