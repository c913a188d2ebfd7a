//! Reading selection files for import

use crate::error::ImportError;
use crate::model::{ImportOutcome, ReviewState};
use std::fs;
use std::path::Path;

/// `.json` files are exported selection state; anything else is a name list
pub fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Read a whole import file as text
pub fn read_import_file(path: &Path) -> Result<String, ImportError> {
    let bytes = fs::read(path).map_err(|source| ImportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.trim_start_matches('\u{feff}').to_string())
}

/// Read `path` and apply it to `state`
pub fn import_file(state: &mut ReviewState, path: &Path) -> Result<ImportOutcome, ImportError> {
    let content = read_import_file(path)?;
    let is_json = is_json_path(path);
    let outcome = state.import(&content, is_json)?;
    tracing::info!(path = %path.display(), is_json, ?outcome, "imported selection");
    Ok(outcome)
}
