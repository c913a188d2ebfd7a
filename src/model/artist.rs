//! Artist rows and their serialized records

use serde::{Deserialize, Serialize};

/// One artist as captured into a selection snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub files: Vec<String>,
}

/// A live row in a selection table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRow {
    /// Display name, used as the lookup key
    pub name: String,
    /// Folder name as written by the classifier, e.g. `[Artist]`
    pub folder: String,
    /// Archive files classified under this artist
    pub files: Vec<String>,
    pub checked: bool,
}

impl ArtistRow {
    pub fn new(folder: impl Into<String>, files: Vec<String>, checked: bool) -> Self {
        let folder = folder.into();
        Self {
            name: display_name(&folder),
            folder,
            files,
            checked,
        }
    }

    /// Capture the row as a snapshot record
    pub fn record(&self) -> ArtistRecord {
        ArtistRecord {
            name: self.name.clone(),
            checked: self.checked,
            files: self.files.clone(),
        }
    }

    pub fn marker(&self) -> &str {
        if self.checked {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// Strip the square brackets the classifier puts around folder names
pub fn display_name(folder: &str) -> String {
    folder.trim_matches(|c| c == '[' || c == ']').to_string()
}
