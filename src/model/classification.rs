//! Classification result loading
//!
//! The classifier writes a YAML document whose `artists` section maps folder
//! names to the archive files sorted under them:
//!
//! ```yaml
//! artists:
//!   existing_artists:
//!     "[Artist A]": [a1.zip, a2.zip]
//!   new_artists:
//!     "[Artist C]": [c1.zip]
//! ```
//!
//! Everything else in the document (paths, statistics, unclassified files)
//! is ignored here.

use super::artist::ArtistRow;
use super::group::Group;
use crate::error::ClassificationError;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct ClassificationFile {
    #[serde(default)]
    artists: ArtistsSection,
}

#[derive(Debug, Default, Deserialize)]
struct ArtistsSection {
    #[serde(default)]
    existing_artists: Option<Mapping>,
    #[serde(default)]
    new_artists: Option<Mapping>,
}

/// One folder entry from the classification result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistEntry {
    pub folder: String,
    pub files: Vec<String>,
}

/// Parsed classification result, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub existing: Vec<ArtistEntry>,
    pub new: Vec<ArtistEntry>,
}

impl Classification {
    /// Load and parse a classification YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClassificationError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ClassificationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ClassificationError> {
        let file: Option<ClassificationFile> = serde_yaml::from_str(contents)?;
        let file = file.unwrap_or_default();

        Ok(Self {
            existing: entries(file.artists.existing_artists),
            new: entries(file.artists.new_artists),
        })
    }

    pub fn entries(&self, group: Group) -> &[ArtistEntry] {
        match group {
            Group::Existing => &self.existing,
            Group::New => &self.new,
        }
    }

    /// Initial rows for a group; existing artists start checked
    pub fn rows(&self, group: Group) -> Vec<ArtistRow> {
        self.entries(group)
            .iter()
            .map(|entry| {
                ArtistRow::new(
                    entry.folder.clone(),
                    entry.files.clone(),
                    group.checked_by_default(),
                )
            })
            .collect()
    }

    pub fn file_count(&self) -> usize {
        self.existing
            .iter()
            .chain(self.new.iter())
            .map(|entry| entry.files.len())
            .sum()
    }
}

fn entries(mapping: Option<Mapping>) -> Vec<ArtistEntry> {
    let Some(mapping) = mapping else {
        return Vec::new();
    };

    mapping
        .into_iter()
        .filter_map(|(key, value)| {
            let folder = scalar_to_string(&key)?;
            let files = match value {
                Value::Sequence(items) => items.iter().filter_map(scalar_to_string).collect(),
                other => scalar_to_string(&other).into_iter().collect(),
            };
            Some(ArtistEntry { folder, files })
        })
        .collect()
}

/// Folder and file names may come back as numbers or booleans when the YAML
/// leaves them unquoted
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
