//! Selection snapshots and export payloads

use super::artist::ArtistRecord;
use super::group::Group;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// File name of the JSON selection state artifact
pub const STATE_FILE_NAME: &str = "selection_state.json";

/// Point-in-time capture of both groups
///
/// A group missing from an imported document deserializes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    #[serde(default)]
    pub existing: Vec<ArtistRecord>,
    #[serde(default)]
    pub new: Vec<ArtistRecord>,
}

impl SelectionSnapshot {
    pub fn group(&self, group: Group) -> &[ArtistRecord] {
        match group {
            Group::Existing => &self.existing,
            Group::New => &self.new,
        }
    }

    fn checked_records(&self) -> impl Iterator<Item = &ArtistRecord> {
        Group::all()
            .into_iter()
            .flat_map(move |group| self.group(group).iter())
            .filter(|record| record.checked)
    }

    /// Names of checked artists, existing group first
    pub fn selected_artists(&self) -> Vec<String> {
        self.checked_records().map(|r| r.name.clone()).collect()
    }

    /// Files of checked artists, flattened in artist order
    pub fn selected_files(&self) -> Vec<String> {
        self.checked_records()
            .flat_map(|r| r.files.iter().cloned())
            .collect()
    }
}

/// What the text artifact of an export lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Artists,
    Files,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Artists => "artists",
            ExportKind::Files => "files",
        }
    }

    /// `selected_artists.txt` or `selected_files.txt`
    pub fn text_file_name(&self) -> String {
        format!("selected_{}.txt", self.as_str())
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full JSON export document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub artists: Vec<String>,
    pub files: Vec<String>,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: ExportKind,
    pub selection_state: SelectionSnapshot,
}

impl ExportPayload {
    pub fn build(kind: ExportKind, snapshot: SelectionSnapshot, at: DateTime<Utc>) -> Self {
        Self {
            artists: snapshot.selected_artists(),
            files: snapshot.selected_files(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            kind,
            selection_state: snapshot,
        }
    }

    /// Content of the text artifact: one entry per line
    pub fn text(&self) -> String {
        match self.kind {
            ExportKind::Artists => self.artists.join("\n"),
            ExportKind::Files => self.files.join("\n"),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Named artifacts ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifacts {
    pub text_name: String,
    pub text: String,
    pub json_name: &'static str,
    pub json: String,
}

impl ExportArtifacts {
    pub fn from_payload(payload: &ExportPayload) -> serde_json::Result<Self> {
        Ok(Self {
            text_name: payload.kind.text_file_name(),
            text: payload.text(),
            json_name: STATE_FILE_NAME,
            json: payload.to_json()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(name: &str, checked: bool, files: &[&str]) -> ArtistRecord {
        ArtistRecord {
            name: name.to_string(),
            checked,
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn sample() -> SelectionSnapshot {
        SelectionSnapshot {
            existing: vec![record("A", true, &["f1", "f2"]), record("B", false, &["f3"])],
            new: vec![record("C", true, &["f4"])],
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 8, 9, 10).unwrap()
    }

    #[test]
    fn test_export_artists_text() {
        let payload = ExportPayload::build(ExportKind::Artists, sample(), at());
        assert_eq!(payload.text(), "A\nC");
        assert_eq!(payload.files, vec!["f1", "f2", "f4"]);
    }

    #[test]
    fn test_export_files_text() {
        let payload = ExportPayload::build(ExportKind::Files, sample(), at());
        assert_eq!(payload.text(), "f1\nf2\nf4");
        assert_eq!(payload.artists, vec!["A", "C"]);
    }

    #[test]
    fn test_export_nothing_checked_is_empty() {
        let mut snapshot = sample();
        for r in snapshot.existing.iter_mut().chain(snapshot.new.iter_mut()) {
            r.checked = false;
        }
        let payload = ExportPayload::build(ExportKind::Artists, snapshot, at());
        assert_eq!(payload.text(), "");
        assert!(payload.artists.is_empty());
        assert!(payload.files.is_empty());
    }

    #[test]
    fn test_timestamp_is_iso_with_millis() {
        let payload = ExportPayload::build(ExportKind::Files, sample(), at());
        assert_eq!(payload.timestamp, "2024-03-05T08:09:10.000Z");
    }

    #[test]
    fn test_payload_json_field_names() {
        let payload = ExportPayload::build(ExportKind::Artists, sample(), at());
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(value["type"], "artists");
        assert_eq!(value["artists"][1], "C");
        assert_eq!(value["selectionState"]["existing"][0]["name"], "A");
        assert_eq!(value["selectionState"]["existing"][1]["checked"], false);
        assert_eq!(value["selectionState"]["new"][0]["files"][0], "f4");
    }

    #[test]
    fn test_artifact_names() {
        let payload = ExportPayload::build(ExportKind::Files, sample(), at());
        let artifacts = ExportArtifacts::from_payload(&payload).unwrap();
        assert_eq!(artifacts.text_name, "selected_files.txt");
        assert_eq!(artifacts.json_name, "selection_state.json");
        assert!(artifacts.json.contains("\n  \"artists\": ["));
    }

    #[test]
    fn test_snapshot_missing_group_defaults_empty() {
        let snapshot: SelectionSnapshot =
            serde_json::from_str(r#"{"new": [{"name": "C", "checked": true}]}"#).unwrap();
        assert!(snapshot.existing.is_empty());
        assert_eq!(snapshot.selected_artists(), vec!["C"]);
    }
}
