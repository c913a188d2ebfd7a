//! Review state - the selection state manager
//!
//! `ReviewState` owns both selection tables. The tables are the source of
//! truth; the snapshot is recaptured from them after every bulk operation
//! and before every export.

use super::artist::ArtistRow;
use super::classification::Classification;
use super::group::Group;
use super::selection::SelectionTable;
use super::snapshot::{ExportKind, ExportPayload, SelectionSnapshot};
use crate::error::ImportError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Result of a successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// JSON document without a `selectionState`; nothing changed
    NoSelectionState,
    /// Records from a JSON snapshot were applied to `rows` rows
    Restored { rows: usize },
    /// A name list was applied; `checked` rows are now checked
    NameList { names: usize, checked: usize },
}

#[derive(Debug, Clone, Default)]
pub struct ReviewState {
    existing: SelectionTable,
    new: SelectionTable,
    snapshot: SelectionSnapshot,
}

impl ReviewState {
    pub fn new(existing: Vec<ArtistRow>, new: Vec<ArtistRow>) -> Self {
        let mut state = Self {
            existing: SelectionTable::new(existing),
            new: SelectionTable::new(new),
            snapshot: SelectionSnapshot::default(),
        };
        state.recapture();
        state
    }

    pub fn from_classification(classification: &Classification) -> Self {
        Self::new(
            classification.rows(Group::Existing),
            classification.rows(Group::New),
        )
    }

    pub fn table(&self, group: Group) -> &SelectionTable {
        match group {
            Group::Existing => &self.existing,
            Group::New => &self.new,
        }
    }

    fn table_mut(&mut self, group: Group) -> &mut SelectionTable {
        match group {
            Group::Existing => &mut self.existing,
            Group::New => &mut self.new,
        }
    }

    /// Last captured snapshot
    pub fn snapshot(&self) -> &SelectionSnapshot {
        &self.snapshot
    }

    /// Rebuild the snapshot from the live rows
    pub fn recapture(&mut self) {
        self.snapshot = SelectionSnapshot {
            existing: self.existing.capture(),
            new: self.new.capture(),
        };
    }

    pub fn select_all(&mut self, group: Group, checked: bool) {
        self.table_mut(group).set_all(checked);
        tracing::debug!(group = group.key(), checked, "select all");
        self.recapture();
    }

    pub fn invert(&mut self, group: Group) {
        self.table_mut(group).invert();
        tracing::debug!(group = group.key(), "invert selection");
        self.recapture();
    }

    /// Flip one row by position within its group
    pub fn toggle(&mut self, group: Group, position: usize) -> Option<bool> {
        self.table_mut(group).toggle(position)
    }

    /// Recapture and build the export document
    pub fn export(&mut self, kind: ExportKind, at: DateTime<Utc>) -> ExportPayload {
        self.recapture();
        ExportPayload::build(kind, self.snapshot.clone(), at)
    }

    /// Apply imported content, either an exported JSON document or a
    /// newline-delimited list of names.
    ///
    /// JSON content is fully parsed before any row is touched, so a parse
    /// failure leaves the state unchanged.
    pub fn import(&mut self, content: &str, is_json: bool) -> Result<ImportOutcome, ImportError> {
        let outcome = if is_json {
            self.import_json(content)?
        } else {
            self.import_names(content)
        };
        self.recapture();
        Ok(outcome)
    }

    fn import_json(&mut self, content: &str) -> Result<ImportOutcome, ImportError> {
        let document: Value = serde_json::from_str(content)?;
        let state = match document.get("selectionState") {
            None | Some(Value::Null) => return Ok(ImportOutcome::NoSelectionState),
            Some(state) => state,
        };
        let snapshot = SelectionSnapshot::deserialize(state)?;

        let mut rows = 0;
        for group in Group::all() {
            let table = self.table_mut(group);
            for record in snapshot.group(group) {
                rows += table.set_checked_by_name(&record.name, record.checked);
            }
        }
        Ok(ImportOutcome::Restored { rows })
    }

    fn import_names(&mut self, content: &str) -> ImportOutcome {
        let names: HashSet<String> = parse_name_list(content);
        let mut checked = 0;
        for group in Group::all() {
            checked += self.table_mut(group).check_only(&names);
        }
        ImportOutcome::NameList {
            names: names.len(),
            checked,
        }
    }
}

/// Split on newlines, trim, and drop blank lines
pub fn parse_name_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::selection::SelectAllState;
    use chrono::TimeZone;

    fn row(name: &str, checked: bool, files: &[&str]) -> ArtistRow {
        ArtistRow::new(name, files.iter().map(|f| f.to_string()).collect(), checked)
    }

    fn sample() -> ReviewState {
        ReviewState::new(
            vec![row("A", true, &["f1", "f2"]), row("B", false, &["f3"])],
            vec![row("C", true, &["f4"]), row("D", false, &["f5"])],
        )
    }

    fn flags(state: &ReviewState, group: Group) -> Vec<bool> {
        state.table(group).rows().iter().map(|r| r.checked).collect()
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_select_all_recaptures_snapshot() {
        let mut state = sample();
        state.select_all(Group::New, true);
        assert_eq!(flags(&state, Group::New), vec![true, true]);
        assert!(state.snapshot().new.iter().all(|r| r.checked));
        // Other group untouched
        assert_eq!(flags(&state, Group::Existing), vec![true, false]);
    }

    #[test]
    fn test_invert_updates_indicator() {
        let mut state = sample();
        state.invert(Group::Existing);
        assert_eq!(flags(&state, Group::Existing), vec![false, true]);
        assert_eq!(
            state.table(Group::Existing).indicator(),
            SelectAllState::Indeterminate
        );
        assert!(!state.snapshot().existing[0].checked);
    }

    #[test]
    fn test_export_recaptures_toggled_rows() {
        let mut state = sample();
        state.toggle(Group::Existing, 1);
        // Toggle alone does not refresh the cached snapshot
        assert!(!state.snapshot().existing[1].checked);

        let payload = state.export(ExportKind::Artists, at());
        assert_eq!(payload.text(), "A\nB\nC");
        assert!(state.snapshot().existing[1].checked);
    }

    #[test]
    fn test_export_group_order() {
        let mut state = sample();
        let payload = state.export(ExportKind::Files, at());
        assert_eq!(payload.text(), "f1\nf2\nf4");
    }

    #[test]
    fn test_json_round_trip_restores_flags() {
        let mut state = sample();
        let json = state.export(ExportKind::Artists, at()).to_json().unwrap();
        let expected_existing = flags(&state, Group::Existing);
        let expected_new = flags(&state, Group::New);

        state.invert(Group::Existing);
        state.select_all(Group::New, false);

        let outcome = state.import(&json, true).unwrap();
        assert_eq!(outcome, ImportOutcome::Restored { rows: 4 });
        assert_eq!(flags(&state, Group::Existing), expected_existing);
        assert_eq!(flags(&state, Group::New), expected_new);
    }

    #[test]
    fn test_json_import_ignores_unknown_names() {
        let mut state = sample();
        let json = r#"{"selectionState": {"existing": [
            {"name": "B", "checked": true, "files": []},
            {"name": "Nobody", "checked": true, "files": []}
        ]}}"#;

        let outcome = state.import(json, true).unwrap();
        assert_eq!(outcome, ImportOutcome::Restored { rows: 1 });
        assert_eq!(flags(&state, Group::Existing), vec![true, true]);
        assert_eq!(flags(&state, Group::New), vec![true, false]);
    }

    #[test]
    fn test_json_import_without_selection_state_is_noop() {
        let mut state = sample();
        let outcome = state.import(r#"{"artists": ["B"]}"#, true).unwrap();
        assert_eq!(outcome, ImportOutcome::NoSelectionState);
        assert_eq!(flags(&state, Group::Existing), vec![true, false]);

        let outcome = state.import(r#"{"selectionState": null}"#, true).unwrap();
        assert_eq!(outcome, ImportOutcome::NoSelectionState);
    }

    #[test]
    fn test_malformed_json_leaves_state() {
        let mut state = sample();
        let err = state.import("{not json", true).unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
        assert_eq!(flags(&state, Group::Existing), vec![true, false]);
        assert_eq!(flags(&state, Group::New), vec![true, false]);
    }

    #[test]
    fn test_wrong_shape_leaves_state() {
        let mut state = sample();
        let json = r#"{"selectionState": {"existing": [{"name": "B", "checked": true}], "new": 7}}"#;
        let err = state.import(json, true).unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
        assert_eq!(flags(&state, Group::Existing), vec![true, false]);
    }

    #[test]
    fn test_text_import_overwrites() {
        let mut state = sample();
        state.select_all(Group::Existing, true);
        state.select_all(Group::New, true);

        let outcome = state.import("A\nC", false).unwrap();
        assert_eq!(outcome, ImportOutcome::NameList { names: 2, checked: 2 });
        assert_eq!(flags(&state, Group::Existing), vec![true, false]);
        assert_eq!(flags(&state, Group::New), vec![true, false]);
    }

    #[test]
    fn test_text_import_trims_and_skips_blank_lines() {
        let mut state = sample();
        state.import("  B  \r\n\n\n D\n", false).unwrap();
        assert_eq!(flags(&state, Group::Existing), vec![false, true]);
        assert_eq!(flags(&state, Group::New), vec![false, true]);
    }

    #[test]
    fn test_json_import_broadcasts_duplicate_names() {
        let mut state = ReviewState::new(
            vec![row("A", false, &[]), row("A", false, &[]), row("B", false, &[])],
            Vec::new(),
        );
        let json = r#"{"selectionState": {"existing": [{"name": "A", "checked": true}]}}"#;
        assert_eq!(
            state.import(json, true).unwrap(),
            ImportOutcome::Restored { rows: 2 }
        );
        assert_eq!(flags(&state, Group::Existing), vec![true, true, false]);
    }

    #[test]
    fn test_from_classification() {
        let c = Classification::parse(
            "artists:\n  existing_artists:\n    \"[A]\": [a.zip]\n  new_artists:\n    \"[N]\": [n.zip]\n",
        )
        .unwrap();
        let state = ReviewState::from_classification(&c);
        assert_eq!(state.table(Group::Existing).rows()[0].name, "A");
        assert_eq!(state.snapshot().selected_artists(), vec!["A"]);
    }
}
