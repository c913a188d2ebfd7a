//! Selection table for a single artist group
//!
//! Rows keep their load order. Lookups by artist name go through a keyed
//! index instead of scanning visible text; a name shared by several rows maps
//! to all of them and every such row is updated together.

use super::artist::{ArtistRecord, ArtistRow};
use std::collections::{HashMap, HashSet};

/// State of a group's "select all" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    Checked,
    Unchecked,
    Indeterminate,
}

impl SelectAllState {
    /// Derive the indicator from row counts.
    ///
    /// An empty group counts as fully checked.
    pub fn from_counts(checked: usize, total: usize) -> Self {
        if checked == total {
            SelectAllState::Checked
        } else if checked > 0 {
            SelectAllState::Indeterminate
        } else {
            SelectAllState::Unchecked
        }
    }

    pub fn marker(&self) -> &str {
        match self {
            SelectAllState::Checked => "[x]",
            SelectAllState::Unchecked => "[ ]",
            SelectAllState::Indeterminate => "[-]",
        }
    }
}

/// Rows of one group plus a name index
#[derive(Debug, Clone, Default)]
pub struct SelectionTable {
    rows: Vec<ArtistRow>,
    index: HashMap<String, Vec<usize>>,
}

impl SelectionTable {
    pub fn new(rows: Vec<ArtistRow>) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, row) in rows.iter().enumerate() {
            index.entry(row.name.clone()).or_default().push(position);
        }
        Self { rows, index }
    }

    pub fn rows(&self) -> &[ArtistRow] {
        &self.rows
    }

    pub fn get(&self, position: usize) -> Option<&ArtistRow> {
        self.rows.get(position)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.rows.iter().filter(|row| row.checked).count()
    }

    /// Current tri-state indicator for the group
    pub fn indicator(&self) -> SelectAllState {
        SelectAllState::from_counts(self.checked_count(), self.rows.len())
    }

    /// Row positions registered under a name (empty when unknown)
    pub fn positions(&self, name: &str) -> &[usize] {
        self.index.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Capture the rows as records, in row order
    pub fn capture(&self) -> Vec<ArtistRecord> {
        self.rows.iter().map(ArtistRow::record).collect()
    }

    pub fn set_all(&mut self, checked: bool) {
        for row in &mut self.rows {
            row.checked = checked;
        }
    }

    pub fn invert(&mut self) {
        for row in &mut self.rows {
            row.checked = !row.checked;
        }
    }

    /// Flip a single row, returning its new state
    pub fn toggle(&mut self, position: usize) -> Option<bool> {
        let row = self.rows.get_mut(position)?;
        row.checked = !row.checked;
        Some(row.checked)
    }

    /// Set every row named `name`, returning how many rows matched
    pub fn set_checked_by_name(&mut self, name: &str, checked: bool) -> usize {
        let Some(positions) = self.index.get(name) else {
            return 0;
        };
        for &position in positions {
            self.rows[position].checked = checked;
        }
        positions.len()
    }

    /// Check exactly the rows whose names are in `names`, returning the
    /// number of rows left checked
    pub fn check_only(&mut self, names: &HashSet<String>) -> usize {
        let mut checked = 0;
        for row in &mut self.rows {
            row.checked = names.contains(&row.name);
            if row.checked {
                checked += 1;
            }
        }
        checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(states: &[(&str, bool)]) -> SelectionTable {
        SelectionTable::new(
            states
                .iter()
                .map(|(name, checked)| ArtistRow::new(*name, vec![format!("{}.zip", name)], *checked))
                .collect(),
        )
    }

    fn flags(table: &SelectionTable) -> Vec<bool> {
        table.rows().iter().map(|row| row.checked).collect()
    }

    #[test]
    fn test_indicator_tri_state() {
        let mut t = table(&[("A", true), ("B", false), ("C", false)]);
        assert_eq!(t.indicator(), SelectAllState::Indeterminate);

        t.set_all(false);
        assert_eq!(t.indicator(), SelectAllState::Unchecked);

        t.set_all(true);
        assert_eq!(t.indicator(), SelectAllState::Checked);
    }

    #[test]
    fn test_indicator_empty_group_is_checked() {
        assert_eq!(SelectionTable::default().indicator(), SelectAllState::Checked);
    }

    #[test]
    fn test_set_all_is_idempotent() {
        let mut once = table(&[("A", false), ("B", true)]);
        once.set_all(true);
        let mut twice = once.clone();
        twice.set_all(true);
        assert_eq!(flags(&once), flags(&twice));
        assert_eq!(flags(&once), vec![true, true]);
    }

    #[test]
    fn test_invert_twice_restores_rows() {
        let mut t = table(&[("A", true), ("B", false), ("C", true)]);
        let before = flags(&t);

        t.invert();
        assert_eq!(flags(&t), vec![false, true, false]);

        t.invert();
        assert_eq!(flags(&t), before);
    }

    #[test]
    fn test_invert_leaves_names_and_files() {
        let mut t = table(&[("A", true)]);
        t.invert();
        assert_eq!(t.rows()[0].name, "A");
        assert_eq!(t.rows()[0].files, vec!["A.zip".to_string()]);
    }

    #[test]
    fn test_toggle_single_row() {
        let mut t = table(&[("A", false), ("B", false)]);
        assert_eq!(t.toggle(1), Some(true));
        assert_eq!(flags(&t), vec![false, true]);
        assert_eq!(t.toggle(5), None);
    }

    #[test]
    fn test_set_checked_by_name_broadcasts_duplicates() {
        let mut t = table(&[("A", false), ("B", false), ("A", false)]);
        assert_eq!(t.positions("A"), &[0, 2]);

        let matched = t.set_checked_by_name("A", true);
        assert_eq!(matched, 2);
        assert_eq!(flags(&t), vec![true, false, true]);

        assert_eq!(t.set_checked_by_name("missing", true), 0);
        assert_eq!(flags(&t), vec![true, false, true]);
    }

    #[test]
    fn test_check_only_overwrites() {
        let mut t = table(&[("A", true), ("B", true), ("C", true)]);
        let names: HashSet<String> = ["A".to_string(), "Z".to_string()].into_iter().collect();
        assert_eq!(t.check_only(&names), 1);
        assert_eq!(flags(&t), vec![true, false, false]);
    }

    #[test]
    fn test_capture_preserves_row_order() {
        let t = table(&[("C", true), ("A", false), ("B", true)]);
        let names: Vec<String> = t.capture().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
