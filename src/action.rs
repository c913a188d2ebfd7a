//! Action enum - All possible application actions
//!
//! Components turn key events into Actions; the App applies them to the
//! review state.

use crate::model::ExportKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick, used to expire status messages
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextItem,
    PrevItem,
    FirstItem,
    LastItem,
    /// Switch to the other artist group
    NextGroup,
    PrevGroup,

    // ─────────────────────────────────────────────────────────────────────────
    // Files Panel
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Selection (active group)
    // ─────────────────────────────────────────────────────────────────────────
    /// Flip the focused row
    ToggleRow,
    /// Check every row in the group
    SelectAll,
    /// Uncheck every row in the group
    DeselectAll,
    /// Flip every row in the group
    InvertSelection,

    // ─────────────────────────────────────────────────────────────────────────
    // Import / Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Write `selected_<kind>.txt` and `selection_state.json`
    Export(ExportKind),
    /// Prompt for a file to import
    OpenImportDialog,
    /// Import the file at the given path
    ImportFile(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Preview
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the focused artist's search page in the browser
    OpenPreview,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    EnterSearchMode,
    ExitSearchMode,
    ClearSearch,
    SearchInput(char),
    SearchBackspace,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextGroup => write!(f, "NextGroup"),
            Action::PrevGroup => write!(f, "PrevGroup"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::ToggleRow => write!(f, "ToggleRow"),
            Action::SelectAll => write!(f, "SelectAll"),
            Action::DeselectAll => write!(f, "DeselectAll"),
            Action::InvertSelection => write!(f, "InvertSelection"),
            Action::Export(kind) => write!(f, "Export({})", kind),
            Action::OpenImportDialog => write!(f, "OpenImportDialog"),
            Action::ImportFile(path) => write!(f, "ImportFile({})", path),
            Action::OpenPreview => write!(f, "OpenPreview"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::ClearSearch => write!(f, "ClearSearch"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
        }
    }
}
