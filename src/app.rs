//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! Selection changes go through `ReviewState`; file and browser work goes
//! through `services`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, ErrorDialog, FilesPanel, HelpDialog, HomeComponent, HomeRenderContext,
    ImportDialog, QuitDialog,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{Classification, ExportKind, ImportOutcome, ReviewState};
use crate::services;
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::path::{Path, PathBuf};

/// Ticks a status message stays visible (100ms tick rate)
const STATUS_TICKS: u16 = 50;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Both artist groups and their checkboxes
    pub review: ReviewState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Persistent error, e.g. the classification file failed to load
    pub error: Option<String>,

    /// Transient status message
    pub status_message: Option<String>,
    status_ticks: u16,

    /// Checkboxes changed since the last export or import
    pub unexported: bool,

    pub config: Config,

    /// Config changed and should be written on exit
    pub config_changed: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub files: FilesPanel,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub import_dialog: ImportDialog,
    pub error_dialog: ErrorDialog,
}

impl App {
    /// Load the classification file named in `config`
    pub fn new(config: Config) -> App {
        let (review, error) = if config.classification_path.is_empty() {
            (
                ReviewState::default(),
                Some("No classification file given; pass a YAML path on the command line".to_string()),
            )
        } else {
            match Classification::load(&config.classification_path) {
                Ok(classification) => {
                    tracing::info!(
                        path = %config.classification_path,
                        existing = classification.existing.len(),
                        new = classification.new.len(),
                        files = classification.file_count(),
                        "loaded classification"
                    );
                    (ReviewState::from_classification(&classification), None)
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to load classification");
                    (ReviewState::default(), Some(e.to_string()))
                }
            }
        };

        let mut app = Self::with_review(config, review);
        app.error = error;
        app
    }

    pub fn with_review(config: Config, review: ReviewState) -> App {
        App {
            review,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            status_ticks: 0,
            unexported: false,
            config,
            config_changed: false,
            home: HomeComponent::new(),
            files: FilesPanel::new(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            import_dialog: ImportDialog::default(),
            error_dialog: ErrorDialog::default(),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    fn export(&mut self, kind: ExportKind) {
        let payload = self.review.export(kind, Utc::now());
        let dir = self.config.resolved_export_dir();
        let count = match kind {
            ExportKind::Artists => payload.artists.len(),
            ExportKind::Files => payload.files.len(),
        };

        match services::write_export(&dir, &payload) {
            Ok(written) => {
                self.unexported = false;
                self.set_status(format!(
                    "Exported {} {} to {}",
                    count,
                    kind,
                    written.text.display()
                ));
            }
            Err(e) => {
                let detail = format!("{:#}", e);
                tracing::error!(error = %detail, "export failed");
                self.set_status(format!("Export failed: {}", detail));
            }
        }
    }

    fn import(&mut self, path: &str) {
        self.modals.pop();
        let path = PathBuf::from(path);

        match services::import_file(&mut self.review, &path) {
            Ok(outcome) => {
                let message = match outcome {
                    ImportOutcome::NoSelectionState => {
                        "File has no selection state; nothing changed".to_string()
                    }
                    ImportOutcome::Restored { rows } => {
                        self.unexported = false;
                        format!("Restored selection for {} artists", rows)
                    }
                    ImportOutcome::NameList { names, checked } => {
                        self.unexported = false;
                        format!("Imported {} names, {} artists selected", names, checked)
                    }
                };
                self.set_status(message);

                let path = path.to_string_lossy().to_string();
                if self.config.last_import_path != path {
                    self.config.last_import_path = path;
                    self.config_changed = true;
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "import failed");
                let message = e.to_string();
                self.error_dialog = ErrorDialog::new("Import failed", message.clone());
                self.modals.push(Modal::ImportFailed { message });
            }
        }
    }

    fn open_preview(&mut self) {
        let Some(row) = self.home.focused_row(&self.review) else {
            return;
        };
        let url = services::build_preview_url_with(&self.config.preview_base_url, &row.name);

        match services::open_preview(&url) {
            Ok(()) => self.set_status(format!("Opened {}", url)),
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to open browser");
                self.set_status(format!("Could not open browser: {}", e));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else if self.home.search_mode {
            self.handle_search_key_event(key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.status_ticks > 0 {
                    self.status_ticks -= 1;
                    if self.status_ticks == 0 {
                        self.status_message = None;
                    }
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.home.next(&self.review),
            Action::PrevItem => self.home.previous(&self.review),
            Action::FirstItem => self.home.select_first(&self.review),
            Action::LastItem => self.home.select_last(&self.review),
            Action::NextGroup | Action::PrevGroup => self.home.switch_group(&self.review),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to FilesPanel)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                self.files.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Selection
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleRow => {
                if let Some(position) = self.home.focused_position(&self.review) {
                    if self.review.toggle(self.home.active_group, position).is_some() {
                        self.unexported = true;
                    }
                }
            }
            Action::SelectAll => {
                self.review.select_all(self.home.active_group, true);
                self.unexported = true;
            }
            Action::DeselectAll => {
                self.review.select_all(self.home.active_group, false);
                self.unexported = true;
            }
            Action::InvertSelection => {
                self.review.invert(self.home.active_group);
                self.unexported = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Import / Export
            // ─────────────────────────────────────────────────────────────────
            Action::Export(kind) => self.export(kind),
            Action::OpenImportDialog => {
                let last = Some(self.config.last_import_path.as_str()).filter(|p| !p.is_empty());
                self.import_dialog.open(last);
                self.modals.push(Modal::ImportPath);
            }
            Action::ImportFile(path) => self.import(&path),

            Action::OpenPreview => self.open_preview(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.quit_dialog.unexported = self.unexported;
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.home.enter_search_mode(),
            Action::ExitSearchMode => self.home.exit_search_mode(),
            Action::ClearSearch => self.home.clear_search(&self.review),
            Action::SearchInput(c) => self.home.search_input(c, &self.review),
            Action::SearchBackspace => self.home.search_backspace(&self.review),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            review: &self.review,
            source_name: Path::new(&self.config.classification_path)
                .file_name()
                .and_then(|name| name.to_str()),
            preview_base_url: &self.config.preview_base_url,
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };

        draw_home_screen(frame, area, &mut self.home, &mut self.files, &ctx)?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::ImportPath => self.import_dialog.handle_key_event(key),
            Modal::ImportFailed { .. } => self.error_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::ImportPath => self.import_dialog.draw(frame, area)?,
            Modal::ImportFailed { .. } => self.error_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArtistRow, Group, SelectAllState};
    use crossterm::event::KeyModifiers;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "artist-review-app-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn app_in(dir: &Path) -> App {
        let config = Config {
            export_dir: dir.to_string_lossy().to_string(),
            ..Config::default()
        };
        let review = ReviewState::new(
            vec![
                ArtistRow::new("[A]", vec!["a1.zip".into()], true),
                ArtistRow::new("[B]", vec!["b1.zip".into(), "b2.zip".into()], true),
            ],
            vec![ArtistRow::new("[C]", vec!["c1.zip".into()], false)],
        );
        let mut app = App::with_review(config, review);
        app.home.select_first(&app.review);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let mut action = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_missing_classification_sets_error() {
        let app = App::new(Config {
            classification_path: "/definitely/not/here.yaml".into(),
            ..Config::default()
        });
        assert!(app.error.is_some());
        assert!(app.review.table(Group::Existing).is_empty());

        let app = App::new(Config::default());
        assert!(app.error.is_some());
    }

    #[test]
    fn test_toggle_and_bulk_actions() {
        let dir = scratch_dir("bulk");
        let mut app = app_in(&dir);

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.review.table(Group::Existing).rows()[0].checked);
        assert_eq!(
            app.review.table(Group::Existing).indicator(),
            SelectAllState::Indeterminate
        );
        assert!(app.unexported);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.review.table(Group::Existing).checked_count(), 2);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('i'));
        assert!(app.review.table(Group::New).rows()[0].checked);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_writes_both_files() {
        let dir = scratch_dir("export");
        let mut app = app_in(&dir);
        app.unexported = true;

        press(&mut app, KeyCode::Char('X'));

        let text = fs::read_to_string(dir.join("selected_files.txt")).unwrap();
        assert_eq!(text, "a1.zip\nb1.zip\nb2.zip");
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("selection_state.json")).unwrap())
                .unwrap();
        assert_eq!(json["type"], "files");
        assert!(!app.unexported);
        assert!(app.status_message.is_some());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_import_name_list_and_remember_path() {
        let dir = scratch_dir("import");
        let list = dir.join("keep.txt");
        fs::write(&list, "C\n").unwrap();
        let mut app = app_in(&dir);

        app.update(Action::OpenImportDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::ImportPath));

        app.update(Action::ImportFile(list.to_string_lossy().to_string()))
            .unwrap();
        assert!(app.modals.is_empty());
        assert_eq!(app.review.table(Group::Existing).checked_count(), 0);
        assert!(app.review.table(Group::New).rows()[0].checked);
        assert_eq!(app.config.last_import_path, list.to_string_lossy());
        assert!(app.config_changed);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_import_blocks_until_dismissed() {
        let dir = scratch_dir("badjson");
        let bad = dir.join("broken.json");
        fs::write(&bad, "{not json").unwrap();
        let mut app = app_in(&dir);

        app.update(Action::ImportFile(bad.to_string_lossy().to_string()))
            .unwrap();
        assert!(matches!(app.modals.top(), Some(Modal::ImportFailed { .. })));
        // Selection untouched
        assert_eq!(app.review.table(Group::Existing).checked_count(), 2);

        // Home keys are swallowed while the notice is up
        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.modals.top(), Some(Modal::ImportFailed { .. })));

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_status_message_expires() {
        let dir = scratch_dir("status");
        let mut app = app_in(&dir);
        app.set_status("hello");
        for _ in 0..STATUS_TICKS {
            app.update(Action::Tick).unwrap();
        }
        assert!(app.status_message.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_quit_flow() {
        let dir = scratch_dir("quit");
        let mut app = app_in(&dir);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.quit_dialog.unexported);
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);

        fs::remove_dir_all(&dir).unwrap();
    }
}
