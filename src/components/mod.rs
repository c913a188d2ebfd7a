//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod error_dialog;
pub mod files_panel;
pub mod help_dialog;
pub mod home;
pub mod import_dialog;
pub mod layout;
pub mod quit_dialog;

pub use error_dialog::ErrorDialog;
pub use files_panel::FilesPanel;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use import_dialog::ImportDialog;
pub use layout::{calculate_main_layout, centered_popup, truncate_to_width};
pub use quit_dialog::QuitDialog;
