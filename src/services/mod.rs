//! File system and browser interactions
//!
//! - Writing export artifacts
//! - Reading import files
//! - Building and opening preview links

pub mod export;
pub mod import;
pub mod preview;

pub use export::{write_export, ExportedFiles};
pub use import::{import_file, is_json_path};
pub use preview::{build_preview_url_with, open_preview, DEFAULT_PREVIEW_BASE_URL};
