//! Command-line arguments

use crate::config::Config;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: artist-review [CLASSIFICATION_YAML] [options]

Review classified artists, pick which to keep, and export the selection.

Options:
  -o, --export-dir DIR   Write exports to DIR (default: next to the YAML file)
      --preview-url URL  Search page used for artist previews
  -h, --help             Show this help

Without CLASSIFICATION_YAML the last opened file is used.";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub classification_path: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub preview_base_url: Option<String>,
    pub show_help: bool,
}

impl Args {
    /// Override config values given on the command line
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref path) = self.classification_path {
            config.classification_path = path.to_string_lossy().to_string();
        }
        if let Some(ref dir) = self.export_dir {
            config.export_dir = dir.to_string_lossy().to_string();
        }
        if let Some(ref url) = self.preview_base_url {
            config.preview_base_url = url.clone();
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.show_help = true,
            "-o" | "--export-dir" => {
                let dir = args.next().ok_or("Missing value for --export-dir")?;
                parsed.export_dir = Some(PathBuf::from(dir));
            }
            "--preview-url" => {
                let url = args.next().ok_or("Missing value for --preview-url")?;
                parsed.preview_base_url = Some(url);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            path => {
                if parsed.classification_path.is_some() {
                    return Err(format!("Unexpected argument: {}", path));
                }
                parsed.classification_path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(parsed)
}
