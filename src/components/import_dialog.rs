//! Import dialog - prompts for the file to restore a selection from
//!
//! `.json` files are read as an exported selection document, anything
//! else as a list of artist names, one per line.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::services::is_json_path;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct ImportDialog {
    /// Current input text
    pub input: String,
    /// Validation error shown under the input
    pub error: Option<String>,
}

impl ImportDialog {
    /// Reset the dialog, pre-filling the last imported path
    pub fn open(&mut self, last_path: Option<&str>) {
        self.input = last_path.unwrap_or_default().to_string();
        self.error = None;
    }

    /// Input with a leading `~` expanded to the home directory
    pub fn resolved_path(&self) -> PathBuf {
        expand_home(self.input.trim())
    }

    fn submit(&mut self) -> Option<Action> {
        if self.input.trim().is_empty() {
            self.error = Some("A file path is required".to_string());
            return None;
        }
        let path = self.resolved_path();
        if !path.is_file() {
            self.error = Some(format!("No such file: {}", path.display()));
            return None;
        }
        Some(Action::ImportFile(path.to_string_lossy().into_owned()))
    }
}

fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

impl Component for ImportDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.error = None;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 70, 11);
        frame.render_widget(Clear, popup_area);

        let mut lines = vec![
            Line::from(""),
            Line::from("Path of the file to import:"),
            Line::from(Span::styled(
                "(.json restores an export, anything else is a name list)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{}_", &self.input),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            )));
        } else if !self.input.trim().is_empty() {
            let path = self.resolved_path();
            let kind = if is_json_path(&path) {
                "selection document"
            } else {
                "name list"
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Will import as {}", kind),
                Style::default().fg(Color::Green),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Import Selection ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
