//! Files panel - details of the focused artist
//!
//! Shows the folder, check state, preview URL and every file classified
//! under the artist.

use crate::action::Action;
use crate::component::Component;
use crate::model::ArtistRow;
use crate::services::build_preview_url_with;
use anyhow::Result;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const PAGE: usize = 20;

pub struct FilesPanel {
    scroll: usize,
    /// Folder of the artist currently shown, to keep the scroll position
    /// while the focus stays put
    current: Option<String>,
    content: Vec<Line<'static>>,
}

impl Default for FilesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FilesPanel {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            current: None,
            content: vec![Line::from("No artist selected")],
        }
    }

    /// Show `row`, rebuilding the content on every call but resetting the
    /// scroll only when a different artist comes into focus.
    pub fn set_artist(&mut self, row: Option<&ArtistRow>, preview_base_url: &str) {
        let folder = row.map(|r| r.folder.clone());
        if folder != self.current {
            self.scroll = 0;
            self.current = folder;
        }

        self.content = match row {
            Some(row) => render_artist(row, preview_base_url),
            None => vec![Line::from(Span::styled(
                "No artist selected",
                Style::default().fg(Color::DarkGray),
            ))],
        };
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }
}

fn render_artist(row: &ArtistRow, preview_base_url: &str) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let (state, state_color) = if row.checked {
        ("selected", Color::Green)
    } else {
        ("not selected", Color::DarkGray)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            row.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Folder:  ", label),
            Span::raw(row.folder.clone()),
        ]),
        Line::from(vec![
            Span::styled("State:   ", label),
            Span::styled(state, Style::default().fg(state_color)),
        ]),
        Line::from(vec![
            Span::styled("Preview: ", label),
            Span::styled(
                build_preview_url_with(preview_base_url, &row.name),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Files ({})", row.files.len()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if row.files.is_empty() {
        lines.push(Line::from(Span::styled("  (none)", label)));
    }
    lines.extend(
        row.files
            .iter()
            .map(|file| Line::from(format!("  {}", file))),
    );
    lines
}

impl Component for FilesPanel {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let max_scroll = self.content.len().saturating_sub(1);

        match action {
            Action::ScrollDown => {
                if self.scroll < max_scroll {
                    self.scroll += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::PageDown => {
                self.scroll = (self.scroll + PAGE).min(max_scroll);
            }
            Action::PageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let visible_height = area.height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Artist ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll as u16, 0));

        frame.render_widget(paragraph, area);

        let total = self.content.len();
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(folder: &str, files: usize) -> ArtistRow {
        let files = (0..files).map(|i| format!("{:03}.zip", i)).collect();
        ArtistRow::new(folder, files, true)
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut panel = FilesPanel::new();
        panel.set_artist(Some(&row("[Alpha]", 3)), "https://example.com/search/");

        panel.update(Action::PageDown).unwrap();
        assert_eq!(panel.scroll(), panel.content.len() - 1);

        panel.update(Action::PageUp).unwrap();
        panel.update(Action::ScrollUp).unwrap();
        assert_eq!(panel.scroll(), 0);
    }

    #[test]
    fn test_scroll_resets_only_on_new_artist() {
        let mut panel = FilesPanel::new();
        let alpha = row("[Alpha]", 40);
        panel.set_artist(Some(&alpha), "https://example.com/search/");
        panel.update(Action::ScrollDown).unwrap();
        panel.update(Action::ScrollDown).unwrap();

        // Redraw with the same focus keeps the position
        panel.set_artist(Some(&alpha), "https://example.com/search/");
        assert_eq!(panel.scroll(), 2);

        panel.set_artist(Some(&row("[Beta]", 1)), "https://example.com/search/");
        assert_eq!(panel.scroll(), 0);
    }

    #[test]
    fn test_content_lists_files_and_preview() {
        let text: Vec<String> = render_artist(&row("[A B]", 2), "https://example.com/search/")
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.contains("https://example.com/search/?q=A%20B")));
        assert!(text.iter().any(|l| l == "Files (2)"));
        assert!(text.iter().any(|l| l.trim() == "001.zip"));
    }
}
