//! Home component - Main review screen
//!
//! Displays the group tabs, the select-all indicator, the artist checkbox
//! list and the files panel. Owns navigation and search state; the checked
//! flags themselves live in `ReviewState`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, truncate_to_width, FilesPanel};
use crate::model::{ArtistRow, Group, ReviewState, SelectAllState, SelectionTable};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

pub struct HomeComponent {
    pub active_group: Group,

    /// Highlighted entry among the visible rows
    pub list_state: ListState,

    pub search_query: String,

    pub search_mode: bool,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            active_group: Group::Existing,
            list_state: ListState::default(),
            search_query: String::new(),
            search_mode: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Row Filtering
    // ─────────────────────────────────────────────────────────────────────────

    /// Positions of rows matching the search query, in row order
    pub fn visible_positions(&self, table: &SelectionTable) -> Vec<usize> {
        let query = self.search_query.to_lowercase();
        table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| query.is_empty() || row.name.to_lowercase().contains(&query))
            .map(|(position, _)| position)
            .collect()
    }

    /// Table position of the highlighted row
    pub fn focused_position(&self, review: &ReviewState) -> Option<usize> {
        let visible = self.visible_positions(review.table(self.active_group));
        visible.get(self.list_state.selected()?).copied()
    }

    pub fn focused_row<'a>(&self, review: &'a ReviewState) -> Option<&'a ArtistRow> {
        let position = self.focused_position(review)?;
        review.table(self.active_group).get(position)
    }

    fn visible_len(&self, review: &ReviewState) -> usize {
        self.visible_positions(review.table(self.active_group)).len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self, review: &ReviewState) {
        let len = self.visible_len(review);
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous(&mut self, review: &ReviewState) {
        let len = self.visible_len(review);
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, review: &ReviewState) {
        if self.visible_len(review) > 0 {
            self.list_state.select(Some(0));
        } else {
            self.list_state.select(None);
        }
    }

    pub fn select_last(&mut self, review: &ReviewState) {
        let len = self.visible_len(review);
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    pub fn switch_group(&mut self, review: &ReviewState) {
        self.active_group = self.active_group.other();
        self.select_first(review);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn clear_search(&mut self, review: &ReviewState) {
        self.search_query.clear();
        self.select_first(review);
    }

    pub fn search_input(&mut self, c: char, review: &ReviewState) {
        self.search_query.push(c);
        self.select_first(review);
    }

    pub fn search_backspace(&mut self, review: &ReviewState) {
        self.search_query.pop();
        self.select_first(review);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Tab => Some(Action::NextGroup),
            KeyCode::BackTab => Some(Action::PrevGroup),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Files panel
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollDown)
            }
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollUp)
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),

            // Selection
            KeyCode::Char(' ') => Some(Action::ToggleRow),
            KeyCode::Char('a') => Some(Action::SelectAll),
            KeyCode::Char('A') => Some(Action::DeselectAll),
            KeyCode::Char('i') => Some(Action::InvertSelection),

            // Import / export
            KeyCode::Char('x') => Some(Action::Export(crate::model::ExportKind::Artists)),
            KeyCode::Char('X') => Some(Action::Export(crate::model::ExportKind::Files)),
            KeyCode::Char('I') => Some(Action::OpenImportDialog),

            KeyCode::Char('o') | KeyCode::Enter => Some(Action::OpenPreview),

            // Search
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Esc if !self.search_query.is_empty() => Some(Action::ClearSearch),

            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the review state; see draw_home_screen
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub review: &'a ReviewState,
    pub source_name: Option<&'a str>,
    pub preview_base_url: &'a str,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    files: &mut FilesPanel,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area, true);

    render_tabs(frame, layout.tabs, home, ctx.review);
    render_indicator(frame, layout.indicator, home, ctx.review);
    render_artist_list(frame, layout.list, home, ctx.review);

    files.set_artist(home.focused_row(ctx.review), ctx.preview_base_url);
    files.draw(frame, layout.files)?;

    if let Some(status_area) = layout.status {
        render_status_bar(frame, status_area, home, ctx);
    }
    render_help_bar(frame, layout.help, home);

    Ok(())
}

fn render_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent, review: &ReviewState) {
    let groups = Group::all();
    let titles: Vec<String> = groups
        .iter()
        .map(|g| format!("{} ({})", g.name(), review.table(*g).len()))
        .collect();
    let selected = groups
        .iter()
        .position(|g| *g == home.active_group)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_indicator(frame: &mut Frame, area: Rect, home: &HomeComponent, review: &ReviewState) {
    let table = review.table(home.active_group);
    let indicator = table.indicator();
    let color = match indicator {
        SelectAllState::Checked => Color::Green,
        SelectAllState::Indeterminate => Color::Yellow,
        SelectAllState::Unchecked => Color::DarkGray,
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", indicator.marker()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("Select all {} artists", home.active_group.key()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  {}/{} checked", table.checked_count(), table.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_artist_list(frame: &mut Frame, area: Rect, home: &mut HomeComponent, review: &ReviewState) {
    let table = review.table(home.active_group);
    let visible = home.visible_positions(table);
    // Marker, space, highlight symbol and borders
    let name_width = (area.width as usize).saturating_sub(12);

    let items: Vec<ListItem> = visible
        .iter()
        .filter_map(|&position| table.get(position))
        .map(|row| {
            let (marker_style, name_style) = if row.checked {
                (
                    Style::default().fg(Color::Green),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (Style::default().fg(Color::DarkGray), Style::default().fg(Color::White))
            };

            let mut spans = vec![
                Span::styled(format!("{} ", row.marker()), marker_style),
                Span::styled(truncate_to_width(&row.name, name_width), name_style),
                Span::styled(
                    format!(" ({})", row.files.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            // Rows sharing a name toggle together on import
            let shared = table.positions(&row.name).len();
            if shared > 1 {
                spans.push(Span::styled(
                    format!(" x{}", shared),
                    Style::default().fg(Color::Magenta),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut title = format!(" {} ({}) ", home.active_group.name(), visible.len());
    if !home.search_query.is_empty() {
        title = format!("{} [search:{}] ", title.trim_end(), home.search_query);
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut home.list_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, home: &HomeComponent, ctx: &HomeRenderContext) {
    let mut spans = vec![];

    if let Some(source) = ctx.source_name {
        spans.push(Span::styled(
            format!(" {} ", source),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    let snapshot = ctx.review.snapshot();
    spans.push(Span::styled(
        format!(
            " {} artists selected ",
            ctx.review.table(Group::Existing).checked_count()
                + ctx.review.table(Group::New).checked_count()
        ),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!(
            " last capture: {} existing / {} new ",
            snapshot.existing.len(),
            snapshot.new.len()
        ),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(row) = home.focused_row(ctx.review) {
        spans.push(Span::styled(
            row.folder.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(error) = ctx.error {
        spans.clear();
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hint(key: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let help_spans = if home.search_mode {
        vec![
            key_hint("Esc", Color::Yellow),
            Span::raw("Cancel  "),
            key_hint("Enter", Color::Green),
            Span::raw("Confirm  "),
            Span::styled(
                format!("Search: {}", home.search_query),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            key_hint("q", Color::Yellow),
            Span::raw("Quit "),
            key_hint("Space", Color::Green),
            Span::raw("Toggle "),
            key_hint("a/A", Color::Green),
            Span::raw("All/None "),
            key_hint("i", Color::Green),
            Span::raw("Invert "),
            key_hint("x/X", Color::Cyan),
            Span::raw("Export artists/files "),
            key_hint("I", Color::Cyan),
            Span::raw("Import "),
            key_hint("o", Color::Magenta),
            Span::raw("Preview "),
            key_hint("/", Color::Cyan),
            Span::raw("Search "),
            key_hint("?", Color::White),
            Span::raw("Help"),
        ]
    };

    let paragraph = Paragraph::new(Line::from(help_spans))
        .block(Block::default().borders(Borders::TOP))
        .alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}
