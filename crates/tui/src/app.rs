use std::{
    cmp, io,
    sync::mpsc,
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use tracing::{debug, info};
use yachtscore_core::{
    Category, PlayerId, Scoreboard, SnapshotExporter, Totals, NUM_CATEGORIES,
};

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_PLAYER_NAME_LEN: usize = 24;
const MAX_SCORE_INPUT_LEN: usize = 6;
/// Below this terminal width the full table no longer fits and the app
/// switches to the single-player card view.
const NARROW_WIDTH: u16 = 76;

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    selection_bg: Color,
    selection_fg: Color,
    success: Color,
    warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
        }
    }
}

enum AppEvent {
    Input(Event),
    Tick,
}

/// In-place editor for one score cell.
#[derive(Debug, Clone)]
struct CellEditor {
    player: PlayerId,
    category: Category,
    input: String,
}

impl CellEditor {
    fn new(player: PlayerId, category: Category, seed: Option<char>) -> Self {
        let mut input = String::new();
        if let Some(ch) = seed {
            input.push(ch);
        }
        Self {
            player,
            category,
            input,
        }
    }

    fn insert(&mut self, ch: char) {
        if self.input.len() >= MAX_SCORE_INPUT_LEN {
            return;
        }
        if ch.is_ascii() && !ch.is_ascii_control() {
            self.input.push(ch);
        }
    }

    fn backspace(&mut self) {
        self.input.pop();
    }
}

/// Modal prompt for renaming a player.
#[derive(Debug, Clone)]
struct RenameModal {
    player: PlayerId,
    input: String,
    cursor: usize,
    default: String,
}

impl RenameModal {
    fn new(player: PlayerId, current: String) -> Self {
        let cursor = current.len();
        Self {
            player,
            input: current.clone(),
            cursor,
            default: current,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.input.len() as isize;
        let mut next = self.cursor as isize + delta;
        if next < 0 {
            next = 0;
        } else if next > len {
            next = len;
        }
        self.cursor = next as usize;
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    fn insert(&mut self, ch: char) {
        if self.input.len() >= MAX_PLAYER_NAME_LEN {
            return;
        }
        if ch.is_ascii() && !ch.is_ascii_control() {
            self.input.insert(self.cursor, ch);
            self.cursor += ch.len_utf8();
        }
    }

    fn backspace(&mut self) {
        if self.cursor > 0 && self.cursor <= self.input.len() {
            self.cursor -= 1;
            self.input.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    fn value(&self) -> String {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            self.default.clone()
        } else {
            trimmed.to_string()
        }
    }
}

struct UiState {
    /// Selected category row, `0..NUM_CATEGORIES`.
    row: usize,
    /// Selected player column (also the visible player in the card view).
    col: usize,
    status: String,
    should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            status: "Ready".to_string(),
            should_quit: false,
        }
    }
}

impl UiState {
    fn set_status(&mut self, message: String) {
        self.status = message;
    }

    fn clamp_col(&mut self, players: usize) {
        if players == 0 {
            self.col = 0;
        } else if self.col >= players {
            self.col = players - 1;
        }
    }
}

/// High-level application state for the scoreboard TUI.
pub struct YachtscoreApp {
    board: Scoreboard,
    exporter: SnapshotExporter,
    state: UiState,
    theme: Theme,
    editor: Option<CellEditor>,
    rename: Option<RenameModal>,
    winner_notice: Option<Vec<String>>,
}

impl YachtscoreApp {
    pub fn new(board: Scoreboard, exporter: SnapshotExporter) -> Self {
        Self {
            board,
            exporter,
            state: UiState::default(),
            theme: Theme::default(),
            editor: None,
            rename: None,
            winner_notice: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.state.set_status(format!(
            "Exports go to {}",
            self.exporter.root().display()
        ));

        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
        spawn_input_thread(event_tx);

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.state.should_quit {
                break;
            }

            match event_rx.recv() {
                Ok(AppEvent::Input(event)) => self.handle_event(event)?,
                Ok(AppEvent::Tick) => {}
                Err(_) => break,
            }

            if self.state.should_quit {
                break;
            }
        }

        restore_terminal(&mut terminal)?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(_, _) => Ok(()),
            Event::Mouse(_) => Ok(()),
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => Ok(()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.rename.is_some() {
            self.handle_rename_key(key);
            return Ok(());
        }
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return Ok(());
        }
        if self.winner_notice.is_some() {
            self.handle_winner_key(key);
            return Ok(());
        }
        self.handle_board_key(key)
    }

    fn handle_board_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => self.state.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.row = (self.state.row + 1) % NUM_CATEGORIES;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.row = (self.state.row + NUM_CATEGORIES - 1) % NUM_CATEGORIES;
            }
            KeyCode::Char('h') | KeyCode::Left => {
                if self.state.col > 0 {
                    self.state.col -= 1;
                }
            }
            KeyCode::Char('l') | KeyCode::Right => {
                if self.state.col + 1 < self.board.players().len() {
                    self.state.col += 1;
                }
            }
            KeyCode::Home => self.state.row = 0,
            KeyCode::End => self.state.row = NUM_CATEGORIES - 1,
            KeyCode::Enter => self.open_editor(None),
            KeyCode::Char(ch @ '0'..='9') if key.modifiers.is_empty() => {
                self.open_editor(Some(ch));
            }
            KeyCode::Backspace | KeyCode::Delete => self.clear_selected_cell(),
            KeyCode::Char('a') if key.modifiers.is_empty() => self.add_player(),
            KeyCode::Char('d') if key.modifiers.is_empty() => self.remove_selected_player(),
            KeyCode::Char('n') if key.modifiers.is_empty() => self.open_rename(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.board.reset_all();
                self.state.set_status("All score cards cleared".to_string());
            }
            KeyCode::Char('e') if key.modifiers.is_empty() => self.export_snapshot(),
            _ => {}
        }
        Ok(())
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let mut commit = false;
        let mut cancel = false;
        if let Some(editor) = self.editor.as_mut() {
            match key.code {
                KeyCode::Esc => cancel = true,
                KeyCode::Enter => commit = true,
                KeyCode::Backspace => editor.backspace(),
                KeyCode::Char(ch) => {
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                        editor.insert(ch);
                    }
                }
                _ => {}
            }
        }

        if cancel {
            self.editor = None;
            self.state.set_status("Edit cancelled".to_string());
            return;
        }

        if commit {
            let editor = self.editor.take().expect("editor present on commit");
            self.board.set_score(editor.player, editor.category, &editor.input);
            let stored = self
                .board
                .player(editor.player)
                .and_then(|player| player.record().get(editor.category));
            let label = editor.category.label();
            match stored {
                Some(value) => self.state.set_status(format!("{label} = {value}")),
                None => self.state.set_status(format!("{label} cleared")),
            }
            debug!(category = label, input = %editor.input, ?stored, "cell committed");
            self.maybe_raise_winner();
        }
    }

    fn handle_rename_key(&mut self, key: KeyEvent) {
        let mut finalize: Option<(PlayerId, String)> = None;
        let mut cancel = false;
        if let Some(modal) = self.rename.as_mut() {
            match key.code {
                KeyCode::Esc => cancel = true,
                KeyCode::Enter => finalize = Some((modal.player, modal.value())),
                KeyCode::Left => modal.move_cursor(-1),
                KeyCode::Right => modal.move_cursor(1),
                KeyCode::Home => modal.move_home(),
                KeyCode::End => modal.move_end(),
                KeyCode::Backspace => modal.backspace(),
                KeyCode::Delete => modal.delete(),
                KeyCode::Char(ch) => {
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                        modal.insert(ch);
                    }
                }
                _ => {}
            }
        }

        if cancel {
            self.rename = None;
            self.state.set_status("Rename cancelled".to_string());
            return;
        }

        if let Some((player, name)) = finalize {
            self.rename = None;
            self.board.rename_player(player, &name);
            self.state.set_status(format!("Renamed to {name}"));
        }
    }

    fn handle_winner_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                // Dismissal is purely visual; the announcement itself stays
                // standing and will not re-raise for the same board.
                self.winner_notice = None;
                self.board.acknowledge();
            }
            _ => {}
        }
    }

    fn selected_player(&self) -> Option<PlayerId> {
        self.board
            .players()
            .get(self.state.col)
            .map(|player| player.id())
    }

    fn selected_category(&self) -> Category {
        Category::from_index(self.state.row).unwrap_or(Category::Ones)
    }

    fn open_editor(&mut self, seed: Option<char>) {
        let Some(player) = self.selected_player() else {
            return;
        };
        let category = self.selected_category();
        self.editor = Some(CellEditor::new(player, category, seed));
        self.state
            .set_status(format!("Editing {}", category.label()));
    }

    fn clear_selected_cell(&mut self) {
        let Some(player) = self.selected_player() else {
            return;
        };
        let category = self.selected_category();
        self.board.set_score(player, category, "");
        self.state
            .set_status(format!("{} cleared", category.label()));
        self.maybe_raise_winner();
    }

    fn add_player(&mut self) {
        match self.board.add_player() {
            Some(_) => {
                self.state.col = self.board.players().len() - 1;
                self.state
                    .set_status(format!("Added player {}", self.board.players().len()));
            }
            None => self
                .state
                .set_status("Table is full (4 players max)".to_string()),
        }
    }

    fn remove_selected_player(&mut self) {
        let Some(player) = self.selected_player() else {
            return;
        };
        if self.board.remove_player(player) {
            self.state.clamp_col(self.board.players().len());
            self.state.set_status("Player removed".to_string());
            self.maybe_raise_winner();
        } else {
            self.state
                .set_status("At least one player must stay seated".to_string());
        }
    }

    fn open_rename(&mut self) {
        let Some(player) = self.selected_player() else {
            return;
        };
        let current = self
            .board
            .player(player)
            .map(|p| p.name().to_string())
            .unwrap_or_default();
        self.rename = Some(RenameModal::new(player, current));
    }

    fn export_snapshot(&mut self) {
        let snapshot = self.board.snapshot();
        match self.exporter.export(&snapshot) {
            Ok(path) => {
                info!(path = %path.display(), "exported");
                self.state
                    .set_status(format!("Exported to {}", path.display()));
            }
            Err(err) => self.state.set_status(format!("Export failed: {err}")),
        }
    }

    fn maybe_raise_winner(&mut self) {
        if !self.board.newly_raised() {
            return;
        }
        let Some(announcement) = self.board.announcement() else {
            return;
        };
        let names: Vec<String> = announcement
            .winners
            .iter()
            .filter_map(|id| self.board.player(*id))
            .map(|player| player.name().to_string())
            .collect();
        let headline = if names.len() == 1 {
            format!("{} wins!", names[0])
        } else {
            format!("Tie: {}", names.join(" & "))
        };
        self.winner_notice = Some(vec![
            headline,
            format!("{} points", announcement.max_total),
        ]);
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)])
            .split(area);

        if area.width < NARROW_WIDTH {
            self.render_card(frame, chunks[0]);
        } else {
            self.render_table(frame, chunks[0]);
        }
        self.render_status(frame, chunks[1]);

        if let Some(modal) = self.rename.clone() {
            self.render_rename_modal(frame, &modal);
        }
        if let Some(editor) = self.editor.clone() {
            self.render_editor_popup(frame, &editor);
        }
        if let Some(lines) = self.winner_notice.clone() {
            self.render_winner_popup(frame, &lines);
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp_col(self.board.players().len());
        let players = self.board.players();

        let mut header_cells = vec![Cell::from("Category")];
        for (idx, player) in players.iter().enumerate() {
            let style = if idx == self.state.col {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.primary_fg)
            };
            header_cells.push(Cell::from(player.name().to_string()).style(style));
        }
        let header = Row::new(header_cells).height(1);

        let mut rows: Vec<Row> = Vec::new();
        for category in Category::ALL {
            rows.push(self.score_row(category));
            if category == Category::Sixes {
                rows.push(self.totals_row("Upper subtotal", |t| t.upper_subtotal));
                rows.push(self.totals_row("Bonus (63+)", |t| t.bonus));
            }
        }
        rows.push(self.totals_row("Lower total", |t| t.lower_total));
        rows.push(
            self.totals_row("Grand total", |t| t.grand_total)
                .style(Style::default().add_modifier(Modifier::BOLD)),
        );

        let mut widths = vec![Constraint::Length(16)];
        widths.extend(std::iter::repeat(Constraint::Length(14)).take(players.len()));

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Yacht scoreboard"),
        );
        frame.render_widget(table, area);
    }

    fn score_row(&self, category: Category) -> Row<'static> {
        let players = self.board.players();
        let selected_row = category.index() == self.state.row;
        let label_style = Style::default().fg(self.theme.primary_fg);
        let mut cells = vec![Cell::from(category.label()).style(label_style)];
        for (idx, player) in players.iter().enumerate() {
            let text = match self.editing_value(player.id(), category) {
                Some(input) => format!("{input}_"),
                None => match player.record().get(category) {
                    Some(value) => value.to_string(),
                    None => "·".to_string(),
                },
            };
            let mut style = Style::default().fg(self.theme.primary_fg);
            if selected_row && idx == self.state.col {
                style = Style::default()
                    .bg(self.theme.selection_bg)
                    .fg(self.theme.selection_fg)
                    .add_modifier(Modifier::BOLD);
            } else if player.record().get(category).is_none() {
                style = Style::default().fg(self.theme.muted);
            }
            cells.push(Cell::from(text).style(style));
        }
        Row::new(cells).height(1)
    }

    fn totals_row(&self, label: &'static str, pick: fn(&Totals) -> u32) -> Row<'static> {
        let muted = Style::default().fg(self.theme.muted);
        let mut cells = vec![Cell::from(label).style(muted)];
        for player in self.board.players() {
            cells.push(Cell::from(pick(&player.totals()).to_string()).style(muted));
        }
        Row::new(cells).height(1)
    }

    fn editing_value(&self, player: PlayerId, category: Category) -> Option<&str> {
        self.editor.as_ref().and_then(|editor| {
            if editor.player == player && editor.category == category {
                Some(editor.input.as_str())
            } else {
                None
            }
        })
    }

    fn render_card(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp_col(self.board.players().len());
        let Some(player) = self.board.players().get(self.state.col) else {
            return;
        };
        let totals = player.totals();

        let mut lines: Vec<Line> = Vec::new();
        for category in Category::ALL {
            let value = match self.editing_value(player.id(), category) {
                Some(input) => format!("{input}_"),
                None => match player.record().get(category) {
                    Some(value) => value.to_string(),
                    None => "·".to_string(),
                },
            };
            let selected = category.index() == self.state.row;
            let style = if selected {
                Style::default()
                    .bg(self.theme.selection_bg)
                    .fg(self.theme.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.primary_fg)
            };
            lines.push(Line::from(Span::styled(
                format!("{:<16} {:>6}", category.label(), value),
                style,
            )));
            if category == Category::Sixes {
                lines.push(muted_line(
                    &self.theme,
                    format!("{:<16} {:>6}", "Upper subtotal", totals.upper_subtotal),
                ));
                lines.push(muted_line(
                    &self.theme,
                    format!("{:<16} {:>6}", "Bonus (63+)", totals.bonus),
                ));
            }
        }
        lines.push(muted_line(
            &self.theme,
            format!("{:<16} {:>6}", "Lower total", totals.lower_total),
        ));
        lines.push(Line::from(Span::styled(
            format!("{:<16} {:>6}", "Grand total", totals.grand_total),
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )));

        let position = format!(
            "{} ({}/{})  ←/→ switch",
            player.name(),
            self.state.col + 1,
            self.board.players().len()
        );
        let card = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(position));
        frame.render_widget(card, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hints = "↑↓←→ move  0-9/Enter edit  Bksp clear  a add  d drop  n rename  e export  ^r reset  q quit";
        let winner_line = self.board.announcement().map(|announcement| {
            let names: Vec<String> = announcement
                .winners
                .iter()
                .filter_map(|id| self.board.player(*id))
                .map(|player| player.name().to_string())
                .collect();
            format!("Winner: {} ({} pts)", names.join(", "), announcement.max_total)
        });

        let mut spans = vec![Span::styled(
            self.state.status.clone(),
            Style::default().fg(self.theme.primary_fg),
        )];
        if let Some(line) = winner_line {
            spans.push(Span::raw("  •  "));
            spans.push(Span::styled(
                line,
                Style::default()
                    .fg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let paragraph = Paragraph::new(vec![Line::from(spans)])
            .block(Block::default().borders(Borders::ALL).title(hints));
        frame.render_widget(paragraph, area);
    }

    fn render_editor_popup(&self, frame: &mut Frame, editor: &CellEditor) {
        let area = centered_rect(34, 5, frame.size());
        frame.render_widget(Clear, area);

        let title = editor.category.label().to_string();
        let input_line = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.accent)),
            Span::raw(editor.input.clone()),
        ]);
        let helper = Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" store  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" cancel  (blank or junk clears)"),
        ]);

        let paragraph = Paragraph::new(vec![input_line, Line::from(""), helper])
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);

        let cursor_x =
            (area.x + 3 + editor.input.len() as u16).min(area.x + area.width.saturating_sub(2));
        frame.set_cursor(cursor_x, area.y + 1);
    }

    fn render_rename_modal(&self, frame: &mut Frame, modal: &RenameModal) {
        let frame_area = frame.size();
        let mut width = cmp::min(48_u16, frame_area.width.saturating_sub(4));
        width = cmp::max(width, 24_u16);
        let area = centered_rect(width, 7, frame_area);
        frame.render_widget(Clear, area);

        let input_line = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.accent)),
            Span::raw(modal.input.clone()),
        ]);
        let helper = Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" apply  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" cancel"),
        ]);
        let default_hint = Line::from(format!("Default: {}", modal.default));

        let paragraph = Paragraph::new(vec![
            Line::from("New player name"),
            input_line,
            Line::from(""),
            helper,
            default_hint,
        ])
        .block(Block::default().borders(Borders::ALL).title("Rename"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);

        let cursor_x =
            (area.x + 3 + modal.cursor as u16).min(area.x + area.width.saturating_sub(2));
        frame.set_cursor(cursor_x, area.y + 2);
    }

    fn render_winner_popup(&self, frame: &mut Frame, lines: &[String]) {
        let width = lines
            .iter()
            .map(|line| line.chars().count() as u16)
            .max()
            .unwrap_or(0)
            .saturating_add(6)
            .max(24);
        let area = centered_rect(width, lines.len() as u16 + 4, frame.size());
        frame.render_widget(Clear, area);

        let mut content: Vec<Line> = lines
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    line.clone(),
                    Style::default()
                        .fg(self.theme.success)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "Esc to dismiss",
            Style::default().fg(self.theme.warning),
        )));

        let paragraph = Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Game over"));
        frame.render_widget(paragraph, area);
    }
}

fn muted_line(theme: &Theme, text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(theme.muted)))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
