// ABOUTME: Terminal implementation of the selection prompt with type-to-filter
// ABOUTME: Filters case-insensitively as the user types and always restores the terminal

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use linear_api::{LinearError, Selector};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::constants::ui::{FALLBACK_TERMINAL_WIDTH, SELECTOR_WINDOW};

/// What a key press did to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Continue,
    Confirm(usize),
    Cancel,
}

/// Filter, cursor and scroll state of one selection, independent of the terminal
#[derive(Debug)]
pub struct PickerState<'a> {
    items: &'a [String],
    query: String,
    matches: Vec<usize>,
    cursor: usize,
    offset: usize,
}

impl<'a> PickerState<'a> {
    pub fn new(items: &'a [String], default_index: Option<usize>) -> Self {
        let mut state = Self {
            items,
            query: String::new(),
            matches: (0..items.len()).collect(),
            cursor: 0,
            offset: 0,
        };
        if let Some(index) = default_index.filter(|i| *i < items.len()) {
            state.cursor = index;
            state.scroll();
        }
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Original index of the highlighted item
    pub fn selected(&self) -> Option<usize> {
        self.matches.get(self.cursor).copied()
    }

    /// Original indices of the rows currently in the window
    pub fn visible(&self) -> &[usize] {
        let end = (self.offset + SELECTOR_WINDOW).min(self.matches.len());
        &self.matches[self.offset..end]
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.scroll();
        }
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < self.matches.len() {
            self.cursor += 1;
            self.scroll();
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> PickerAction {
        match key.code {
            KeyCode::Esc => PickerAction::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PickerAction::Cancel
            }
            KeyCode::Enter => match self.selected() {
                Some(index) => PickerAction::Confirm(index),
                None => PickerAction::Continue,
            },
            KeyCode::Up => {
                self.up();
                PickerAction::Continue
            }
            KeyCode::Down => {
                self.down();
                PickerAction::Continue
            }
            KeyCode::Backspace => {
                self.pop();
                PickerAction::Continue
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.push(c);
                PickerAction::Continue
            }
            _ => PickerAction::Continue,
        }
    }

    fn refilter(&mut self) {
        let previous = self.selected();
        let needle = self.query.to_lowercase();
        self.matches = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();

        // Keep the highlighted item if it survived the filter
        self.cursor = previous
            .and_then(|p| self.matches.iter().position(|m| *m == p))
            .unwrap_or(0);
        self.offset = 0;
        self.scroll();
    }

    fn scroll(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + SELECTOR_WINDOW {
            self.offset = self.cursor + 1 - SELECTOR_WINDOW;
        }
    }
}

/// Puts the terminal in raw mode and restores it on drop
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        armed(Self, || execute!(io::stderr(), Hide))
    }
}

/// Run the remaining setup with `guard` already alive, so a failure drops it
fn armed<G>(guard: G, setup: impl FnOnce() -> io::Result<()>) -> io::Result<G> {
    setup()?;
    Ok(guard)
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Selection prompt drawn on stderr
pub struct TerminalSelector {
    use_color: bool,
}

impl TerminalSelector {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn run(
        &self,
        label: &str,
        items: &[String],
        default_index: Option<usize>,
    ) -> io::Result<PickerAction> {
        let mut state = PickerState::new(items, default_index);
        let mut out = io::stderr();
        let _guard = RawModeGuard::enable()?;
        let mut drawn = 0u16;

        loop {
            let width = terminal::size()
                .map(|(columns, _)| usize::from(columns))
                .unwrap_or(FALLBACK_TERMINAL_WIDTH);
            drawn = self.render(&mut out, label, &state, drawn, width)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match state.handle(key) {
                PickerAction::Continue => {}
                action => {
                    self.clear(&mut out, drawn)?;
                    if let PickerAction::Confirm(index) = action {
                        let line = format!("{label}: {}\r\n", items[index]);
                        execute!(out, Print(line))?;
                    }
                    return Ok(action);
                }
            }
        }
    }

    fn render(
        &self,
        out: &mut impl Write,
        label: &str,
        state: &PickerState<'_>,
        drawn: u16,
        width: usize,
    ) -> io::Result<u16> {
        self.clear(out, drawn)?;

        // Every row stays on one physical line so `drawn` matches the screen
        let header = fit(&format!("{label}: {}", state.query()), width);
        let header = if self.use_color {
            header.bold().to_string()
        } else {
            header
        };
        queue!(out, Print(header), Print("\r\n"))?;
        let mut lines = 1u16;

        if state.match_count() == 0 {
            queue!(out, Print("  (no matches)\r\n"))?;
            lines += 1;
        }

        let selected = state.selected();
        for &index in state.visible() {
            let item = fit(&state.items[index], width.saturating_sub(2));
            let row = if Some(index) == selected {
                if self.use_color {
                    format!("{} {}", ">".cyan(), item.cyan())
                } else {
                    format!("> {item}")
                }
            } else {
                format!("  {item}")
            };
            queue!(out, Print(row), Print("\r\n"))?;
            lines += 1;
        }

        out.flush()?;
        Ok(lines)
    }

    fn clear(&self, out: &mut impl Write, drawn: u16) -> io::Result<()> {
        if drawn > 0 {
            queue!(out, MoveUp(drawn))?;
        }
        queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
        out.flush()
    }
}

/// Cut `text` to fewer than `width` columns, marking the cut with an ellipsis
fn fit(text: &str, width: usize) -> String {
    let limit = width.saturating_sub(1).max(1);
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit - 1).collect();
    cut.push('…');
    cut
}

impl Selector for TerminalSelector {
    fn select(
        &self,
        label: &str,
        items: &[String],
        default_index: Option<usize>,
    ) -> linear_api::Result<(usize, String)> {
        let action = self
            .run(label, items, default_index)
            .map_err(|e| LinearError::invalid_input(format!("Failed to read selection: {e}")))?;

        match action {
            PickerAction::Confirm(index) => Ok((index, items[index].clone())),
            _ => Err(LinearError::Cancelled),
        }
    }
}
