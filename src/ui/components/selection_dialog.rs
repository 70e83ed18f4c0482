//! Terminal surface for the shared selection dialog.
//!
//! All state lives in [`SelectionDialog`]; this component maps keys onto it,
//! refuses picks of the option that is already selected, and draws the list.

use crate::selection::{DialogEvent, SelectionDialog};
use crate::store::SelectionStore;
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState},
    Frame,
};

/// One option line as it will be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub label: String,
    pub disabled: bool,
    pub highlighted: bool,
}

pub struct SelectionDialogComponent {
    dialog: SelectionDialog,
    list_state: ListState,
}

impl SelectionDialogComponent {
    pub fn new(store: SelectionStore) -> Self {
        Self {
            dialog: SelectionDialog::new(store),
            list_state: ListState::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn dialog(&self) -> &SelectionDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut SelectionDialog {
        &mut self.dialog
    }

    /// Rows to draw; empty when the dialog has no target or no options
    pub fn rows(&self) -> Vec<OptionRow> {
        let highlighted = self.dialog.highlighted();
        self.dialog
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| OptionRow {
                label: option.clone(),
                disabled: self.dialog.is_disabled(option),
                highlighted: highlighted == Some(index),
            })
            .collect()
    }

    fn confirm(&mut self) -> Action {
        let Some(option) = self.dialog.highlighted_option().map(str::to_string) else {
            return Action::None;
        };

        if self.dialog.is_disabled(&option) {
            log::debug!("Selection dialog: '{}' is already selected", option);
            return Action::None;
        }

        match self.dialog.pick(&option) {
            DialogEvent::SelectionMade { key, value } => Action::SelectionMade { key, value },
            _ => Action::None,
        }
    }
}

impl Component for SelectionDialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.dialog.is_open() {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => {
                self.dialog.cancel();
                Action::CloseSelection
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.dialog.move_highlight(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.dialog.move_highlight(1);
                Action::None
            }
            KeyCode::Home => {
                self.dialog.highlight_first();
                Action::None
            }
            KeyCode::End => {
                self.dialog.highlight_last();
                Action::None
            }
            KeyCode::Enter => self.confirm(),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::OpenSelection(key) => {
                self.dialog.open(key);
                self.list_state = ListState::default();
                Action::None
            }
            Action::CloseSelection => {
                self.dialog.cancel();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.dialog.target().is_none() {
            return;
        }

        let rows = self.rows();
        let height = (rows.len() as u16).saturating_add(4).min(rect.height);
        let dialog_area = LayoutManager::centered_rect_lines(40, height, rect);
        f.render_widget(Clear, dialog_area);

        let title = format!(" {} ", self.dialog.placeholder());
        let block = common::create_dialog_block(title, Color::Cyan);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let style = if row.disabled {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(Span::styled(row.label.clone(), style)))
            })
            .collect();

        self.list_state.select(self.dialog.highlighted());
        let list = List::new(items)
            .highlight_symbol("› ")
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::ARROWS_MOVE,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_PICK,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[1]);
    }
}
