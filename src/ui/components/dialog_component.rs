//! Modal dialog component for the help panel and the log viewer.

use crate::logger::Logger;
use crate::ui::components::dialogs::{scroll_behavior, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    /// Keys shared by every scrollable dialog
    fn handle_scroll_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                scroll_behavior::scroll_up(&mut self.scroll_offset, &mut self.scrollbar_state);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                scroll_behavior::scroll_down(&mut self.scroll_offset, &mut self.scrollbar_state);
            }
            KeyCode::PageUp => {
                scroll_behavior::page_up(&mut self.scroll_offset, &mut self.scrollbar_state);
            }
            KeyCode::PageDown => {
                scroll_behavior::page_down(&mut self.scroll_offset, &mut self.scrollbar_state);
            }
            KeyCode::Home => {
                scroll_behavior::scroll_to_top(&mut self.scroll_offset, &mut self.scrollbar_state);
            }
            KeyCode::End => {
                scroll_behavior::scroll_to_bottom(&mut self.scroll_offset, &mut self.scrollbar_state);
            }
            _ => {}
        }
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type {
            None => Action::None,
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Action::HideDialog,
                _ => self.handle_scroll_key(key),
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_key(key),
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect, &mut self.scroll_offset, &mut self.scrollbar_state);
            }
            Some(DialogType::Logs) => {
                system_dialogs::render_logs_dialog(
                    f,
                    rect,
                    &self.logger,
                    &mut self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            None => {}
        }
    }
}
