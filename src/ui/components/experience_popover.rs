use crate::constants::POPOVER_TITLE;
use crate::filter::{ExperiencePopover, KindToggle, PopoverRow};
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

const POPOVER_WIDTH: u16 = 64;
const POPOVER_HEIGHT: u16 = 18;

/// Filter popover for the experience view
pub struct ExperiencePopoverComponent {
    popover: ExperiencePopover,
    list_state: ListState,
}

impl ExperiencePopoverComponent {
    pub fn new(popover: ExperiencePopover) -> Self {
        Self {
            popover,
            list_state: ListState::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.popover.is_open()
    }

    pub fn popover(&self) -> &ExperiencePopover {
        &self.popover
    }

    fn changed(&self) -> Action {
        Action::ExperienceSelectionChanged(self.popover.selection())
    }

    fn render_kind_toggle(&self) -> Paragraph<'static> {
        let mut spans = vec![Span::styled("experience: ", Style::default().fg(Color::Gray))];
        for kind in KindToggle::ALL {
            let style = if kind == self.popover.kind() {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} ", kind.label()), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans))
    }
}

impl Component for ExperiencePopoverComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_visible() {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::CloseFilters,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.popover.reset();
                self.changed()
            }
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                let label = match c {
                    'a' => "all",
                    'w' => "work",
                    'p' => "projects",
                    _ => return Action::None,
                };
                // Closes the popover along with the kind change
                if self.popover.commit_kind(label) {
                    self.changed()
                } else {
                    Action::None
                }
            }
            KeyCode::Tab => {
                self.popover.cycle_kind();
                self.changed()
            }
            KeyCode::Up => {
                self.popover.move_cursor(-1);
                Action::None
            }
            KeyCode::Down => {
                self.popover.move_cursor(1);
                Action::None
            }
            KeyCode::Enter => {
                if self.popover.activate() {
                    self.changed()
                } else {
                    Action::None
                }
            }
            KeyCode::Backspace => {
                self.popover.pop_char();
                Action::None
            }
            KeyCode::Char(c) => {
                self.popover.push_char(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::OpenFilters => {
                self.popover.open();
                Action::None
            }
            Action::CloseFilters => {
                self.popover.close();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        let area = LayoutManager::top_right_rect(POPOVER_WIDTH, POPOVER_HEIGHT, rect);
        f.render_widget(Clear, area);

        let block = common::create_dialog_block(POPOVER_TITLE, Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        f.render_widget(self.render_kind_toggle(), chunks[0]);
        f.render_widget(common::create_input_paragraph(self.popover.query(), "tags"), chunks[1]);

        let items: Vec<ListItem> = self
            .popover
            .rows()
            .into_iter()
            .map(|row| match row {
                PopoverRow::Selected(tag) => ListItem::new(Line::from(vec![
                    Span::styled(tag, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::styled(" ✓", Style::default().fg(Color::Green)),
                ])),
                PopoverRow::Suggestion(tag) => {
                    ListItem::new(Line::from(Span::styled(tag, Style::default().fg(Color::White))))
                }
            })
            .collect();

        let has_rows = !items.is_empty();
        self.list_state.select(has_rows.then(|| self.popover.cursor()));
        let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, chunks[2], &mut self.list_state);

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::TAB_KIND,
            shortcuts::SEPARATOR,
            shortcuts::ALT_PICK_KIND,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_TOGGLE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CLOSE,
        ]);
        f.render_widget(instructions, chunks[3]);
    }
}
