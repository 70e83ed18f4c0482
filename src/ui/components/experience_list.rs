use crate::content::ExperienceEntry;
use crate::filter::{filter_experience, ExperienceSelection};
use crate::ui::core::{Action, Component};
use crate::utils::datetime::format_year_span;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::rc::Rc;

/// Accordion of experience entries; at most one is expanded
pub struct ExperienceListComponent {
    entries: Rc<[ExperienceEntry]>,
    selection: ExperienceSelection,
    selected_index: usize,
    expanded: Option<usize>,
    list_state: ListState,
}

impl ExperienceListComponent {
    pub fn new(entries: Rc<[ExperienceEntry]>) -> Self {
        let mut list = Self {
            entries,
            selection: ExperienceSelection::default(),
            selected_index: 0,
            expanded: None,
            list_state: ListState::default(),
        };
        list.apply_selection(ExperienceSelection::default());
        list
    }

    pub fn apply_selection(&mut self, selection: ExperienceSelection) {
        self.selection = selection;
        let count = self.visible_entries().len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
        self.expanded = None;
    }

    pub fn visible_entries(&self) -> Vec<&ExperienceEntry> {
        filter_experience(&self.entries, &self.selection)
    }

    pub fn selection(&self) -> &ExperienceSelection {
        &self.selection
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    fn toggle_expanded(&mut self) {
        if self.visible_entries().is_empty() {
            return;
        }
        self.expanded = match self.expanded {
            Some(index) if index == self.selected_index => None,
            _ => Some(self.selected_index),
        };
    }

    fn entry_item(&self, position: usize, entry: &ExperienceEntry) -> ListItem<'static> {
        let marker = if self.expanded == Some(position) { "▾" } else { "▸" };
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", marker), Style::default().fg(Color::DarkGray)),
            Span::styled(
                entry.company.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", entry.position), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  {}", format_year_span(entry.start_date, entry.end_date)),
                Style::default().fg(Color::DarkGray),
            ),
        ])];

        if self.expanded == Some(position) {
            if let Some(description) = &entry.description {
                lines.push(Line::from(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(Color::Gray),
                )));
            }
            if !entry.tags.is_empty() {
                let tags = entry
                    .tags
                    .iter()
                    .map(|tag| format!("#{}", tag))
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(Line::from(Span::styled(
                    format!("  {}", tags),
                    Style::default().fg(Color::Magenta),
                )));
            }
        }

        ListItem::new(lines)
    }
}

impl Component for ExperienceListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_index + 1 < self.visible_entries().len() {
                    self.selected_index += 1;
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_expanded();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ExperienceSelectionChanged(selection) => {
                self.apply_selection(selection);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let visible = self.visible_entries();
        let title = format!(" experience ({} of {}) ", visible.len(), self.entries.len());
        let block = Block::default().borders(Borders::ALL).title(title);

        if visible.is_empty() {
            let empty = Paragraph::new("no matching experience")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = visible
            .into_iter()
            .enumerate()
            .map(|(position, entry)| self.entry_item(position, entry))
            .collect();

        self.list_state.select(Some(self.selected_index));
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
