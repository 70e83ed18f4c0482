use crate::filter::FavoritesFilter;
use crate::images::ImageHost;
use crate::render::FavoriteCard;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::rc::Rc;

/// Cards for the filtered favorites, one per item
pub struct FavoritesGridComponent {
    filter: FavoritesFilter,
    host: Rc<dyn ImageHost>,
    cards: Vec<FavoriteCard>,
    selected_index: usize,
    /// Card whose description overlay is shown
    revealed: Option<usize>,
    list_state: ListState,
}

impl FavoritesGridComponent {
    pub fn new(filter: FavoritesFilter, host: Rc<dyn ImageHost>) -> Self {
        let mut grid = Self {
            filter,
            host,
            cards: Vec::new(),
            selected_index: 0,
            revealed: None,
            list_state: ListState::default(),
        };
        grid.sync_cards();
        grid
    }

    pub fn cards(&self) -> &[FavoriteCard] {
        &self.cards
    }

    pub fn selected_card(&self) -> Option<&FavoriteCard> {
        self.cards.get(self.selected_index)
    }

    pub fn revealed(&self) -> Option<usize> {
        self.revealed
    }

    pub fn filter(&self) -> &FavoritesFilter {
        &self.filter
    }

    /// Rebuild the cards if the filter recomputed since the last call
    pub fn sync_cards(&mut self) {
        if !self.filter.take_dirty() {
            return;
        }
        self.cards = self
            .filter
            .view()
            .into_iter()
            .map(|item| FavoriteCard::from_item(item, self.host.as_ref()))
            .collect();
        self.selected_index = self.selected_index.min(self.cards.len().saturating_sub(1));
        self.revealed = None;
    }

    fn next(&mut self) {
        if !self.cards.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.cards.len();
        }
    }

    fn previous(&mut self) {
        if !self.cards.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.cards.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    fn toggle_reveal(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.revealed = match self.revealed {
            Some(index) if index == self.selected_index => None,
            _ => Some(self.selected_index),
        };
    }

    fn card_item(&self, index: usize, card: &FavoriteCard) -> ListItem<'static> {
        let mut lines = vec![
            Line::from(Span::styled(
                card.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.caption(), Style::default().fg(Color::Cyan))),
            Line::from(Span::styled(card.image_url.clone(), Style::default().fg(Color::DarkGray))),
        ];

        if self.revealed == Some(index) {
            let description = card.description.clone().unwrap_or_else(|| "no description".to_string());
            lines.push(Line::from(Span::styled(
                format!("  {}", description),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));

        ListItem::new(lines)
    }
}

impl Component for FavoritesGridComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                Action::None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected_index = self.cards.len().saturating_sub(1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_reveal();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::SelectionMade { .. } = action {
            self.sync_cards();
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.sync_cards();

        let title = format!(" favorites ({} of {}) ", self.cards.len(), self.filter.collection_len());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::White));

        if self.cards.is_empty() {
            let empty = Paragraph::new("nothing here yet")
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true });
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| self.card_item(index, card))
            .collect();

        self.list_state.select(Some(self.selected_index));
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
