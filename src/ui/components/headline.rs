//! "some of my favorite {type} from {year}" headline.
//!
//! The two variable words are kept current through store subscriptions and
//! double as click targets for the selection dialog.

use crate::constants::{CONNECTOR_YEAR_SET, CONNECTOR_YEAR_UNSET};
use crate::options;
use crate::store::{SelectionKey, SelectionStore, Subscription};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Labels {
    favorite_type: String,
    year: String,
    year_set: bool,
}

impl Labels {
    fn read(store: &SelectionStore) -> Self {
        Self {
            favorite_type: options::label_for(store, SelectionKey::SelectedType),
            year: options::label_for(store, SelectionKey::SelectedYear),
            year_set: store.get(SelectionKey::SelectedYear).is_some_and(|year| !year.is_empty()),
        }
    }
}

pub struct HeadlineComponent {
    prefix: String,
    labels: Rc<RefCell<Labels>>,
    /// Clickable column ranges from the last render
    targets: Vec<(SelectionKey, Rect)>,
    _subscription: Subscription,
}

impl HeadlineComponent {
    pub fn new(store: &SelectionStore, prefix: impl Into<String>) -> Self {
        let labels = Rc::new(RefCell::new(Labels::read(store)));

        let reader = store.clone();
        let target = Rc::clone(&labels);
        let subscription = store.on_change(move |_, _| {
            *target.borrow_mut() = Labels::read(&reader);
        });

        Self {
            prefix: prefix.into(),
            labels,
            targets: Vec::new(),
            _subscription: subscription,
        }
    }

    /// Plain text of the headline as currently rendered
    pub fn text(&self) -> String {
        let labels = self.labels.borrow();
        format!(
            "{} {} {} {}",
            self.prefix,
            labels.favorite_type,
            connector(labels.year_set),
            labels.year
        )
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }
        self.targets
            .iter()
            .find(|(_, area)| LayoutManager::contains(*area, mouse.column, mouse.row))
            .map(|(key, _)| Action::OpenSelection(*key))
            .unwrap_or(Action::None)
    }
}

fn connector(year_set: bool) -> &'static str {
    if year_set {
        CONNECTOR_YEAR_SET
    } else {
        CONNECTOR_YEAR_UNSET
    }
}

impl Component for HeadlineComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let labels = self.labels.borrow().clone();
        let plain = Style::default().fg(Color::Gray);
        let word = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let segments = [
            (format!("{} ", self.prefix), plain, None),
            (labels.favorite_type.clone(), word, Some(SelectionKey::SelectedType)),
            (format!(" {} ", connector(labels.year_set)), plain, None),
            (labels.year.clone(), word, Some(SelectionKey::SelectedYear)),
        ];

        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(rect);
        let total_width: u16 = segments.iter().map(|(text, _, _)| text.chars().count() as u16).sum();
        let mut column = inner.x + inner.width.saturating_sub(total_width) / 2;

        self.targets.clear();
        let mut spans = Vec::new();
        for (text, style, key) in segments {
            let width = text.chars().count() as u16;
            if let Some(key) = key {
                self.targets.push((key, Rect::new(column, inner.y, width, 1)));
            }
            column = column.saturating_add(width);
            spans.push(Span::styled(text, style));
        }

        let headline = Paragraph::new(Line::from(spans))
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(headline, rect);
    }
}
