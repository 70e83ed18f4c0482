//! Status bar component

use crate::ui::core::View;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, view: View) {
        let status_text = match view {
            View::Favorites => "t: type • y: year • Enter: details • Tab: experience • ?: help • q: quit",
            View::Experience => "f: filters • Enter: expand • Tab: favorites • ?: help • q: quit",
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}
