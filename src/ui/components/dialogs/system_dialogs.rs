use super::{common, scroll_behavior};
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, ScrollbarState},
    Frame,
};

const HELP_CONTENT: &str = r"
MEMORABILIA - Terminal Showcase
===============================

FILTERS
-------
t           Choose a favorite type
y           Choose a year
f           Open experience filters

SELECTION DIALOG
----------------
j/k ↑↓      Move between options
Home/End    First / last option
Enter       Pick the highlighted option
Esc         Close without picking

Options already selected are greyed out and cannot be picked again.

EXPERIENCE FILTERS
------------------
Tab         Cycle all / work / projects
Alt+a/w/p   Show all / work / projects and close
type        Search tags
↑↓          Move between tags
Enter       Select or deselect the highlighted tag
Ctrl+R      Reset filters
Esc         Close filters

BROWSING
--------
Tab         Switch between favorites and experience
j/k ↑↓      Move between cards or entries
Enter       Show description / expand entry
Mouse       Click the headline words to change them

GENERAL CONTROLS
----------------
?           Toggle help panel
G           Show logs
q           Quit application
Ctrl+C      Quit application
";

/// Render a scrollable text panel covering most of the screen
fn render_scrollable_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;

    let visible = scroll_behavior::clamp_to_content(scroll_offset, scrollbar_state, total_lines, visible_height);
    let text = lines[visible].join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        f.render_stateful_widget(common::create_scrollbar(), content_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    render_scrollable_panel(f, area, DIALOG_TITLE_HELP, HELP_CONTENT, scroll_offset, scrollbar_state);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_panel(f, area, DIALOG_TITLE_LOGS, &content, scroll_offset, scrollbar_state);
}
