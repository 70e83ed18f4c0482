use ratatui::widgets::ScrollbarState;

const PAGE_LINES: usize = 10;

pub fn scroll_up(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_sub(1);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn scroll_down(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_add(1);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn page_up(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_sub(PAGE_LINES);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn page_down(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_add(PAGE_LINES);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn scroll_to_top(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = 0;
    *scrollbar_state = scrollbar_state.position(0);
}

/// Jumps past the end; renderers clamp the offset to the content
pub fn scroll_to_bottom(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = usize::MAX;
    *scrollbar_state = scrollbar_state.position(usize::MAX);
}

/// Clamp `scroll_offset` to the content and sync the scrollbar
///
/// Returns the range of visible lines.
pub fn clamp_to_content(
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
    total_lines: usize,
    visible_height: usize,
) -> std::ops::Range<usize> {
    let max_scroll = total_lines.saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(*scroll_offset);

    *scroll_offset..(*scroll_offset + visible_height).min(total_lines)
}
