use memorabilia::ui::components::dialogs::scroll_behavior::*;
use ratatui::widgets::ScrollbarState;

#[test]
fn test_scrolling_saturates_at_top() {
    let mut offset = 0;
    let mut state = ScrollbarState::new(0);

    scroll_up(&mut offset, &mut state);
    assert_eq!(offset, 0);

    scroll_down(&mut offset, &mut state);
    page_down(&mut offset, &mut state);
    assert_eq!(offset, 11);

    page_up(&mut offset, &mut state);
    assert_eq!(offset, 1);

    scroll_to_top(&mut offset, &mut state);
    assert_eq!(offset, 0);
}

#[test]
fn test_bottom_is_clamped_to_content() {
    let mut offset = 0;
    let mut state = ScrollbarState::new(0);

    scroll_to_bottom(&mut offset, &mut state);
    let visible = clamp_to_content(&mut offset, &mut state, 30, 8);

    assert_eq!(offset, 22);
    assert_eq!(visible, 22..30);
}

#[test]
fn test_short_content_never_scrolls() {
    let mut offset = 5;
    let mut state = ScrollbarState::new(0);

    let visible = clamp_to_content(&mut offset, &mut state, 3, 8);
    assert_eq!(offset, 0);
    assert_eq!(visible, 0..3);
}
