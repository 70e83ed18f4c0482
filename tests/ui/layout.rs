use memorabilia::ui::layout::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_main_layout_rows() {
    let chunks = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].height, 3);
    assert_eq!(chunks[1].height, 20);
    assert_eq!(chunks[2].height, 1);
    assert_eq!(chunks[2].y, 23);
}

#[test]
fn test_top_right_rect_fits_inside() {
    let area = Rect::new(0, 3, 80, 20);
    let popover = LayoutManager::top_right_rect(48, 18, area);
    assert_eq!(popover, Rect::new(32, 3, 48, 18));

    let small = Rect::new(0, 0, 30, 10);
    assert_eq!(LayoutManager::top_right_rect(48, 18, small), small);
}

#[test]
fn test_centered_rect_lines_height() {
    let rect = LayoutManager::centered_rect_lines(50, 8, Rect::new(0, 0, 100, 40));
    assert_eq!(rect.height, 8);
    assert_eq!(rect.width, 50);
}

#[test]
fn test_contains() {
    let area = Rect::new(10, 2, 5, 1);
    assert!(LayoutManager::contains(area, 10, 2));
    assert!(LayoutManager::contains(area, 14, 2));
    assert!(!LayoutManager::contains(area, 15, 2));
    assert!(!LayoutManager::contains(area, 12, 3));
}
