use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use memorabilia::store::{SelectionKey, SelectionStore};
use memorabilia::ui::components::HeadlineComponent;
use memorabilia::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn click(column: u16, row: u16, kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn render(headline: &mut HeadlineComponent, width: u16) {
    let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
    terminal
        .draw(|f| headline.render(f, Rect::new(0, 0, width, 3)))
        .unwrap();
}

#[test]
fn test_text_follows_store() {
    let store = SelectionStore::new();
    let headline = HeadlineComponent::new(&store, "some of my favorite");
    assert_eq!(headline.text(), "some of my favorite things of all time");

    store.set(SelectionKey::SelectedType, "sneakers");
    store.set(SelectionKey::SelectedYear, "2023");
    assert_eq!(headline.text(), "some of my favorite sneakers from 2023");
}

#[test]
fn test_empty_value_reads_as_placeholder() {
    let store = SelectionStore::new();
    let headline = HeadlineComponent::new(&store, "some of my favorite");

    store.set(SelectionKey::SelectedYear, "");
    assert_eq!(headline.text(), "some of my favorite things of all time");
}

#[test]
fn test_clicks_map_to_selection_keys() {
    let store = SelectionStore::new();
    let mut headline = HeadlineComponent::new(&store, "pick");

    // Before the first render there is nothing to click
    assert_eq!(
        headline.handle_mouse(click(5, 0, MouseEventKind::Down(MouseButton::Left))),
        Action::None
    );

    // "pick things of all time" is 23 wide, centered in 43 columns from column 10
    render(&mut headline, 43);
    let type_column = 10 + "pick ".len() as u16;
    let year_column = type_column + "things of ".len() as u16;

    assert_eq!(
        headline.handle_mouse(click(type_column, 0, MouseEventKind::Down(MouseButton::Left))),
        Action::OpenSelection(SelectionKey::SelectedType)
    );
    assert_eq!(
        headline.handle_mouse(click(year_column + 3, 0, MouseEventKind::Down(MouseButton::Left))),
        Action::OpenSelection(SelectionKey::SelectedYear)
    );
    assert_eq!(
        headline.handle_mouse(click(10, 0, MouseEventKind::Down(MouseButton::Left))),
        Action::None
    );
    assert_eq!(
        headline.handle_mouse(click(type_column, 0, MouseEventKind::Moved)),
        Action::None
    );
}
