use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use memorabilia::store::{SelectionKey, SelectionStore};
use memorabilia::ui::components::selection_dialog::{OptionRow, SelectionDialogComponent};
use memorabilia::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render(component: &mut SelectionDialogComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|f| component.render(f, Rect::new(0, 0, 60, 20)))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_closed_component_ignores_keys() {
    let mut component = SelectionDialogComponent::new(SelectionStore::new());
    assert!(!component.is_visible());
    assert_eq!(component.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(component.rows().is_empty());
}

#[test]
fn test_rows_mark_current_value() {
    let store = SelectionStore::new();
    store.set(SelectionKey::SelectedYear, "2024");
    let mut component = SelectionDialogComponent::new(store);
    component.update(Action::OpenSelection(SelectionKey::SelectedYear));

    let rows = component.rows();
    assert_eq!(rows.len(), 6);
    assert_eq!(
        rows[0],
        OptionRow {
            label: "2024".to_string(),
            disabled: true,
            highlighted: false
        }
    );
    assert!(rows[1].highlighted);
    assert!(rows[1..].iter().all(|row| !row.disabled));
}

#[test]
fn test_enter_commits_and_reports() {
    let store = SelectionStore::new();
    let mut component = SelectionDialogComponent::new(store.clone());
    component.update(Action::OpenSelection(SelectionKey::SelectedType));

    component.handle_key_events(key(KeyCode::End));
    let action = component.handle_key_events(key(KeyCode::Enter));

    assert_eq!(
        action,
        Action::SelectionMade {
            key: SelectionKey::SelectedType,
            value: "songs".to_string()
        }
    );
    assert!(!component.is_visible());
    assert_eq!(store.get(SelectionKey::SelectedType).as_deref(), Some("songs"));
}

#[test]
fn test_escape_closes() {
    let mut component = SelectionDialogComponent::new(SelectionStore::new());
    component.update(Action::OpenSelection(SelectionKey::SelectedType));

    assert_eq!(component.handle_key_events(key(KeyCode::Esc)), Action::CloseSelection);
    assert!(!component.is_visible());
}

#[test]
fn test_render_lists_options() {
    let mut component = SelectionDialogComponent::new(SelectionStore::new());
    component.update(Action::OpenSelection(SelectionKey::SelectedType));

    let screen = render(&mut component);
    assert!(screen.contains("sneakers"));
    assert!(screen.contains("things"));
}

#[test]
fn test_render_without_target_draws_nothing() {
    let mut component = SelectionDialogComponent::new(SelectionStore::new());
    component
        .dialog_mut()
        .open_with(None, Some(vec!["games".to_string()]), "things");

    let screen = render(&mut component);
    assert!(screen.trim().is_empty());
}

#[test]
fn test_render_with_empty_options() {
    let mut component = SelectionDialogComponent::new(SelectionStore::new());
    component
        .dialog_mut()
        .open_with(Some(SelectionKey::SelectedType), Some(Vec::new()), "things");

    assert!(component.rows().is_empty());
    render(&mut component);
    assert_eq!(component.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(component.is_visible());
}
