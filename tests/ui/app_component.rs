use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use memorabilia::content::{Content, ExperienceEntry, ExperienceKind, FavoriteItem, FavoriteType};
use memorabilia::filter::KindToggle;
use memorabilia::images::ImageHost;
use memorabilia::logger::Logger;
use memorabilia::store::{SelectionKey, SelectionStore};
use memorabilia::ui::app_component::{AppComponent, AppOptions};
use memorabilia::ui::core::{Component, EventType, View};
use ratatui::{backend::TestBackend, Terminal};
use std::rc::Rc;

struct FakeHost;

impl ImageHost for FakeHost {
    fn url(&self, image_id: &str) -> String {
        format!("https://images.test/{}", image_id)
    }
}

fn content() -> Content {
    let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
    Content::new(
        vec![
            FavoriteItem::new("Elden Ring", 2022, FavoriteType::Games, "elden"),
            FavoriteItem::new("Ramen", 2023, FavoriteType::Meals, "ramen"),
            FavoriteItem::new("Jordan 4", 2023, FavoriteType::Sneakers, "j4"),
        ],
        vec![
            ExperienceEntry::new("Acme", "Engineer", ExperienceKind::Work, start).with_tags(["rust", "react"]),
            ExperienceEntry::new("Side", "Author", ExperienceKind::Project, start).with_tags(["rust"]),
        ],
    )
}

fn app_with(store: SelectionStore, start_view: View) -> AppComponent {
    let options = AppOptions {
        start_view,
        headline_prefix: "some of my favorite".to_string(),
    };
    AppComponent::new(&content(), store, Rc::new(FakeHost), Logger::new(), options)
}

fn app() -> AppComponent {
    app_with(SelectionStore::new(), View::Favorites)
}

fn draw(app: &mut AppComponent, f: &mut ratatui::Frame) {
    let area = f.area();
    app.render(f, area);
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

#[test]
fn test_initial_state() {
    let app = app();
    assert_eq!(app.view(), View::Favorites);
    assert!(!app.should_quit());
    assert_eq!(app.headline().text(), "some of my favorite things of all time");
    assert_eq!(app.favorites().cards().len(), 3);
    assert_eq!(app.favorites().cards()[0].image_url, "https://images.test/elden");
}

#[test]
fn test_pick_type_updates_headline_and_cards() {
    let mut app = app();

    press(&mut app, KeyCode::Char('t'));
    assert!(app.selection_dialog().is_visible());

    // First row is "games", the next one "meals"
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert!(!app.selection_dialog().is_visible());
    assert_eq!(app.store().get(SelectionKey::SelectedType).as_deref(), Some("meals"));
    assert_eq!(app.headline().text(), "some of my favorite meals of all time");

    let titles: Vec<&str> = app.favorites().cards().iter().map(|card| card.title.as_str()).collect();
    assert_eq!(titles, vec!["Ramen"]);
}

#[test]
fn test_pick_year_changes_connector() {
    let mut app = app();

    press(&mut app, KeyCode::Char('y'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.headline().text(), "some of my favorite things from 2023");
    assert_eq!(app.favorites().cards().len(), 2);
}

#[test]
fn test_escape_cancels_selection() {
    let mut app = app();

    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Esc);

    assert!(!app.selection_dialog().is_visible());
    assert_eq!(app.store().get(SelectionKey::SelectedType), None);
}

#[test]
fn test_current_value_cannot_be_picked_again() {
    let store = SelectionStore::new();
    store.set(SelectionKey::SelectedType, "games");
    let mut app = app_with(store, View::Favorites);

    press(&mut app, KeyCode::Char('t'));
    // Highlight starts below the disabled row; move back onto it
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selection_dialog().dialog().highlighted_option(), Some("games"));

    press(&mut app, KeyCode::Enter);
    assert!(app.selection_dialog().is_visible());
    assert_eq!(app.store().get(SelectionKey::SelectedType).as_deref(), Some("games"));
}

#[test]
fn test_external_store_writes_reach_the_view() {
    let mut app = app();
    app.store().set(SelectionKey::SelectedType, "sneakers");

    // Cards catch up on the next render pass
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| draw(&mut app, f)).unwrap();

    assert_eq!(app.favorites().cards().len(), 1);
    assert_eq!(app.headline().text(), "some of my favorite sneakers of all time");
}

#[test]
fn test_tab_switches_views() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view(), View::Experience);

    // Type selection is only bound on the favorites view
    press(&mut app, KeyCode::Char('t'));
    assert!(!app.selection_dialog().is_visible());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view(), View::Favorites);
}

#[test]
fn test_popover_filters_experience() {
    let mut app = app_with(SelectionStore::new(), View::Experience);
    assert_eq!(app.experience().visible_entries().len(), 2);

    press(&mut app, KeyCode::Char('f'));
    assert!(app.popover().is_visible());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.popover().popover().kind(), KindToggle::Work);
    let companies: Vec<&str> = app
        .experience()
        .visible_entries()
        .iter()
        .map(|entry| entry.company.as_str())
        .collect();
    assert_eq!(companies, vec!["Acme"]);

    // 'q' is typed into the query instead of quitting
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Backspace);

    for c in "rea".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert!(app.experience().selection().tags.contains("react"));

    press(&mut app, KeyCode::Esc);
    assert!(!app.popover().is_visible());
    assert_eq!(app.experience().visible_entries().len(), 1);
}

#[test]
fn test_picking_work_kind_closes_popover() {
    let mut app = app_with(SelectionStore::new(), View::Experience);

    press(&mut app, KeyCode::Char('f'));
    assert!(app.popover().is_visible());

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::ALT)))
        .unwrap();

    assert!(!app.popover().is_visible());
    assert_eq!(app.popover().popover().kind(), KindToggle::Work);
    assert!(app.popover().popover().query().is_empty());

    let entries = app.experience().visible_entries();
    assert_eq!(entries.len(), 1);
    assert!(entries.iter().all(|entry| entry.kind != ExperienceKind::Project));

    // Back in the list, 'q' quits again
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_help_and_logs_dialogs() {
    let mut app = app();

    press(&mut app, KeyCode::Char('?'));
    assert!(app.dialog().is_visible());
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('G'));
    assert!(app.dialog().is_visible());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| draw(&mut app, f)).unwrap();
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = app_with(SelectionStore::new(), View::Experience);
    press(&mut app, KeyCode::Char('f'));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_clicking_headline_word_opens_dialog() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| draw(&mut app, f)).unwrap();

    // "some of my favorite things of all time" is centered on an 80 column row
    let things_column = (80 - 38) / 2 + "some of my favorite ".len() as u16 + 2;
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: things_column,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_event(EventType::Mouse(click)).unwrap();

    assert!(app.selection_dialog().is_visible());
    assert_eq!(
        app.selection_dialog().dialog().target().map(|t| t.key),
        Some(SelectionKey::SelectedType)
    );
}

#[test]
fn test_render_with_every_overlay() {
    let mut app = app_with(SelectionStore::new(), View::Experience);
    press(&mut app, KeyCode::Char('f'));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| draw(&mut app, f)).unwrap();

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('y'));
    terminal.draw(|f| draw(&mut app, f)).unwrap();
    assert!(app.selection_dialog().is_visible());
}
