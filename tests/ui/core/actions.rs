use memorabilia::store::SelectionKey;
use memorabilia::ui::core::actions::{Action, View};

#[test]
fn test_view_cycle() {
    assert_eq!(View::default(), View::Favorites);
    assert_eq!(View::Favorites.next(), View::Experience);
    assert_eq!(View::Experience.next(), View::Favorites);
}

#[test]
fn test_view_from_config_name() {
    assert_eq!(View::from_name("favorites"), Some(View::Favorites));
    assert_eq!(View::from_name("experience"), Some(View::Experience));
    assert_eq!(View::from_name("moodboard"), None);

    for view in [View::Favorites, View::Experience] {
        assert_eq!(View::from_name(view.title()), Some(view));
    }
}

#[test]
fn test_selection_actions_compare_by_value() {
    let made = Action::SelectionMade {
        key: SelectionKey::SelectedYear,
        value: "2023".to_string(),
    };
    assert_eq!(made.clone(), made);
    assert_ne!(
        Action::OpenSelection(SelectionKey::SelectedType),
        Action::OpenSelection(SelectionKey::SelectedYear)
    );
}
