use memorabilia::content::{FavoriteItem, FavoriteType};
use memorabilia::filter::{filter_favorites, FavoritesFilter};
use memorabilia::store::{SelectionKey, SelectionStore};
use std::rc::Rc;

fn collection() -> Vec<FavoriteItem> {
    vec![
        FavoriteItem::new("Air Max 1", 2023, FavoriteType::Sneakers, "img/a"),
        FavoriteItem::new("Elden Ring", 2022, FavoriteType::Games, "img/b"),
        FavoriteItem::new("Samba OG", 2022, FavoriteType::Sneakers, "img/c"),
        FavoriteItem::new("Dune", 2023, FavoriteType::Reads, "img/d"),
        FavoriteItem::new("Jordan 4", 2023, FavoriteType::Sneakers, "img/e"),
    ]
}

fn titles(items: &[&FavoriteItem]) -> Vec<String> {
    items.iter().map(|item| item.title.clone()).collect()
}

#[test]
fn test_type_and_year_both_constrain() {
    let items = collection();
    let view = filter_favorites(&items, Some("sneakers"), Some("2023"));
    assert_eq!(titles(&view), vec!["Air Max 1", "Jordan 4"]);
}

#[test]
fn test_sneakers_from_2023() {
    let items = vec![
        FavoriteItem::new("a", 2023, FavoriteType::Sneakers, "a"),
        FavoriteItem::new("b", 2023, FavoriteType::Reads, "b"),
        FavoriteItem::new("c", 2022, FavoriteType::Sneakers, "c"),
    ];

    let view = filter_favorites(&items, Some("SNEAKERS"), Some("2023"));
    assert_eq!(view, vec![&items[0]]);
}

#[test]
fn test_unset_dimensions_return_whole_collection() {
    let items = collection();
    let view = filter_favorites(&items, None, None);
    assert_eq!(view.len(), items.len());

    let view = filter_favorites(&items, Some(""), Some(""));
    assert_eq!(view.len(), items.len());
}

#[test]
fn test_single_dimension() {
    let items = collection();
    assert_eq!(
        titles(&filter_favorites(&items, None, Some("2022"))),
        vec!["Elden Ring", "Samba OG"]
    );
    assert_eq!(
        titles(&filter_favorites(&items, Some("SNEAKERS"), None)),
        vec!["Air Max 1", "Samba OG", "Jordan 4"]
    );
}

#[test]
fn test_view_is_an_ordered_subsequence() {
    let items = collection();
    let view = filter_favorites(&items, Some("sneakers"), None);

    let mut last_index = None;
    for item in view {
        let index = items.iter().position(|candidate| std::ptr::eq(candidate, item)).unwrap();
        if let Some(last) = last_index {
            assert!(index > last);
        }
        last_index = Some(index);
    }
}

#[test]
fn test_no_match_gives_empty_view() {
    let items = collection();
    assert!(filter_favorites(&items, Some("songs"), Some("2019")).is_empty());
    assert!(filter_favorites(&items, None, Some("not a year")).is_empty());
}

#[test]
fn test_filter_follows_store_writes() {
    let store = SelectionStore::new();
    let filter = FavoritesFilter::new(Rc::from(collection()), &store);
    assert_eq!(filter.len(), 5);
    assert_eq!(filter.collection_len(), 5);

    store.set(SelectionKey::SelectedType, "sneakers");
    assert_eq!(filter.len(), 3);

    store.set(SelectionKey::SelectedYear, "2023");
    assert_eq!(titles(&filter.view()), vec!["Air Max 1", "Jordan 4"]);
    assert_eq!(filter.get(1).map(|item| item.title.as_str()), Some("Jordan 4"));
    assert!(filter.get(2).is_none());

    store.set(SelectionKey::SelectedType, "movies");
    assert!(filter.is_empty());
}

#[test]
fn test_dirty_flag_and_revision() {
    let store = SelectionStore::new();
    let filter = FavoritesFilter::new(Rc::from(collection()), &store);

    assert!(filter.take_dirty());
    assert!(!filter.take_dirty());

    let before = filter.revision();
    store.set(SelectionKey::SelectedYear, "2022");
    assert!(filter.revision() > before);
    assert!(filter.take_dirty());
}

#[test]
fn test_starts_from_existing_selection() {
    let store = SelectionStore::new();
    store.set(SelectionKey::SelectedType, "games");

    let filter = FavoritesFilter::new(Rc::from(collection()), &store);
    assert_eq!(titles(&filter.view()), vec!["Elden Ring"]);
}

#[test]
fn test_dropped_filter_leaves_store_usable() {
    let store = SelectionStore::new();
    let filter = FavoritesFilter::new(Rc::from(collection()), &store);
    drop(filter);

    assert!(store.set(SelectionKey::SelectedType, "reads"));
    assert_eq!(store.get(SelectionKey::SelectedType).as_deref(), Some("reads"));
}

#[test]
fn test_missing_store_keys_leave_view_unfiltered() {
    let store = SelectionStore::empty();
    let filter = FavoritesFilter::new(Rc::from(collection()), &store);
    assert_eq!(filter.len(), 5);

    // Writes to an unregistered key are refused and change nothing
    assert!(!store.set(SelectionKey::SelectedType, "games"));
    assert_eq!(filter.len(), 5);
}
