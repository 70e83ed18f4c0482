use crate::content::FavoriteItem;
use crate::store::{SelectionKey, SelectionStore, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

/// Items matching the given type and year, in collection order
///
/// An unset (or empty) value leaves that dimension unconstrained.
pub fn filter_favorites<'a>(
    items: &'a [FavoriteItem],
    selected_type: Option<&str>,
    selected_year: Option<&str>,
) -> Vec<&'a FavoriteItem> {
    matching_indices(items, selected_type, selected_year)
        .into_iter()
        .map(|index| &items[index])
        .collect()
}

fn matching_indices(items: &[FavoriteItem], selected_type: Option<&str>, selected_year: Option<&str>) -> Vec<usize> {
    let selected_type = selected_type.filter(|value| !value.is_empty());
    let selected_year = selected_year.filter(|value| !value.is_empty());

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| selected_type.map_or(true, |t| item.matches_type(t)))
        .filter(|(_, item)| selected_year.map_or(true, |y| item.matches_year(y)))
        .map(|(index, _)| index)
        .collect()
}

#[derive(Debug, Default)]
struct ViewState {
    indices: Vec<usize>,
    revision: u64,
    dirty: bool,
}

/// Favorites view kept in sync with the selection store
///
/// The view is recomputed inside the store's notification, so it is already
/// current when `set` returns. Renderers poll [`FavoritesFilter::take_dirty`]
/// to know when to repaint.
pub struct FavoritesFilter {
    collection: Rc<[FavoriteItem]>,
    state: Rc<RefCell<ViewState>>,
    _subscriptions: Vec<Subscription>,
}

impl FavoritesFilter {
    pub fn new(collection: Rc<[FavoriteItem]>, store: &SelectionStore) -> Self {
        let state = Rc::new(RefCell::new(ViewState::default()));

        let mut subscriptions = Vec::new();
        for key in SelectionKey::ALL {
            let collection = Rc::clone(&collection);
            let state = Rc::clone(&state);
            let reader = store.clone();
            let subscription = store.subscribe(key, move |_| {
                recompute(&collection, &reader, &state);
            });
            match subscription {
                Some(subscription) => subscriptions.push(subscription),
                None => log::warn!("Favorites filter: no store registered for {}", key),
            }
        }

        recompute(&collection, store, &state);
        state.borrow_mut().dirty = true;

        Self {
            collection,
            state,
            _subscriptions: subscriptions,
        }
    }

    /// Current filtered items, in collection order
    pub fn view(&self) -> Vec<&FavoriteItem> {
        self.state
            .borrow()
            .indices
            .iter()
            .filter_map(|index| self.collection.get(*index))
            .collect()
    }

    /// Item at `position` within the filtered view
    pub fn get(&self, position: usize) -> Option<&FavoriteItem> {
        let index = *self.state.borrow().indices.get(position)?;
        self.collection.get(index)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn collection_len(&self) -> usize {
        self.collection.len()
    }

    /// Bumped on every recomputation
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    /// True once after each recomputation
    pub fn take_dirty(&self) -> bool {
        std::mem::take(&mut self.state.borrow_mut().dirty)
    }
}

fn recompute(collection: &[FavoriteItem], store: &SelectionStore, state: &RefCell<ViewState>) {
    let selected_type = store.get(SelectionKey::SelectedType);
    let selected_year = store.get(SelectionKey::SelectedYear);
    let indices = matching_indices(collection, selected_type.as_deref(), selected_year.as_deref());

    log::debug!(
        "Favorites filter: type={:?} year={:?} -> {} of {}",
        selected_type,
        selected_year,
        indices.len(),
        collection.len()
    );

    let mut state = state.borrow_mut();
    state.indices = indices;
    state.revision += 1;
    state.dirty = true;
}
