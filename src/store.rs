//! Shared selection state
//!
//! The [`SelectionStore`] owns one reactive [`SelectionCell`] per
//! [`SelectionKey`]. It is created once at startup and handed to every
//! component that reads or writes a selection. All access happens on the UI
//! thread, so cells are plain `Rc`/`RefCell` and the store is neither `Send`
//! nor `Sync`.
//!
//! Writes are synchronous: by the time [`SelectionCell::set`] returns, every
//! subscriber has already been called with the new value.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

/// Identifies which selection a widget targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectionKey {
    SelectedType,
    SelectedYear,
}

impl SelectionKey {
    pub const ALL: [SelectionKey; 2] = [SelectionKey::SelectedType, SelectionKey::SelectedYear];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionKey::SelectedType => "SELECTED_TYPE",
            SelectionKey::SelectedYear => "SELECTED_YEAR",
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown selection key '{0}'")]
pub struct UnknownSelectionKey(pub String);

impl FromStr for SelectionKey {
    type Err = UnknownSelectionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectionKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSelectionKey(s.to_string()))
    }
}

type Callback = Rc<RefCell<dyn FnMut(SelectionKey, Option<&str>)>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl Listeners {
    fn add(&mut self, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }
}

/// Call every listener registered at the time of the change.
///
/// The list is copied first so callbacks may subscribe, unsubscribe or read
/// the store. A callback that is already running (it wrote to the store
/// itself) is skipped, not re-entered. Callbacks receive the value current
/// when they run.
fn notify(listeners: &RefCell<Listeners>, cell: &CellInner) {
    let snapshot: Vec<Callback> = listeners
        .borrow()
        .entries
        .iter()
        .map(|(_, callback)| Rc::clone(callback))
        .collect();

    for callback in snapshot {
        if let Ok(mut callback) = callback.try_borrow_mut() {
            let current = cell.value.borrow().clone();
            (&mut *callback)(cell.key, current.as_deref());
        }
    }
}

fn register(listeners: &Rc<RefCell<Listeners>>, callback: Callback) -> Subscription {
    let id = listeners.borrow_mut().add(callback);
    Subscription {
        listeners: Rc::downgrade(listeners),
        id,
    }
}

/// Keeps a callback registered until dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    listeners: Weak<RefCell<Listeners>>,
    id: u64,
}

impl Subscription {
    /// Explicitly end the subscription
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

struct CellInner {
    key: SelectionKey,
    value: RefCell<Option<String>>,
    listeners: Rc<RefCell<Listeners>>,
    store_listeners: Rc<RefCell<Listeners>>,
}

/// Reactive cell holding either nothing or one committed value
#[derive(Clone)]
pub struct SelectionCell {
    inner: Rc<CellInner>,
}

impl SelectionCell {
    fn new(key: SelectionKey, store_listeners: Rc<RefCell<Listeners>>) -> Self {
        Self {
            inner: Rc::new(CellInner {
                key,
                value: RefCell::new(None),
                listeners: Rc::new(RefCell::new(Listeners::default())),
                store_listeners,
            }),
        }
    }

    pub fn key(&self) -> SelectionKey {
        self.inner.key
    }

    /// Current value, `None` when nothing has been committed
    pub fn get(&self) -> Option<String> {
        self.inner.value.borrow().clone()
    }

    /// Whether the committed value equals `candidate`
    pub fn is_current(&self, candidate: &str) -> bool {
        self.inner.value.borrow().as_deref() == Some(candidate)
    }

    /// Overwrite the value and notify subscribers before returning
    ///
    /// No validation happens here; callers decide what is a legal value.
    pub fn set(&self, value: impl Into<String>) {
        let value = value.into();
        log::debug!("Store: {} = '{}'", self.inner.key, value);
        *self.inner.value.borrow_mut() = Some(value);

        notify(&self.inner.listeners, &self.inner);
        notify(&self.inner.store_listeners, &self.inner);
    }

    /// Call `callback` with the new value after every `set`
    pub fn subscribe<F>(&self, mut callback: F) -> Subscription
    where
        F: FnMut(Option<&str>) + 'static,
    {
        let callback: Callback = Rc::new(RefCell::new(move |_key: SelectionKey, value: Option<&str>| callback(value)));
        register(&self.inner.listeners, callback)
    }
}

impl fmt::Debug for SelectionCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionCell")
            .field("key", &self.inner.key)
            .field("value", &*self.inner.value.borrow())
            .finish()
    }
}

struct StoreInner {
    cells: RefCell<HashMap<SelectionKey, SelectionCell>>,
    listeners: Rc<RefCell<Listeners>>,
}

/// Registry of selection cells, cloned cheaply into every component
#[derive(Clone)]
pub struct SelectionStore {
    inner: Rc<StoreInner>,
}

impl SelectionStore {
    /// Store with a cell for every [`SelectionKey`], all unset
    pub fn new() -> Self {
        let store = Self::empty();
        for key in SelectionKey::ALL {
            store.register(key);
        }
        store
    }

    /// Store without any cells; lookups miss until keys are registered
    pub fn empty() -> Self {
        Self {
            inner: Rc::new(StoreInner {
                cells: RefCell::new(HashMap::new()),
                listeners: Rc::new(RefCell::new(Listeners::default())),
            }),
        }
    }

    /// Create the cell for `key`, or return the existing one
    pub fn register(&self, key: SelectionKey) -> SelectionCell {
        let mut cells = self.inner.cells.borrow_mut();
        cells
            .entry(key)
            .or_insert_with(|| SelectionCell::new(key, Rc::clone(&self.inner.listeners)))
            .clone()
    }

    /// Cell registered for `key`, `None` on a miss
    pub fn cell(&self, key: SelectionKey) -> Option<SelectionCell> {
        self.inner.cells.borrow().get(&key).cloned()
    }

    /// Cell for a key given by name, `None` for unknown names or unregistered keys
    pub fn lookup(&self, name: &str) -> Option<SelectionCell> {
        name.parse::<SelectionKey>().ok().and_then(|key| self.cell(key))
    }

    /// Current value for `key`; a miss reads as unset
    pub fn get(&self, key: SelectionKey) -> Option<String> {
        self.cell(key).and_then(|cell| cell.get())
    }

    /// Write `value` to `key`. Returns false when the key has no cell.
    pub fn set(&self, key: SelectionKey, value: impl Into<String>) -> bool {
        match self.cell(key) {
            Some(cell) => {
                cell.set(value);
                true
            }
            None => false,
        }
    }

    /// Subscribe to one key; `None` when the key has no cell
    pub fn subscribe<F>(&self, key: SelectionKey, callback: F) -> Option<Subscription>
    where
        F: FnMut(Option<&str>) + 'static,
    {
        self.cell(key).map(|cell| cell.subscribe(callback))
    }

    /// Subscribe to every write on any key, including keys registered later
    pub fn on_change<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(SelectionKey, Option<&str>) + 'static,
    {
        let callback: Callback = Rc::new(RefCell::new(callback));
        register(&self.inner.listeners, callback)
    }

    /// Current values of every registered key, in key order
    pub fn snapshot(&self) -> Vec<(SelectionKey, Option<String>)> {
        let cells = self.inner.cells.borrow();
        let mut values: Vec<_> = cells.iter().map(|(key, cell)| (*key, cell.get())).collect();
        values.sort_by_key(|(key, _)| *key);
        values
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore").field("values", &self.snapshot()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_key_round_trips_through_name() {
        for key in SelectionKey::ALL {
            assert_eq!(key.as_str().parse::<SelectionKey>(), Ok(key));
        }
        assert!("SELECTED_COLOR".parse::<SelectionKey>().is_err());
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let store = SelectionStore::new();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let subscription = store
            .subscribe(SelectionKey::SelectedYear, move |_| counter.set(counter.get() + 1))
            .expect("year cell is registered");

        store.set(SelectionKey::SelectedYear, "2023");
        drop(subscription);
        store.set(SelectionKey::SelectedYear, "2022");

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_callback_writing_its_own_key_is_not_reentered() {
        let store = SelectionStore::new();
        let calls = Rc::new(Cell::new(0));

        let writer = store.clone();
        let counter = Rc::clone(&calls);
        let _subscription = store.subscribe(SelectionKey::SelectedType, move |value| {
            counter.set(counter.get() + 1);
            if value == Some("games") {
                writer.set(SelectionKey::SelectedType, "songs");
            }
        });

        store.set(SelectionKey::SelectedType, "games");

        assert_eq!(calls.get(), 1);
        assert_eq!(store.get(SelectionKey::SelectedType).as_deref(), Some("songs"));
    }
}
