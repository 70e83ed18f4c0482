//! Candidate lists for each selection dimension

use crate::constants::{PLACEHOLDER_TYPE, PLACEHOLDER_YEAR, YEARS};
use crate::content::FavoriteType;
use crate::store::{SelectionKey, SelectionStore};
use once_cell::sync::Lazy;

static TYPE_OPTIONS: Lazy<Vec<String>> = Lazy::new(|| FavoriteType::ALL.iter().map(|t| t.option_value()).collect());

static YEAR_OPTIONS: Lazy<Vec<String>> = Lazy::new(|| YEARS.iter().map(|year| year.to_string()).collect());

/// Ordered candidates for `key`
///
/// Types come back lower-cased in enumeration order, years newest first.
pub fn options_for(key: SelectionKey) -> &'static [String] {
    match key {
        SelectionKey::SelectedType => &TYPE_OPTIONS,
        SelectionKey::SelectedYear => &YEAR_OPTIONS,
    }
}

/// Text shown for a dimension that has no selection yet
pub fn placeholder_for(key: SelectionKey) -> &'static str {
    match key {
        SelectionKey::SelectedType => PLACEHOLDER_TYPE,
        SelectionKey::SelectedYear => PLACEHOLDER_YEAR,
    }
}

/// Current value of `key`, or its placeholder when unset or missing
pub fn label_for(store: &SelectionStore, key: SelectionKey) -> String {
    store
        .get(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| placeholder_for(key).to_string())
}
