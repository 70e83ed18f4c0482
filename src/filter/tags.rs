use crate::content::ExperienceEntry;
use std::collections::BTreeSet;

/// Tags split between "available to pick" and "selected"
///
/// Both lists keep universe order, and every universe tag sits in exactly one
/// of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPartition {
    universe: Vec<String>,
    available: Vec<String>,
    selected: Vec<String>,
}

impl TagPartition {
    /// Partition with every tag available; duplicates are dropped
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut universe: Vec<String> = Vec::new();
        for tag in tags.into_iter().map(Into::into) {
            if !universe.contains(&tag) {
                universe.push(tag);
            }
        }

        Self {
            available: universe.clone(),
            universe,
            selected: Vec::new(),
        }
    }

    /// Union of all entry tags, in first-seen order
    pub fn from_entries(entries: &[ExperienceEntry]) -> Self {
        Self::new(entries.iter().flat_map(|entry| entry.tags.iter().cloned()))
    }

    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    /// Move `tag` to the selected side. Returns false if nothing changed.
    pub fn select(&mut self, tag: &str) -> bool {
        if !self.available.iter().any(|t| t == tag) {
            return false;
        }
        self.available.retain(|t| t != tag);
        self.selected = self.in_universe_order(|t| t == tag || self.selected.iter().any(|s| s == t));
        true
    }

    /// Move `tag` back to the available side. Returns false if nothing changed.
    pub fn deselect(&mut self, tag: &str) -> bool {
        if !self.is_selected(tag) {
            return false;
        }
        self.selected.retain(|t| t != tag);
        self.available = self.in_universe_order(|t| t == tag || self.available.iter().any(|a| a == t));
        true
    }

    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.is_selected(tag) {
            self.deselect(tag)
        } else {
            self.select(tag)
        }
    }

    /// Move every selected tag back to the available side
    pub fn clear(&mut self) {
        self.selected.clear();
        self.available = self.universe.clone();
    }

    /// Available tags containing `query`, case-insensitively
    ///
    /// An empty query matches nothing.
    pub fn matching(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.available
            .iter()
            .filter(|tag| tag.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    pub fn selected_set(&self) -> BTreeSet<String> {
        self.selected.iter().cloned().collect()
    }

    /// Whether the two sides are disjoint and together cover the universe
    pub fn is_consistent(&self) -> bool {
        let available: BTreeSet<&String> = self.available.iter().collect();
        let selected: BTreeSet<&String> = self.selected.iter().collect();
        let universe: BTreeSet<&String> = self.universe.iter().collect();

        available.is_disjoint(&selected)
            && available.len() + selected.len() == universe.len()
            && available.union(&selected).copied().collect::<BTreeSet<_>>() == universe
    }

    fn in_universe_order(&self, keep: impl Fn(&String) -> bool) -> Vec<String> {
        self.universe.iter().filter(|t| keep(t)).cloned().collect()
    }
}
