use crate::content::{ExperienceEntry, ExperienceKind};
use std::collections::BTreeSet;

/// Kinds and tags chosen in the experience popover
///
/// An empty set leaves that dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceSelection {
    pub kinds: BTreeSet<ExperienceKind>,
    pub tags: BTreeSet<String>,
}

impl ExperienceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: ExperienceKind) -> Self {
        self.kinds.insert(kind);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.kinds.is_empty() && self.tags.is_empty()
    }

    pub fn matches(&self, entry: &ExperienceEntry) -> bool {
        let kind_ok = self.kinds.is_empty() || self.kinds.contains(&entry.kind);
        let tags_ok = self.tags.is_empty() || entry.has_any_tag(&self.tags);
        kind_ok && tags_ok
    }
}

/// Entries matching `selection`, in collection order
pub fn filter_experience<'a>(entries: &'a [ExperienceEntry], selection: &ExperienceSelection) -> Vec<&'a ExperienceEntry> {
    entries.iter().filter(|entry| selection.matches(entry)).collect()
}
