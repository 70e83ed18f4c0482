//! State behind the experience filter popover
//!
//! The popover holds a kind toggle, a free-text query and the tag partition.
//! Selected tags are always listed; available tags only show up once the query
//! matches them. Cycling the kind previews it while the popover stays open;
//! committing a kind sets it and closes the popover.

use super::experience::ExperienceSelection;
use super::tags::TagPartition;
use crate::content::{ExperienceEntry, ExperienceKind};

/// Which kinds of experience are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindToggle {
    #[default]
    All,
    Work,
    Projects,
}

impl KindToggle {
    pub const ALL: [KindToggle; 3] = [KindToggle::All, KindToggle::Work, KindToggle::Projects];

    pub fn label(&self) -> &'static str {
        match self {
            KindToggle::All => "all",
            KindToggle::Work => "work",
            KindToggle::Projects => "projects",
        }
    }

    pub fn next(self) -> Self {
        match self {
            KindToggle::All => KindToggle::Work,
            KindToggle::Work => KindToggle::Projects,
            KindToggle::Projects => KindToggle::All,
        }
    }

    /// Parse a toggle label; `project` is accepted for `projects`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "all" => Some(KindToggle::All),
            "work" => Some(KindToggle::Work),
            "project" | "projects" => Some(KindToggle::Projects),
            _ => None,
        }
    }

    /// Kinds this toggle lets through; every kind for `All`
    pub fn kinds(&self) -> Vec<ExperienceKind> {
        match self {
            KindToggle::All => vec![ExperienceKind::Work, ExperienceKind::Project],
            KindToggle::Work => vec![ExperienceKind::Work],
            KindToggle::Projects => vec![ExperienceKind::Project],
        }
    }
}

/// One line of the tag list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopoverRow {
    Selected(String),
    Suggestion(String),
}

impl PopoverRow {
    pub fn tag(&self) -> &str {
        match self {
            PopoverRow::Selected(tag) | PopoverRow::Suggestion(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExperiencePopover {
    kind: KindToggle,
    query: String,
    partition: TagPartition,
    cursor: usize,
    open: bool,
}

impl ExperiencePopover {
    pub fn new(partition: TagPartition) -> Self {
        Self {
            partition,
            ..Self::default()
        }
    }

    pub fn from_entries(entries: &[ExperienceEntry]) -> Self {
        Self::new(TagPartition::from_entries(entries))
    }

    pub fn kind(&self) -> KindToggle {
        self.kind
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn partition(&self) -> &TagPartition {
        &self.partition
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Closed -> Open. Kind, query and tags carry over from last time.
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn cycle_kind(&mut self) -> bool {
        self.kind = self.kind.next();
        true
    }

    /// Set the kind toggle by label. Returns false for unknown labels.
    pub fn pick_kind(&mut self, label: &str) -> bool {
        match KindToggle::from_label(label) {
            Some(kind) => {
                self.kind = kind;
                true
            }
            None => {
                log::debug!("Experience popover: ignoring unknown kind '{}'", label);
                false
            }
        }
    }

    /// Pick a kind and close. Unknown labels leave the popover untouched.
    pub fn commit_kind(&mut self, label: &str) -> bool {
        if !self.pick_kind(label) {
            return false;
        }
        log::info!("Experience filter: showing {}", self.kind.label());
        self.close();
        true
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_cursor();
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.clamp_cursor();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp_cursor();
    }

    /// Selected tags first, then available tags matching the query
    pub fn rows(&self) -> Vec<PopoverRow> {
        let selected = self.partition.selected().iter().cloned().map(PopoverRow::Selected);
        let suggestions = self
            .partition
            .matching(&self.query)
            .into_iter()
            .map(|tag| PopoverRow::Suggestion(tag.to_string()));
        selected.chain(suggestions).collect()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor as isize + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Toggle the tag under the cursor. Returns true when the selection changed.
    pub fn activate(&mut self) -> bool {
        let Some(row) = self.rows().into_iter().nth(self.cursor) else {
            return false;
        };
        let changed = match &row {
            PopoverRow::Selected(tag) => self.partition.deselect(tag),
            PopoverRow::Suggestion(tag) => self.partition.select(tag),
        };
        self.clamp_cursor();
        changed
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let changed = self.partition.toggle(tag);
        self.clamp_cursor();
        changed
    }

    /// Back to all kinds, no tags and an empty query
    pub fn reset(&mut self) {
        self.kind = KindToggle::All;
        self.query.clear();
        self.partition.clear();
        self.cursor = 0;
    }

    pub fn selection(&self) -> ExperienceSelection {
        ExperienceSelection {
            kinds: self.kind.kinds().into_iter().collect(),
            tags: self.partition.selected_set(),
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
