//! Selection dialog state machine
//!
//! A single dialog is shared by every selection dimension and re-targeted on
//! each open. It knows nothing about the terminal: the UI component feeds it
//! key presses and reads back what to draw.
//!
//! ```text
//!   Closed --open(key)--> Open --pick(option)--> [commit to store] --> Closed
//!                          |  \--cancel()--------------------------> Closed
//!                          \--open(other key)--> Open (re-targeted)
//! ```

use crate::options;
use crate::store::{SelectionKey, SelectionStore};

/// Dimension the open dialog writes to, with its candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogTarget {
    pub key: SelectionKey,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open {
        /// `None` when opened without a key or without options; renders nothing
        target: Option<DialogTarget>,
        placeholder: String,
        highlighted: usize,
    },
}

/// What a dialog operation did, for the host to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    Opened(Option<SelectionKey>),
    /// A value was committed; the host should close the surface
    SelectionMade { key: SelectionKey, value: String },
    Cancelled,
    /// Nothing happened (closed dialog, missing target, store miss)
    Ignored,
}

pub struct SelectionDialog {
    state: DialogState,
    store: SelectionStore,
}

impl SelectionDialog {
    pub fn new(store: SelectionStore) -> Self {
        Self {
            state: DialogState::Closed,
            store,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    /// Open for `key` with the standard candidates and current label
    pub fn open(&mut self, key: SelectionKey) -> DialogEvent {
        let candidates = options::options_for(key).to_vec();
        let placeholder = options::label_for(&self.store, key);
        self.open_with(Some(key), Some(candidates), placeholder)
    }

    /// Open with an explicit (possibly missing) key and option list
    pub fn open_with(
        &mut self,
        key: Option<SelectionKey>,
        options: Option<Vec<String>>,
        placeholder: impl Into<String>,
    ) -> DialogEvent {
        let target = match (key, options) {
            (Some(key), Some(options)) => Some(DialogTarget { key, options }),
            _ => None,
        };

        let highlighted = target
            .as_ref()
            .and_then(|t| self.first_enabled(t))
            .unwrap_or(0);

        log::info!(
            "Selection dialog opened for {}",
            key.map(|k| k.as_str()).unwrap_or("<none>")
        );
        self.state = DialogState::Open {
            target,
            placeholder: placeholder.into(),
            highlighted,
        };
        DialogEvent::Opened(key)
    }

    /// Commit `option` to the target key and close
    ///
    /// Disabled options are not refused here; that guard belongs to the UI.
    pub fn pick(&mut self, option: &str) -> DialogEvent {
        let key = match &self.state {
            DialogState::Open {
                target: Some(target), ..
            } => target.key,
            _ => return DialogEvent::Ignored,
        };

        let Some(cell) = self.store.cell(key) else {
            log::warn!("Selection dialog: no store registered for {}", key);
            return DialogEvent::Ignored;
        };

        cell.set(option);
        self.state = DialogState::Closed;
        log::info!("Selection made: {} = '{}'", key, option);
        DialogEvent::SelectionMade {
            key,
            value: option.to_string(),
        }
    }

    /// Commit the highlighted row
    pub fn pick_highlighted(&mut self) -> DialogEvent {
        match self.highlighted_option().map(str::to_string) {
            Some(option) => self.pick(&option),
            None => DialogEvent::Ignored,
        }
    }

    /// Close without touching the store
    pub fn cancel(&mut self) -> DialogEvent {
        if !self.is_open() {
            return DialogEvent::Ignored;
        }
        self.state = DialogState::Closed;
        DialogEvent::Cancelled
    }

    pub fn target(&self) -> Option<&DialogTarget> {
        match &self.state {
            DialogState::Open { target, .. } => target.as_ref(),
            DialogState::Closed => None,
        }
    }

    /// Rows to render; empty when closed or without a target
    pub fn options(&self) -> &[String] {
        self.target().map(|t| t.options.as_slice()).unwrap_or(&[])
    }

    pub fn placeholder(&self) -> &str {
        match &self.state {
            DialogState::Open { placeholder, .. } => placeholder,
            DialogState::Closed => "",
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        match &self.state {
            DialogState::Open { highlighted, .. } if !self.options().is_empty() => Some(*highlighted),
            _ => None,
        }
    }

    pub fn highlighted_option(&self) -> Option<&str> {
        self.highlighted()
            .and_then(|index| self.options().get(index))
            .map(String::as_str)
    }

    /// Whether `option` is the value already committed for the target key
    pub fn is_disabled(&self, option: &str) -> bool {
        self.target()
            .and_then(|t| self.store.cell(t.key))
            .map(|cell| cell.is_current(option))
            .unwrap_or(false)
    }

    /// Move the highlight by `delta` rows, clamped to the list
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.options().len();
        if let DialogState::Open { highlighted, .. } = &mut self.state {
            if len == 0 {
                return;
            }
            let next = (*highlighted as isize + delta).clamp(0, len as isize - 1);
            *highlighted = next as usize;
        }
    }

    pub fn highlight_first(&mut self) {
        if let DialogState::Open { highlighted, .. } = &mut self.state {
            *highlighted = 0;
        }
    }

    pub fn highlight_last(&mut self) {
        let len = self.options().len();
        if let DialogState::Open { highlighted, .. } = &mut self.state {
            *highlighted = len.saturating_sub(1);
        }
    }

    fn first_enabled(&self, target: &DialogTarget) -> Option<usize> {
        let cell = self.store.cell(target.key)?;
        target.options.iter().position(|option| !cell.is_current(option))
    }
}
