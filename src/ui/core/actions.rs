use crate::filter::ExperienceSelection;
use crate::store::SelectionKey;

/// Top-level page shown under the headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Favorites,
    Experience,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            View::Favorites => View::Experience,
            View::Experience => View::Favorites,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Favorites => "favorites",
            View::Experience => "experience",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "favorites" => Some(View::Favorites),
            "experience" => Some(View::Experience),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Selection dialog
    OpenSelection(SelectionKey),
    SelectionMade { key: SelectionKey, value: String },
    CloseSelection,

    // Experience filters
    OpenFilters,
    CloseFilters,
    ExperienceSelectionChanged(ExperienceSelection),

    // Navigation
    NextView,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
