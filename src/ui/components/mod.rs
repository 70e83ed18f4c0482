//! Reusable UI components

pub mod dialogs;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod experience_list;
pub mod experience_popover;
pub mod favorites_grid;
pub mod headline;
pub mod selection_dialog;

// Component exports
pub use dialog_component::DialogComponent;
pub use experience_list::ExperienceListComponent;
pub use experience_popover::ExperiencePopoverComponent;
pub use favorites_grid::FavoritesGridComponent;
pub use headline::HeadlineComponent;
pub use selection_dialog::SelectionDialogComponent;
pub use status_bar::StatusBar;
