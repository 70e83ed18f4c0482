//! Derived views over the content collections
//!
//! Favorites are narrowed by the shared selection store; experience entries are
//! narrowed by the popover's local selection.

pub mod experience;
pub mod favorites;
pub mod popover;
pub mod tags;

pub use experience::{filter_experience, ExperienceSelection};
pub use favorites::{filter_favorites, FavoritesFilter};
pub use popover::{ExperiencePopover, KindToggle, PopoverRow};
pub use tags::TagPartition;
