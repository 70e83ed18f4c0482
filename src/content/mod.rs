//! Showcase content: favorites and experience entries
//!
//! Both collections are loaded once at startup and are read-only afterwards.

pub mod experience;
pub mod favorite;
pub mod loader;

pub use experience::{ExperienceEntry, ExperienceKind};
pub use favorite::{FavoriteItem, FavoriteType};
pub use loader::{Content, ContentError};
