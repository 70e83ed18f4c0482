//! Memorabilia - a terminal showcase of favorite things and experience
//!
//! A favorites collection and an experience timeline are browsed through a
//! small set of shared selections (favorite type, year) and a tag popover.
//! Several independent widgets read and write the same selection store; the
//! favorites view is re-derived synchronously on every change.
//!
//! # Modules
//!
//! * [`store`] - Shared reactive selection state
//! * [`options`] - Candidate values per selection
//! * [`selection`] - The single selection dialog state machine
//! * [`filter`] - Favorites and experience filtering
//! * [`content`] - Content records and loading
//! * [`import`] - One-shot bookmark import
//! * [`ui`] - Terminal user interface components and rendering

/// Command line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Favorites and experience records, loaded from JSON
pub mod content;

/// Derived views over the content collections
pub mod filter;

/// Image host URLs for favorite cards
pub mod images;

/// Bookmark collection import
pub mod import;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Candidate lists for each selection
pub mod options;

/// Card projection of the filtered favorites
pub mod render;

/// Selection dialog state machine
pub mod selection;

/// Shared selection store
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

pub use content::{Content, ExperienceEntry, ExperienceKind, FavoriteItem, FavoriteType};
pub use store::{SelectionKey, SelectionStore};
