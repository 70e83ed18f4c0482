//! Core UI functionality for Memorabilia.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions routed through the component hierarchy
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//!
//! Components turn input into [`Action`]s; the app component passes every
//! action through each child's `update` and handles whatever comes back.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, View};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
