//! Utility modules for the Memorabilia application.
//!
//! - [`datetime`] - Parsing and formatting of content dates

pub mod datetime;
