//! Constants used throughout the application
//!
//! This module centralizes UI text, fixed candidate lists and default values.

/// Years offered by the year selection, newest first
pub const YEARS: [&str; 6] = ["2024", "2023", "2022", "2021", "2020", "2019"];

// Headline text
pub const HEADLINE_PREFIX: &str = "some of my favorite";
pub const PLACEHOLDER_TYPE: &str = "things";
pub const PLACEHOLDER_YEAR: &str = "all time";
pub const CONNECTOR_YEAR_SET: &str = "from";
pub const CONNECTOR_YEAR_UNSET: &str = "of";

// Content
pub const FAVORITES_FILE: &str = "favorites.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const DEFAULT_CONTENT_DIR: &str = "content";

// Images
pub const DEFAULT_IMAGE_WIDTH: u32 = 1000;
pub const IMAGE_WIDTH_MIN: u32 = 100;
pub const IMAGE_WIDTH_MAX: u32 = 4000;
pub const CLOUDINARY_BASE_URL: &str = "https://res.cloudinary.com";

// Bookmark import
pub const BOOKMARK_PAGE_SIZE: u32 = 50;
pub const DEFAULT_BOOKMARK_OUTPUT: &str = "content/moodboard/raindrop-collection.json";
pub const ENV_BOOKMARK_ENDPOINT: &str = "RAINDROP_MULTIPLE_ENDPOINT";
pub const ENV_BOOKMARK_COLLECTION: &str = "RAINDROP_MOODBOARD_ID";
pub const ENV_BOOKMARK_TOKEN: &str = "RAINDROP_TOKEN";
pub const ENV_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const IMPORT_SAVED: &str = "✅ Saved bookmark collection";
pub const ERROR_NO_CLOUD_NAME: &str = "❌ Error: image host cloud name environment variable not set";

// Dialog titles
pub const DIALOG_TITLE_LOGS: &str = " Logs - Press 'Esc', 'G' or 'q' to close ";
pub const DIALOG_TITLE_HELP: &str = " Help - Press 'Esc' or '?' to close ";
pub const POPOVER_TITLE: &str = " filters ";
