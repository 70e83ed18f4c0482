//! Configuration management for Memorabilia
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Secrets never live in the file: the config only names the environment
//! variables that hold them.

use crate::constants::{
    BOOKMARK_PAGE_SIZE, CONFIG_GENERATED, DEFAULT_BOOKMARK_OUTPUT, DEFAULT_CONTENT_DIR, DEFAULT_IMAGE_WIDTH,
    ENV_BOOKMARK_COLLECTION, ENV_BOOKMARK_ENDPOINT, ENV_BOOKMARK_TOKEN, ENV_CLOUD_NAME, HEADLINE_PREFIX,
    IMAGE_WIDTH_MAX, IMAGE_WIDTH_MIN,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub content: ContentConfig,
    pub images: ImagesConfig,
    pub bookmarks: BookmarksConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// View shown on startup
    /// Options: "favorites", "experience"
    pub start_view: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Text in front of the type selector in the headline
    pub headline_prefix: String,
}

/// Content source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding favorites.json and experience.json
    pub directory: PathBuf,
}

/// Image host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Environment variable holding the image host cloud name
    pub cloud_name_env: String,
    /// Width of the scaled rendition in pixels
    pub width: u32,
}

/// Bookmark import configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarksConfig {
    /// Environment variable holding the "multiple raindrops" endpoint
    pub endpoint_env: String,
    /// Environment variable holding the collection id
    pub collection_id_env: String,
    /// Environment variable holding the bearer token
    pub token_env: String,
    /// Items requested per page
    pub page_size: u32,
    /// Where the collected bookmarks are written
    pub output_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_view: "favorites".to_string(),
            mouse_enabled: true,
            headline_prefix: HEADLINE_PREFIX.to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_CONTENT_DIR),
        }
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            cloud_name_env: ENV_CLOUD_NAME.to_string(),
            width: DEFAULT_IMAGE_WIDTH,
        }
    }
}

impl Default for BookmarksConfig {
    fn default() -> Self {
        Self {
            endpoint_env: ENV_BOOKMARK_ENDPOINT.to_string(),
            collection_id_env: ENV_BOOKMARK_COLLECTION.to_string(),
            token_env: ENV_BOOKMARK_TOKEN.to_string(),
            page_size: BOOKMARK_PAGE_SIZE,
            output_path: PathBuf::from(DEFAULT_BOOKMARK_OUTPUT),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("memorabilia.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("memorabilia").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_views = ["favorites", "experience"];
        if !valid_views.contains(&self.ui.start_view.as_str()) {
            anyhow::bail!(
                "start_view must be one of {}, got '{}'",
                valid_views.join(", "),
                self.ui.start_view
            );
        }

        if self.images.width < IMAGE_WIDTH_MIN || self.images.width > IMAGE_WIDTH_MAX {
            anyhow::bail!(
                "images.width must be between {} and {} pixels, got {}",
                IMAGE_WIDTH_MIN,
                IMAGE_WIDTH_MAX,
                self.images.width
            );
        }

        if self.bookmarks.page_size == 0 || self.bookmarks.page_size > BOOKMARK_PAGE_SIZE {
            anyhow::bail!(
                "bookmarks.page_size must be between 1 and {}, got {}",
                BOOKMARK_PAGE_SIZE,
                self.bookmarks.page_size
            );
        }

        let env_names = [
            ("images.cloud_name_env", &self.images.cloud_name_env),
            ("bookmarks.endpoint_env", &self.bookmarks.endpoint_env),
            ("bookmarks.collection_id_env", &self.bookmarks.collection_id_env),
            ("bookmarks.token_env", &self.bookmarks.token_env),
        ];
        for (field, name) in env_names {
            if name.trim().is_empty() {
                anyhow::bail!("{} cannot be empty", field);
            }
        }

        if self.bookmarks.output_path.as_os_str().is_empty() {
            anyhow::bail!("bookmarks.output_path cannot be empty");
        }

        Ok(())
    }

    /// Path of the favorites collection file
    pub fn favorites_path(&self) -> PathBuf {
        self.content.directory.join(crate::constants::FAVORITES_FILE)
    }

    /// Path of the experience collection file
    pub fn experience_path(&self) -> PathBuf {
        self.content.directory.join(crate::constants::EXPERIENCE_FILE)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Memorabilia Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::CONTENT_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("memorabilia"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
