//! Loading and validation of the content collections
//!
//! Each collection is a JSON array of records. Records are validated one by one
//! so errors can point at the offending record and field; any malformed record
//! fails the whole load.

use super::experience::{ExperienceEntry, ExperienceKind};
use super::favorite::{FavoriteItem, FavoriteType};
use crate::utils::datetime::parse_content_date;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: record {index} is malformed: {reason}", .path.display())]
    MalformedRecord { path: PathBuf, index: usize, reason: String },

    #[error("{}: record {index}: missing required field '{field}'", .path.display())]
    MissingField {
        path: PathBuf,
        index: usize,
        field: &'static str,
    },

    #[error("{}: record {index}: invalid '{field}': {reason}", .path.display())]
    InvalidField {
        path: PathBuf,
        index: usize,
        field: &'static str,
        reason: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFavorite {
    title: Option<String>,
    year: Option<i32>,
    favorite_type: Option<String>,
    image_id: Option<String>,
    description: Option<String>,
    slug: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExperience {
    company: Option<String>,
    position: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
}

/// Both collections, shared read-only with the UI
#[derive(Debug, Clone)]
pub struct Content {
    pub favorites: Rc<[FavoriteItem]>,
    pub experience: Rc<[ExperienceEntry]>,
}

impl Content {
    pub fn new(favorites: Vec<FavoriteItem>, experience: Vec<ExperienceEntry>) -> Self {
        Self {
            favorites: favorites.into(),
            experience: experience.into(),
        }
    }

    /// Load both collections; a missing file counts as an empty collection
    pub fn load(favorites_path: &Path, experience_path: &Path) -> Result<Self, ContentError> {
        let favorites = if favorites_path.exists() {
            load_favorites(favorites_path)?
        } else {
            log::warn!("Favorites file {} not found, starting empty", favorites_path.display());
            Vec::new()
        };

        let experience = if experience_path.exists() {
            load_experience(experience_path)?
        } else {
            log::warn!("Experience file {} not found, starting empty", experience_path.display());
            Vec::new()
        };

        log::info!(
            "Loaded {} favorites and {} experience entries",
            favorites.len(),
            experience.len()
        );
        Ok(Self::new(favorites, experience))
    }
}

pub fn load_favorites(path: &Path) -> Result<Vec<FavoriteItem>, ContentError> {
    let json = read_file(path)?;
    parse_favorites(&json, path)
}

pub fn load_experience(path: &Path) -> Result<Vec<ExperienceEntry>, ContentError> {
    let json = read_file(path)?;
    parse_experience(&json, path)
}

/// Parse a favorites collection; `origin` is only used in error messages
pub fn parse_favorites(json: &str, origin: &Path) -> Result<Vec<FavoriteItem>, ContentError> {
    let records: Vec<RawFavorite> = parse_records(json, origin)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let ctx = RecordContext { path: origin, index };
            let favorite_type = ctx.require(raw.favorite_type, "favoriteType")?;
            let favorite_type = favorite_type
                .parse::<FavoriteType>()
                .map_err(|e| ctx.invalid("favoriteType", e.to_string()))?;

            let image_id = ctx.require(raw.image_id, "imageId")?;
            if image_id.trim().is_empty() {
                return Err(ctx.invalid("imageId", "must not be empty".to_string()));
            }

            Ok(FavoriteItem {
                title: ctx.require(raw.title, "title")?,
                year: ctx.require(raw.year, "year")?,
                favorite_type,
                image_id,
                description: raw.description,
                slug: raw.slug,
            })
        })
        .collect()
}

/// Parse an experience collection; `origin` is only used in error messages
pub fn parse_experience(json: &str, origin: &Path) -> Result<Vec<ExperienceEntry>, ContentError> {
    let records: Vec<RawExperience> = parse_records(json, origin)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let ctx = RecordContext { path: origin, index };
            let kind = ctx
                .require(raw.kind, "type")?
                .parse::<ExperienceKind>()
                .map_err(|e| ctx.invalid("type", e.to_string()))?;

            let start_date = ctx.require(raw.start_date, "startDate")?;
            let start_date =
                parse_content_date(&start_date).map_err(|e| ctx.invalid("startDate", format!("{start_date}: {e}")))?;

            // An empty end date means the entry is still ongoing
            let end_date = match raw.end_date.filter(|d| !d.trim().is_empty()) {
                Some(end) => {
                    Some(parse_content_date(&end).map_err(|e| ctx.invalid("endDate", format!("{end}: {e}")))?)
                }
                None => None,
            };

            Ok(ExperienceEntry {
                company: ctx.require(raw.company, "company")?,
                position: ctx.require(raw.position, "position")?,
                kind,
                start_date,
                end_date,
                description: raw.description,
                tags: raw.tags.unwrap_or_default(),
            })
        })
        .collect()
}

fn read_file(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_records<T: serde::de::DeserializeOwned>(json: &str, origin: &Path) -> Result<Vec<T>, ContentError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json).map_err(|source| ContentError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| ContentError::MalformedRecord {
                path: origin.to_path_buf(),
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

struct RecordContext<'a> {
    path: &'a Path,
    index: usize,
}

impl RecordContext<'_> {
    fn require<T>(&self, value: Option<T>, field: &'static str) -> Result<T, ContentError> {
        value.ok_or_else(|| ContentError::MissingField {
            path: self.path.to_path_buf(),
            index: self.index,
            field,
        })
    }

    fn invalid(&self, field: &'static str, reason: String) -> ContentError {
        ContentError::InvalidField {
            path: self.path.to_path_buf(),
            index: self.index,
            field,
            reason,
        }
    }
}
