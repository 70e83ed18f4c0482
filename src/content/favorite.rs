use std::fmt;
use std::str::FromStr;

/// Category of a favorite item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FavoriteType {
    Games,
    Meals,
    Memories,
    Movies,
    Music,
    Purchases,
    Reads,
    Shows,
    Sneakers,
    Songs,
}

impl FavoriteType {
    /// Every type, in enumeration order
    pub const ALL: [FavoriteType; 10] = [
        FavoriteType::Games,
        FavoriteType::Meals,
        FavoriteType::Memories,
        FavoriteType::Movies,
        FavoriteType::Music,
        FavoriteType::Purchases,
        FavoriteType::Reads,
        FavoriteType::Shows,
        FavoriteType::Sneakers,
        FavoriteType::Songs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteType::Games => "GAMES",
            FavoriteType::Meals => "MEALS",
            FavoriteType::Memories => "MEMORIES",
            FavoriteType::Movies => "MOVIES",
            FavoriteType::Music => "MUSIC",
            FavoriteType::Purchases => "PURCHASES",
            FavoriteType::Reads => "READS",
            FavoriteType::Shows => "SHOWS",
            FavoriteType::Sneakers => "SNEAKERS",
            FavoriteType::Songs => "SONGS",
        }
    }

    /// Lower-cased name, the form offered by the type selection
    pub fn option_value(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for FavoriteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no favorite type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown favorite type '{0}'")]
pub struct UnknownFavoriteType(pub String);

impl FromStr for FavoriteType {
    type Err = UnknownFavoriteType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FavoriteType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownFavoriteType(s.to_string()))
    }
}

/// A single showcased item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteItem {
    pub title: String,
    pub year: i32,
    pub favorite_type: FavoriteType,
    /// Opaque id understood by the image host
    pub image_id: String,
    pub description: Option<String>,
    pub slug: Option<String>,
}

impl FavoriteItem {
    pub fn new(title: impl Into<String>, year: i32, favorite_type: FavoriteType, image_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year,
            favorite_type,
            image_id: image_id.into(),
            description: None,
            slug: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this item belongs to the selected type value (case-insensitive)
    pub fn matches_type(&self, selected: &str) -> bool {
        self.favorite_type.as_str().eq_ignore_ascii_case(selected.trim())
    }

    /// Whether this item is from the selected year value
    pub fn matches_year(&self, selected: &str) -> bool {
        selected.trim().parse::<i32>().map(|year| year == self.year).unwrap_or(false)
    }
}
