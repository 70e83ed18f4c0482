//! Projection of the filtered favorites into display cards

use crate::content::{FavoriteItem, FavoriteType};
use crate::images::ImageHost;

/// Everything a card needs to be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteCard {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub year: i32,
    pub favorite_type: FavoriteType,
}

impl FavoriteCard {
    pub fn from_item(item: &FavoriteItem, host: &dyn ImageHost) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            image_url: host.url(&item.image_id),
            year: item.year,
            favorite_type: item.favorite_type,
        }
    }

    /// Short caption under the title, e.g. "sneakers · 2023"
    pub fn caption(&self) -> String {
        format!("{} · {}", self.favorite_type.option_value(), self.year)
    }
}

/// One card per item, same order
pub fn project_cards<'a, I>(items: I, host: &dyn ImageHost) -> Vec<FavoriteCard>
where
    I: IntoIterator<Item = &'a FavoriteItem>,
{
    items.into_iter().map(|item| FavoriteCard::from_item(item, host)).collect()
}
