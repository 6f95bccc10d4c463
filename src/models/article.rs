use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use super::BodyBlock;

/// Full article record, fetched only for the single-article page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub tags: Vec<String>,
    /// Publication channels this article is tagged into.
    pub channels: Vec<String>,
    pub author: Option<String>,
    pub main_image_url: String,
    pub main_image_alt: String,
    pub body: Json<Vec<BodyBlock>>,
    pub published_at: DateTime<Utc>,
}

/// Listing projection: everything a card needs, no body.
///
/// `excerpt` is computed store-side from the first text run of the first
/// body block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ArticleSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub subcategory: Option<String>,
    pub author: Option<String>,
    pub main_image_url: String,
    pub main_image_alt: String,
    pub excerpt: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Projection for the related-articles rail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RelatedArticle {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub main_image_url: String,
    pub main_image_alt: String,
}
