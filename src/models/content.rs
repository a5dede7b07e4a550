use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::users::User;

/// Catalog categories, serialized as lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Project,
    Portfolio,
    Website,
    Phd,
    Custom,
}

impl Category {
    /// Badge label shown on content cards.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Project => "Project",
            Category::Portfolio => "Portfolio",
            Category::Website => "Website",
            Category::Phd => "PhD Research",
            Category::Custom => "Custom Work",
        }
    }
}

/// Moderation status of a listing. Only approved content is expected to
/// surface in buyer-facing catalog views; enforcement lives with the
/// backend, not this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Pending,
    Approved,
    Rejected,
}

/// A purchasable catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub seller_id: Uuid,
    pub seller_name: String,
    pub category: Category,
    pub price: f64,
    pub preview_images: Vec<String>,
    /// Ordered as supplied by the seller; cards show only the first few.
    pub tags: Vec<String>,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    /// Build a seller upload from form input. New uploads start pending
    /// moderation and only surface in the marketplace once approved.
    pub fn new_upload(seller: &User, input: CreateContent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            seller_id: seller.id,
            seller_name: seller.name.clone(),
            category: input.category,
            price: input.price,
            preview_images: input.preview_images,
            tags: input.tags,
            rating: None,
            review_count: None,
            status: ContentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Tags as shown on a card: the stored order, truncated.
    pub fn display_tags(&self, limit: usize) -> &[String] {
        &self.tags[..self.tags.len().min(limit)]
    }
}

/// Sort options for the marketplace listing, matching the UI's sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogSort {
    Newest,
    PriceLow,
    PriceHigh,
    Rating,
}

// ── DTOs ──

/// Input for a seller upload; id, status and timestamps are assigned on
/// creation (new uploads start out pending moderation).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContent {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: f64,
    #[serde(default)]
    pub preview_images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
