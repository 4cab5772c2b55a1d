//! News announcement entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A news announcement shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Unique identifier.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Article body.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Publication timestamp.
    pub published_at: DateTime<Utc>,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl NewsArticle {
    /// Creates a new article, published immediately.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            author: author.into(),
            image_url: None,
            published_at: now,
            created_at: now,
        }
    }

    /// Sets the cover image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
