//! Media items (articles, clips, interviews) linked to players.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A media item related to a player.
///
/// Like [`crate::PlayerDescription`], this is a stored row linked by a
/// storage-layer foreign key; the service applies no business rules to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Media {
    /// Unique identity.
    pub id: Uuid,
    /// The player this media item is about.
    pub player_id: Uuid,
    /// Where the media originated (publication, channel, ...).
    pub source: String,
    /// Link to the media item.
    pub url: String,
    /// Headline or title.
    pub title: String,
    /// Body text or transcript.
    pub content: String,
    /// When the item was published by its source.
    pub published_at: DateTime<Utc>,
    /// Link to a thumbnail image.
    pub thumbnail_url: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Media {
    /// Create a new media item for the given player.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player_id: Uuid,
        source: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        published_at: DateTime<Utc>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            player_id,
            source: source.into(),
            url: url.into(),
            title: title.into(),
            content: content.into(),
            published_at,
            thumbnail_url: thumbnail_url.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
