//! Free-text descriptions attached to players.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A free-text description of a player.
///
/// Holds a foreign reference to the player it describes. Referential
/// integrity is enforced only by the storage layer's foreign key — no
/// in-memory ownership graph is maintained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDescription {
    /// Unique identity.
    pub id: Uuid,
    /// The player this description belongs to.
    pub player_id: Uuid,
    /// Free-text content.
    pub content: String,
    /// When the description was created.
    pub created_at: DateTime<Utc>,
    /// When the description was last modified.
    pub updated_at: DateTime<Utc>,
}

impl PlayerDescription {
    /// Create a new description for the given player.
    pub fn new(player_id: Uuid, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            player_id,
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_description_references_player() {
        let player_id = Uuid::new_v4();
        let description = PlayerDescription::new(player_id, "A prolific forward.");

        assert!(!description.id.is_nil());
        assert_eq!(description.player_id, player_id);
        assert_eq!(description.content, "A prolific forward.");
        assert_eq!(description.created_at, description.updated_at);
    }
}
