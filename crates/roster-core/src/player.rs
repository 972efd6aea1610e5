//! # Player Entity
//!
//! The central domain entity. Construction and mutation both enforce the
//! required-field invariant: `name`, `sport`, and `team` are never empty
//! for a `Player` that exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::RosterError;

/// A player managed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    /// Unique identity, generated at construction and immutable thereafter.
    pub id: Uuid,
    /// Display name. Required, non-empty.
    pub name: String,
    /// Sport the player competes in. Required, non-empty.
    pub sport: String,
    /// Team the player belongs to. Required, non-empty.
    pub team: String,
    /// Optional URL of the player's profile image. Not validated as a URL.
    pub profile_image_url: Option<String>,
    /// When the player was created.
    pub created_at: DateTime<Utc>,
    /// When the player was last modified. Equals `created_at` until the
    /// first update.
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player with a fresh identity.
    ///
    /// Fails with [`RosterError::InvalidArgument`] naming the first missing
    /// field, checked in order: name, sport, team. Both timestamps are set
    /// to the construction instant.
    pub fn new(
        name: impl Into<String>,
        sport: impl Into<String>,
        team: impl Into<String>,
        profile_image_url: Option<String>,
    ) -> Result<Self, RosterError> {
        let name = name.into();
        let sport = sport.into();
        let team = team.into();
        validate_required(&name, &sport, &team)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            sport,
            team,
            profile_image_url,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the player's mutable fields, re-stamping `updated_at`.
    ///
    /// Enforces the same required-field invariant as [`Player::new`]. The
    /// identity and `created_at` are untouched. On validation failure the
    /// player is left unmodified.
    pub fn apply_update(
        &mut self,
        name: impl Into<String>,
        sport: impl Into<String>,
        team: impl Into<String>,
        profile_image_url: Option<String>,
    ) -> Result<(), RosterError> {
        let name = name.into();
        let sport = sport.into();
        let team = team.into();
        validate_required(&name, &sport, &team)?;

        self.name = name;
        self.sport = sport;
        self.team = team;
        self.profile_image_url = profile_image_url;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Check the required-field invariant, reporting the first empty field.
fn validate_required(name: &str, sport: &str, team: &str) -> Result<(), RosterError> {
    if name.is_empty() {
        return Err(RosterError::invalid_argument("name"));
    }
    if sport.is_empty() {
        return Err(RosterError::invalid_argument("sport"));
    }
    if team.is_empty() {
        return Err(RosterError::invalid_argument("team"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_player() -> Player {
        Player::new("Lionel Messi", "Football", "Inter Miami", None).unwrap()
    }

    #[test]
    fn new_player_sets_all_fields() {
        let player = Player::new(
            "Lionel Messi",
            "Football",
            "Inter Miami",
            Some("https://example.com/messi.jpg".to_string()),
        )
        .unwrap();

        assert!(!player.id.is_nil());
        assert_eq!(player.name, "Lionel Messi");
        assert_eq!(player.sport, "Football");
        assert_eq!(player.team, "Inter Miami");
        assert_eq!(
            player.profile_image_url.as_deref(),
            Some("https://example.com/messi.jpg")
        );
        assert_eq!(player.created_at, player.updated_at);
    }

    #[test]
    fn new_player_identities_are_unique() {
        let a = valid_player();
        let b = valid_player();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_player_rejects_empty_name() {
        let err = Player::new("", "Football", "Inter Miami", None).unwrap_err();
        assert_eq!(err, RosterError::invalid_argument("name"));
    }

    #[test]
    fn new_player_rejects_empty_sport() {
        let err = Player::new("Lionel Messi", "", "Inter Miami", None).unwrap_err();
        assert_eq!(err, RosterError::invalid_argument("sport"));
    }

    #[test]
    fn new_player_rejects_empty_team() {
        let err = Player::new("Lionel Messi", "Football", "", None).unwrap_err();
        assert_eq!(err, RosterError::invalid_argument("team"));
    }

    #[test]
    fn new_player_reports_first_missing_field() {
        // name is checked before sport, sport before team.
        let err = Player::new("", "", "", None).unwrap_err();
        assert_eq!(err, RosterError::invalid_argument("name"));

        let err = Player::new("Lionel Messi", "", "", None).unwrap_err();
        assert_eq!(err, RosterError::invalid_argument("sport"));
    }

    #[test]
    fn new_player_allows_absent_image_url() {
        let player = valid_player();
        assert!(player.profile_image_url.is_none());
    }

    #[test]
    fn apply_update_replaces_fields_and_restamps() {
        let mut player = valid_player();
        let created_at = player.created_at;

        player
            .apply_update(
                "Leo Messi",
                "Soccer",
                "Barcelona",
                Some("https://example.com/new.jpg".to_string()),
            )
            .unwrap();

        assert_eq!(player.name, "Leo Messi");
        assert_eq!(player.sport, "Soccer");
        assert_eq!(player.team, "Barcelona");
        assert_eq!(player.created_at, created_at);
        assert!(player.updated_at >= created_at);
    }

    #[test]
    fn apply_update_rejects_empty_fields_without_mutating() {
        let mut player = valid_player();
        let before = player.clone();

        let err = player
            .apply_update("", "Soccer", "Barcelona", None)
            .unwrap_err();
        assert_eq!(err, RosterError::invalid_argument("name"));
        assert_eq!(player, before);
    }

    #[test]
    fn player_serializes_with_snake_case_fields() {
        let player = valid_player();
        let json = serde_json::to_value(&player).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("profile_image_url").is_some());
        assert!(json.get("created_at").is_some());
        assert!(json.get("updated_at").is_some());
    }
}
