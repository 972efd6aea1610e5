//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Holds the player service behind its capability
//! trait so the storage and orchestration layers can be substituted
//! independently in tests.

use std::sync::Arc;

use crate::repository::InMemoryPlayerRepository;
use crate::service::{PlayerService, PlayerServiceImpl};

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: the service is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The player service all handlers delegate to.
    pub players: Arc<dyn PlayerService>,
}

impl AppState {
    /// Create application state over the given service.
    pub fn new(players: Arc<dyn PlayerService>) -> Self {
        Self { players }
    }

    /// State backed by the in-memory repository. Used by tests and by
    /// database-less development setups.
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        Self::new(Arc::new(PlayerServiceImpl::new(repo)))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::Player;

    #[tokio::test]
    async fn in_memory_state_starts_empty() {
        let state = AppState::in_memory();
        assert!(state.players.get_players().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn in_memory_state_is_usable_through_the_service() {
        let state = AppState::in_memory();
        let player = Player::new("Alice", "Football", "Test FC", None).unwrap();

        state.players.create_player(&player).await.unwrap();
        let fetched = state.players.get_player_by_id(player.id).await.unwrap();
        assert_eq!(fetched, player);
    }
}
