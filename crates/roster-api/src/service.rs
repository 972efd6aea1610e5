//! # Player Service
//!
//! Orchestration layer between the HTTP handlers and the repository.
//! Today it delegates 1:1; it exists as the explicit seam where future
//! cross-cutting concerns (authorization, caching, multi-step business
//! rules) attach without touching the repository or handler contracts.
//!
//! Errors pass through untranslated: the repository already speaks the
//! taxonomy.

use std::sync::Arc;

use async_trait::async_trait;
use roster_core::{Player, RosterError};
use uuid::Uuid;

use crate::repository::PlayerRepository;

/// Orchestration capability for players. Mirrors the repository contract.
#[async_trait]
pub trait PlayerService: Send + Sync {
    /// Create a new player.
    async fn create_player(&self, player: &Player) -> Result<(), RosterError>;
    /// Retrieve a player by identity.
    async fn get_player_by_id(&self, id: Uuid) -> Result<Player, RosterError>;
    /// Update an existing player.
    async fn update_player(&self, player: &Player) -> Result<(), RosterError>;
    /// Delete a player by identity.
    async fn delete_player(&self, id: Uuid) -> Result<(), RosterError>;
    /// Retrieve all players.
    async fn get_players(&self) -> Result<Vec<Player>, RosterError>;
    /// Retrieve one page of players.
    async fn get_players_with_pagination(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Player>, RosterError>;
}

/// Pass-through implementation of [`PlayerService`].
pub struct PlayerServiceImpl {
    repo: Arc<dyn PlayerRepository>,
}

impl PlayerServiceImpl {
    /// Create a service over the given repository.
    pub fn new(repo: Arc<dyn PlayerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PlayerService for PlayerServiceImpl {
    async fn create_player(&self, player: &Player) -> Result<(), RosterError> {
        self.repo.create_player(player).await
    }

    async fn get_player_by_id(&self, id: Uuid) -> Result<Player, RosterError> {
        self.repo.get_player_by_id(id).await
    }

    async fn update_player(&self, player: &Player) -> Result<(), RosterError> {
        self.repo.update_player(player).await
    }

    async fn delete_player(&self, id: Uuid) -> Result<(), RosterError> {
        self.repo.delete_player(id).await
    }

    async fn get_players(&self) -> Result<Vec<Player>, RosterError> {
        self.repo.get_players().await
    }

    async fn get_players_with_pagination(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Player>, RosterError> {
        self.repo.get_players_with_pagination(page, page_size).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryPlayerRepository;

    /// Stand-in repository that fails every operation, proving the service
    /// propagates repository errors without translation.
    struct FailingRepository;

    #[async_trait]
    impl PlayerRepository for FailingRepository {
        async fn create_player(&self, _player: &Player) -> Result<(), RosterError> {
            Err(RosterError::NotConnected)
        }

        async fn get_player_by_id(&self, _id: Uuid) -> Result<Player, RosterError> {
            Err(RosterError::database("simulated failure"))
        }

        async fn update_player(&self, _player: &Player) -> Result<(), RosterError> {
            Err(RosterError::NotConnected)
        }

        async fn delete_player(&self, _id: Uuid) -> Result<(), RosterError> {
            Err(RosterError::NotConnected)
        }

        async fn get_players(&self) -> Result<Vec<Player>, RosterError> {
            Err(RosterError::database("simulated failure"))
        }

        async fn get_players_with_pagination(
            &self,
            _page: i64,
            _page_size: i64,
        ) -> Result<Vec<Player>, RosterError> {
            Err(RosterError::database("simulated failure"))
        }
    }

    fn player(name: &str) -> Player {
        Player::new(name, "Football", "Test FC", None).unwrap()
    }

    #[tokio::test]
    async fn service_delegates_crud_to_repository() {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        let service = PlayerServiceImpl::new(repo.clone());

        let p = player("Alice");
        service.create_player(&p).await.unwrap();
        assert_eq!(repo.len(), 1);

        let fetched = service.get_player_by_id(p.id).await.unwrap();
        assert_eq!(fetched, p);

        service.delete_player(p.id).await.unwrap();
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn service_delegates_listing() {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        let service = PlayerServiceImpl::new(repo);

        for i in 0..3 {
            service.create_player(&player(&format!("Player {i}"))).await.unwrap();
        }

        assert_eq!(service.get_players().await.unwrap().len(), 3);
        assert_eq!(
            service.get_players_with_pagination(1, 2).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn service_propagates_repository_errors_untranslated() {
        let service = PlayerServiceImpl::new(Arc::new(FailingRepository));

        assert_eq!(
            service.create_player(&player("Alice")).await.unwrap_err(),
            RosterError::NotConnected
        );
        assert_eq!(
            service.get_player_by_id(Uuid::new_v4()).await.unwrap_err(),
            RosterError::database("simulated failure")
        );
    }
}
