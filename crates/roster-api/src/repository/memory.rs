//! In-memory player repository.
//!
//! A thread-safe stand-in implementing the same capability trait as the
//! Postgres repository, with matching semantics (not-found translation,
//! permissive update/delete, shared pagination normalization). Used by the
//! handler and service tests, and usable as a database-less mode.
//!
//! All operations are synchronous inside the lock (the RwLock is
//! `parking_lot`, not `tokio::sync`) because the lock is never held across
//! an `.await` point.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::{Player, RosterError};
use uuid::Uuid;

use super::{page_window, PlayerRepository};

/// In-memory implementation of [`PlayerRepository`].
///
/// Clone-friendly: clones share the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<HashMap<Uuid, Player>>>,
}

impl InMemoryPlayerRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of stored players.
    pub fn len(&self) -> usize {
        self.players.read().len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All players ordered by creation time, then id for a stable order
    /// when timestamps collide. Matches the Postgres `ORDER BY`.
    fn sorted(&self) -> Vec<Player> {
        let mut all: Vec<Player> = self.players.read().values().cloned().collect();
        all.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        all
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn create_player(&self, player: &Player) -> Result<(), RosterError> {
        self.players.write().insert(player.id, player.clone());
        Ok(())
    }

    async fn get_player_by_id(&self, id: Uuid) -> Result<Player, RosterError> {
        self.players
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| RosterError::not_found("player not found"))
    }

    async fn update_player(&self, player: &Player) -> Result<(), RosterError> {
        // Permissive on zero match, like the SQL UPDATE.
        if let Some(existing) = self.players.write().get_mut(&player.id) {
            *existing = player.clone();
        }
        Ok(())
    }

    async fn delete_player(&self, id: Uuid) -> Result<(), RosterError> {
        self.players.write().remove(&id);
        Ok(())
    }

    async fn get_players(&self) -> Result<Vec<Player>, RosterError> {
        Ok(self.sorted())
    }

    async fn get_players_with_pagination(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Player>, RosterError> {
        let (limit, offset) = page_window(page, page_size);
        Ok(self
            .sorted()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}
