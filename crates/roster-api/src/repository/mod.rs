//! # Player Persistence
//!
//! The repository is the single translation point between storage-specific
//! failure signals and the [`RosterError`] taxonomy: every other layer only
//! ever sees taxonomy errors or success.
//!
//! Two implementations of the capability trait:
//!
//! - [`PostgresPlayerRepository`] — SQLx-backed persistence against the
//!   `players` table.
//! - [`InMemoryPlayerRepository`] — thread-safe in-memory stand-in for
//!   tests and database-less development.

use async_trait::async_trait;
use roster_core::{Player, RosterError};
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryPlayerRepository;
pub use postgres::PostgresPlayerRepository;

/// Default page number when pagination input is absent or invalid.
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size when pagination input is absent or invalid.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Persistence capability for players: CRUD plus paginated listing.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Insert a full player row.
    async fn create_player(&self, player: &Player) -> Result<(), RosterError>;

    /// Fetch a player by identity. Fails `NotFound` when zero rows match.
    async fn get_player_by_id(&self, id: Uuid) -> Result<Player, RosterError>;

    /// Update all mutable fields plus `updated_at` by identity.
    ///
    /// Zero rows matched is not an error; callers that need to distinguish
    /// existence fetch first.
    async fn update_player(&self, player: &Player) -> Result<(), RosterError>;

    /// Delete by identity. Zero rows matched is not an error.
    async fn delete_player(&self, id: Uuid) -> Result<(), RosterError>;

    /// List all players. Returns an empty vec, not an error, when no rows
    /// match.
    async fn get_players(&self) -> Result<Vec<Player>, RosterError>;

    /// List one page of players. Values ≤ 0 reset to the defaults
    /// (page=1, page_size=10).
    async fn get_players_with_pagination(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Player>, RosterError>;
}

/// Normalize pagination input into a `(limit, offset)` window.
///
/// Any value ≤ 0 resets to its default; `offset = (page - 1) × page_size`.
/// Shared by all repository implementations so they paginate identically.
pub(crate) fn page_window(page: i64, page_size: i64) -> (i64, i64) {
    let page = if page <= 0 { DEFAULT_PAGE } else { page };
    let page_size = if page_size <= 0 { DEFAULT_PAGE_SIZE } else { page_size };
    (page_size, (page - 1) * page_size)
}
