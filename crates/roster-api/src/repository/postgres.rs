//! PostgreSQL persistence for players.
//!
//! All queries are parameterized and operate on the `players` table.
//! Driver failures are translated into the taxonomy here and nowhere else.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use roster_core::{Player, RosterError};
use sqlx::PgPool;
use uuid::Uuid;

use super::{page_window, PlayerRepository};

/// Postgres-backed implementation of [`PlayerRepository`].
///
/// The pool is optional: a repository constructed without one fails every
/// operation with [`RosterError::NotConnected`] before attempting any I/O,
/// which the API layer surfaces as 503.
#[derive(Debug, Clone)]
pub struct PostgresPlayerRepository {
    pool: Option<PgPool>,
}

impl PostgresPlayerRepository {
    /// Create a repository over a connected pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a repository with no connection handle.
    pub fn disconnected() -> Self {
        Self { pool: None }
    }

    fn pool(&self) -> Result<&PgPool, RosterError> {
        self.pool.as_ref().ok_or(RosterError::NotConnected)
    }
}

/// Translate a driver failure, carrying its message as context.
fn database_error(err: sqlx::Error) -> RosterError {
    RosterError::database(err.to_string())
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn create_player(&self, player: &Player) -> Result<(), RosterError> {
        let pool = self.pool()?;

        sqlx::query(
            "INSERT INTO players (id, name, sport, team, profile_image_url, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.sport)
        .bind(&player.team)
        .bind(&player.profile_image_url)
        .bind(player.created_at)
        .bind(player.updated_at)
        .execute(pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn get_player_by_id(&self, id: Uuid) -> Result<Player, RosterError> {
        let pool = self.pool()?;

        let row = sqlx::query_as::<_, PlayerRow>(
            "SELECT id, name, sport, team, profile_image_url, created_at, updated_at
             FROM players WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(database_error)?;

        row.map(PlayerRow::into_player)
            .ok_or_else(|| RosterError::not_found("player not found"))
    }

    async fn update_player(&self, player: &Player) -> Result<(), RosterError> {
        let pool = self.pool()?;

        let result = sqlx::query(
            "UPDATE players
             SET name = $1, sport = $2, team = $3, profile_image_url = $4, updated_at = $5
             WHERE id = $6",
        )
        .bind(&player.name)
        .bind(&player.sport)
        .bind(&player.team)
        .bind(&player.profile_image_url)
        .bind(player.updated_at)
        .bind(player.id)
        .execute(pool)
        .await
        .map_err(database_error)?;

        // Zero rows matched is not an error at this layer; callers that
        // need existence semantics fetch first.
        if result.rows_affected() == 0 {
            tracing::debug!(player_id = %player.id, "update matched no rows");
        }

        Ok(())
    }

    async fn delete_player(&self, id: Uuid) -> Result<(), RosterError> {
        let pool = self.pool()?;

        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!(player_id = %id, "delete matched no rows");
        }

        Ok(())
    }

    async fn get_players(&self) -> Result<Vec<Player>, RosterError> {
        let pool = self.pool()?;

        let rows = sqlx::query_as::<_, PlayerRow>(
            "SELECT id, name, sport, team, profile_image_url, created_at, updated_at
             FROM players ORDER BY created_at, id",
        )
        .fetch_all(pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(PlayerRow::into_player).collect())
    }

    async fn get_players_with_pagination(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Player>, RosterError> {
        let pool = self.pool()?;
        let (limit, offset) = page_window(page, page_size);

        let rows = sqlx::query_as::<_, PlayerRow>(
            "SELECT id, name, sport, team, profile_image_url, created_at, updated_at
             FROM players ORDER BY created_at, id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(PlayerRow::into_player).collect())
    }
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct PlayerRow {
    id: Uuid,
    name: String,
    sport: String,
    team: String,
    profile_image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlayerRow {
    fn into_player(self) -> Player {
        Player {
            id: self.id,
            name: self.name,
            sport: self.sport,
            team: self.team,
            profile_image_url: self.profile_image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
