//! # Player API
//!
//! Handles player CRUD and paginated listing.
//!
//! ## Endpoints
//!
//! - `POST /players` — create player
//! - `GET /players` — list players with pagination
//! - `GET /players/:id` — get player
//! - `PUT /players/:id` — update player
//! - `DELETE /players/:id` — delete player
//!
//! Handlers parse and validate input, call the service, and map failures
//! through the taxonomy status function — they never inspect storage
//! error types.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use roster_core::{Player, RosterError};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;
use crate::extractors::extract_json;
use crate::repository::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::state::AppState;

// ── Request DTOs ────────────────────────────────────────────────────

/// Request to create a new player.
///
/// Fields default to empty so that an absent required field reaches the
/// domain constructor, which reports it by name.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlayerRequest {
    /// Player name. Required.
    #[serde(default)]
    pub name: String,
    /// Sport the player competes in. Required.
    #[serde(default)]
    pub sport: String,
    /// Team the player belongs to. Required.
    #[serde(default)]
    pub team: String,
    /// Optional profile image URL.
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Request to update an existing player. All mutable fields are replaced.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePlayerRequest {
    /// Updated name. Required.
    #[serde(default)]
    pub name: String,
    /// Updated sport. Required.
    #[serde(default)]
    pub sport: String,
    /// Updated team. Required.
    #[serde(default)]
    pub team: String,
    /// Updated profile image URL.
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Pagination query parameters.
///
/// Carried as raw strings so that unparseable values fall back to the
/// defaults instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number (default: 1).
    pub page: Option<String>,
    /// Page size (default: 10).
    pub size: Option<String>,
}

impl PaginationParams {
    fn effective_page(&self) -> i64 {
        parse_positive(self.page.as_deref(), DEFAULT_PAGE)
    }

    fn effective_size(&self) -> i64 {
        parse_positive(self.size.as_deref(), DEFAULT_PAGE_SIZE)
    }
}

/// Parse a positive integer, falling back to the default on absence,
/// parse failure, or a non-positive value.
fn parse_positive(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// Parse a path segment as a player identity.
fn parse_player_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError(RosterError::invalid_argument("Invalid player ID")))
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the players router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route(
            "/players/:id",
            get(get_player).put(update_player).delete(delete_player),
        )
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /players — Create a new player.
#[utoipa::path(
    post,
    path = "/players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created", body = Player),
        (status = 400, description = "Invalid body or missing required field", body = crate::error::ErrorBody),
    ),
    tag = "players"
)]
pub(crate) async fn create_player(
    State(state): State<AppState>,
    body: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let req = extract_json(body)?;
    let player = Player::new(req.name, req.sport, req.team, req.profile_image_url)?;

    state.players.create_player(&player).await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /players/:id — Get a player.
#[utoipa::path(
    get,
    path = "/players/{id}",
    params(("id" = String, Path, description = "Player ID (UUID)")),
    responses(
        (status = 200, description = "Player found", body = Player),
        (status = 400, description = "Malformed player ID", body = crate::error::ErrorBody),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "players"
)]
pub(crate) async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_player_id(&id)?;
    let player = state.players.get_player_by_id(id).await?;
    Ok(Json(player))
}

/// GET /players — List players with pagination.
#[utoipa::path(
    get,
    path = "/players",
    params(
        ("page" = Option<String>, Query, description = "1-based page number (default 1)"),
        ("size" = Option<String>, Query, description = "Page size (default 10)"),
    ),
    responses(
        (status = 200, description = "One page of players", body = Vec<Player>),
    ),
    tag = "players"
)]
pub(crate) async fn list_players(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = state
        .players
        .get_players_with_pagination(pagination.effective_page(), pagination.effective_size())
        .await?;
    Ok(Json(players))
}

/// PUT /players/:id — Update a player.
///
/// Fetches first so that updating a missing player surfaces 404, then
/// replaces the mutable fields and re-stamps `updated_at` via the domain
/// mutation.
#[utoipa::path(
    put,
    path = "/players/{id}",
    params(("id" = String, Path, description = "Player ID (UUID)")),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Player updated", body = Player),
        (status = 400, description = "Invalid body or missing required field", body = crate::error::ErrorBody),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "players"
)]
pub(crate) async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePlayerRequest>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_player_id(&id)?;
    let req = extract_json(body)?;

    let mut player = state.players.get_player_by_id(id).await?;
    player.apply_update(req.name, req.sport, req.team, req.profile_image_url)?;

    state.players.update_player(&player).await?;

    Ok(Json(player))
}

/// DELETE /players/:id — Delete a player.
///
/// Hard delete by identity; deleting an absent player is still 204
/// (repository permissiveness).
#[utoipa::path(
    delete,
    path = "/players/{id}",
    params(("id" = String, Path, description = "Player ID (UUID)")),
    responses(
        (status = 204, description = "Player deleted"),
        (status = 400, description = "Malformed player ID", body = crate::error::ErrorBody),
    ),
    tag = "players"
)]
pub(crate) async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_player_id(&id)?;
    state.players.delete_player(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positive_accepts_positive_integers() {
        assert_eq!(parse_positive(Some("3"), 1), 3);
        assert_eq!(parse_positive(Some("25"), 10), 25);
    }

    #[test]
    fn parse_positive_falls_back_on_absence() {
        assert_eq!(parse_positive(None, 10), 10);
    }

    #[test]
    fn parse_positive_falls_back_on_garbage() {
        assert_eq!(parse_positive(Some("abc"), 10), 10);
        assert_eq!(parse_positive(Some(""), 10), 10);
        assert_eq!(parse_positive(Some("1.5"), 10), 10);
    }

    #[test]
    fn parse_positive_falls_back_on_non_positive() {
        assert_eq!(parse_positive(Some("0"), 1), 1);
        assert_eq!(parse_positive(Some("-1"), 10), 10);
    }

    #[test]
    fn pagination_params_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.effective_page(), DEFAULT_PAGE);
        assert_eq!(params.effective_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn parse_player_id_rejects_garbage() {
        assert!(parse_player_id("not-a-uuid").is_err());
        let id = Uuid::new_v4();
        assert_eq!(parse_player_id(&id.to_string()).unwrap(), id);
    }
}
