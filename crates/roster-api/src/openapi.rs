//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Player management service: player CRUD with paginated listing, linked descriptions and media.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::players::create_player,
        crate::routes::players::list_players,
        crate::routes::players::get_player,
        crate::routes::players::update_player,
        crate::routes::players::delete_player,
    ),
    components(schemas(
        // Domain entities
        roster_core::Player,
        roster_core::PlayerDescription,
        roster_core::Media,
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        // Player DTOs
        crate::routes::players::CreatePlayerRequest,
        crate::routes::players::UpdatePlayerRequest,
    )),
    tags(
        (name = "players", description = "Player management API"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
