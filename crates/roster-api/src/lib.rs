//! # roster-api — Axum API Service for Roster
//!
//! The HTTP layer over the player domain: request parsing and validation,
//! service orchestration, PostgreSQL persistence via SQLx, and uniform
//! error mapping through the [`roster_core::RosterError`] taxonomy.
//!
//! ## API Surface
//!
//! | Route                  | Module               | Operation            |
//! |------------------------|----------------------|----------------------|
//! | `POST /players`        | [`routes::players`]  | Create player        |
//! | `GET /players`         | [`routes::players`]  | List with pagination |
//! | `GET /players/:id`     | [`routes::players`]  | Get by ID            |
//! | `PUT /players/:id`     | [`routes::players`]  | Update player        |
//! | `DELETE /players/:id`  | [`routes::players`]  | Delete player        |
//! | `GET /openapi.json`    | [`openapi`]          | OpenAPI spec         |
//! | `GET /health/*`        | (here)               | Probes               |
//!
//! ## Layering
//!
//! ```text
//! handler → service → repository → PostgreSQL
//! ```
//!
//! Each layer maps errors at most once: the repository translates driver
//! errors into the taxonomy, the handler maps taxonomy kinds to transport
//! statuses. The service is a pass-through seam for future cross-cutting
//! concerns.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes (`/health/*`) are mounted outside the API router so they
/// stay reachable regardless of API-level middleware.
pub fn app(state: AppState) -> Router {
    // Body size limit: 2 MiB. Player payloads are tiny; anything larger
    // is not a legitimate request.
    let api = Router::new()
        .merge(routes::players::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
