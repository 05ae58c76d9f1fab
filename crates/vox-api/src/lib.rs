// SPDX-License-Identifier: BUSL-1.1
//! # vox-api — Axum API Service for the Vox Stack
//!
//! HTTP surface over the anonymous registration-and-voting protocol.
//!
//! ## API Surface
//!
//! | Prefix                       | Module                 | Domain                  |
//! |------------------------------|------------------------|-------------------------|
//! | `/v1/campaigns/*`            | [`routes::campaigns`]  | Campaigns, registration, voting |
//! | `/openapi.json`              | [`openapi`]            | API specification       |
//! | `/health/*`                  | (this module)          | Probes                  |
//!
//! No authentication layer: participation is anonymous by design, and
//! the single-use credential is the only token a vote requires.

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes (`/health/*`) are mounted outside the body-size limit
/// and carry no request body.
pub fn app(state: AppState) -> Router {
    // Body size limit: 256 KiB. Requests carry at most a campaign
    // definition or a proof bundle; anything larger is abuse.
    let api = Router::new()
        .merge(routes::campaigns::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(256 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let probes = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .with_state(state);

    Router::new().merge(probes).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the application is ready to serve traffic.
///
/// The in-memory store has no external dependency to check; the probe
/// confirms it is reachable.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let _ = state.store.len();
    (StatusCode::OK, "ready")
}
