// SPDX-License-Identifier: BUSL-1.1
//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vox API — Anonymous Campaign Voting",
        version = "0.1.0",
        description = "Time-boxed campaigns with anonymous, single-use voting credentials.\n\nProvides:\n- **Campaign lifecycle** — creation with a fixed ballot and a strict registration-then-voting timeline\n- **Eligibility restrictions** — optional age, country, and whitelist checks backed by zero-knowledge proof verification; the server learns only pass/fail\n- **Anonymous registration** — a successful check mints a single-use credential; only its commitment hash is stored\n- **Exactly-once voting** — each credential is consumed atomically on first redemption\n\nNo authentication: anonymity is the point. Voting integrity rests on credential possession, not identity.",
        license(name = "BUSL-1.1")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::campaigns::create_campaign,
        crate::routes::campaigns::list_campaigns,
        crate::routes::campaigns::get_campaign,
        crate::routes::campaigns::register,
        crate::routes::campaigns::vote,
    ),
    components(
        schemas(
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
            crate::routes::campaigns::RestrictionsDto,
            crate::routes::campaigns::CreateCampaignRequest,
            crate::routes::campaigns::CampaignResponse,
            crate::routes::campaigns::CampaignListResponse,
            crate::routes::campaigns::ProofsDto,
            crate::routes::campaigns::RegisterRequest,
            crate::routes::campaigns::RegisterResponse,
            crate::routes::campaigns::VoteRequest,
            crate::routes::campaigns::VoteResponse,
        ),
    ),
    tags(
        (name = "campaigns", description = "Campaign lifecycle, anonymous registration, and credential voting"),
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
