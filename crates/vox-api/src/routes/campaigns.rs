// SPDX-License-Identifier: BUSL-1.1
//! # Campaign API
//!
//! REST endpoints for the anonymous campaign voting protocol. Organizers
//! publish time-boxed campaigns; participants register for a single-use
//! credential before the vote opens and redeem it exactly once during the
//! voting window.
//!
//! ## Endpoints
//!
//! - `POST /v1/campaigns`              — Create a campaign
//! - `GET  /v1/campaigns`              — List campaigns
//! - `GET  /v1/campaigns/:id`          — Get campaign details
//! - `POST /v1/campaigns/:id/register` — Register and receive a credential
//! - `POST /v1/campaigns/:id/vote`     — Redeem a credential and vote
//!
//! The credential returned by `register` is a one-time hand-off: the
//! server keeps only its commitment hash and cannot reproduce it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use vox_core::{CampaignId, RestrictionKind, RestrictionSet, VotingWindow};
use vox_crypto::hex;
use vox_protocol::{Campaign, CampaignStore, CampaignSummary, ProtocolError};
use vox_zkp::RestrictionProofs;

use crate::error::AppError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Eligibility restrictions on a campaign. All fields optional; an absent
/// field means that restriction is not applied.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RestrictionsDto {
    /// Minimum participant age in whole years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    /// Required country of residence, ISO 3166-1 alpha-2 uppercase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Explicit whitelist of permitted identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<String>>,
}

impl RestrictionsDto {
    fn into_set(self) -> RestrictionSet {
        RestrictionSet {
            min_age: self.min_age,
            country: self.country,
            whitelist: self.whitelist,
        }
    }

    fn from_set(set: &RestrictionSet) -> Option<Self> {
        if set.is_open() {
            return None;
        }
        Some(Self {
            min_age: set.min_age,
            country: set.country.clone(),
            whitelist: set.whitelist.clone(),
        })
    }
}

/// Request to create a campaign.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCampaignRequest {
    /// Campaign name. Must not be blank.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Ballot options. At least two, unique, non-blank.
    pub options: Vec<String>,
    /// Optional eligibility restrictions.
    #[serde(default)]
    pub restrictions: Option<RestrictionsDto>,
    /// Instant voting opens (registration closes).
    pub start: DateTime<Utc>,
    /// Instant voting closes, inclusive. Must be after `start`.
    pub end: DateTime<Utc>,
}

/// Response representing a campaign's public state.
///
/// Carries total counters only — per-option tallies are never exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CampaignResponse {
    /// Unique campaign identifier.
    pub id: Uuid,
    /// Campaign name.
    pub name: String,
    /// Campaign description.
    pub description: String,
    /// Ballot options, in the published order.
    pub options: Vec<String>,
    /// Eligibility restrictions; absent for an open campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<RestrictionsDto>,
    /// Instant voting opens.
    pub start: DateTime<Utc>,
    /// Instant voting closes, inclusive.
    pub end: DateTime<Utc>,
    /// Current phase: "upcoming", "active", or "closed".
    pub phase: String,
    /// Credentials issued so far.
    pub registered_count: u64,
    /// Votes cast so far.
    pub vote_count: u64,
    /// When the campaign was created.
    pub created_at: DateTime<Utc>,
}

impl CampaignResponse {
    fn from_summary(summary: CampaignSummary) -> Self {
        Self {
            id: *summary.id.as_uuid(),
            name: summary.name,
            description: summary.description,
            options: summary.options,
            restrictions: RestrictionsDto::from_set(&summary.restrictions),
            start: summary.start,
            end: summary.end,
            phase: summary.phase.as_str().to_string(),
            registered_count: summary.registered_count,
            vote_count: summary.vote_count,
            created_at: summary.created_at,
        }
    }
}

/// Campaign list response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CampaignListResponse {
    /// Campaigns, newest first.
    pub campaigns: Vec<CampaignResponse>,
    /// Total number of campaigns.
    pub total: usize,
}

/// Hex-encoded eligibility proofs, one per configured restriction.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProofsDto {
    /// Proof of minimum age.
    #[serde(default)]
    pub age: Option<String>,
    /// Proof of country of residence.
    #[serde(default)]
    pub country: Option<String>,
    /// Proof of whitelist membership.
    #[serde(default)]
    pub whitelist: Option<String>,
}

impl ProofsDto {
    /// Decode the hex proof strings. A proof that cannot be decoded is
    /// treated like a failing proof for that restriction — fail closed,
    /// never a distinct transport error.
    fn into_proofs(self) -> Result<RestrictionProofs, AppError> {
        let decode = |kind: RestrictionKind,
                      value: Option<String>|
         -> Result<Option<Vec<u8>>, AppError> {
            value
                .map(|s| {
                    hex::decode(&s).map_err(|_| {
                        tracing::debug!(kind = %kind, "submitted proof is not valid hex");
                        AppError::from(ProtocolError::Ineligible(kind))
                    })
                })
                .transpose()
        };
        Ok(RestrictionProofs {
            age: decode(RestrictionKind::Age, self.age)?,
            country: decode(RestrictionKind::Country, self.country)?,
            whitelist: decode(RestrictionKind::Whitelist, self.whitelist)?,
        })
    }
}

/// Request to register for a campaign.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    /// Eligibility proofs. May be omitted for an open campaign.
    #[serde(default)]
    pub proofs: ProofsDto,
}

/// Response carrying a freshly minted credential.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    /// The campaign registered for.
    pub campaign_id: Uuid,
    /// Hex-encoded single-use credential secret. Shown exactly once —
    /// the server retains only its commitment and cannot recover it.
    pub credential: String,
}

/// Request to cast a vote.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct VoteRequest {
    /// Hex-encoded credential secret from registration.
    pub credential: String,
    /// The chosen ballot option.
    pub option: String,
}

/// Response confirming a recorded vote.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VoteResponse {
    /// The campaign voted in.
    pub campaign_id: Uuid,
    /// Always "recorded".
    pub status: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the campaign router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/campaigns", post(create_campaign).get(list_campaigns))
        .route("/v1/campaigns/:id", get(get_campaign))
        .route("/v1/campaigns/:id/register", post(register))
        .route("/v1/campaigns/:id/vote", post(vote))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/campaigns — Create a campaign.
#[utoipa::path(
    post,
    path = "/v1/campaigns",
    request_body = CreateCampaignRequest,
    responses(
        (status = 201, description = "Campaign created", body = CampaignResponse),
        (status = 422, description = "Invalid campaign data", body = crate::error::ErrorBody),
    ),
    tag = "campaigns"
)]
async fn create_campaign(
    State(state): State<AppState>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<CampaignResponse>), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be blank".to_string()));
    }
    let window = VotingWindow::new(req.start, req.end)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let restrictions = req
        .restrictions
        .map(RestrictionsDto::into_set)
        .unwrap_or_default();
    let campaign = Campaign::new(req.name, req.description, req.options, restrictions, window)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let now = Utc::now();
    let response = CampaignResponse::from_summary(campaign.summary(now));
    state.store.create(campaign).map_err(|e| {
        // Ids are freshly generated UUIDs; a collision is a server fault.
        AppError::Internal(e.to_string())
    })?;
    tracing::info!(campaign = %response.id, "campaign created");
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /v1/campaigns — List all campaigns.
#[utoipa::path(
    get,
    path = "/v1/campaigns",
    responses(
        (status = 200, description = "List of campaigns", body = CampaignListResponse),
    ),
    tag = "campaigns"
)]
async fn list_campaigns(State(state): State<AppState>) -> Json<CampaignListResponse> {
    let now = Utc::now();
    let mut campaigns: Vec<CampaignResponse> = state
        .store
        .list()
        .iter()
        .map(|c| CampaignResponse::from_summary(c.summary(now)))
        .collect();
    campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let total = campaigns.len();
    // Cap the returned list to prevent unbounded response payloads.
    const MAX_LIST: usize = 1000;
    campaigns.truncate(MAX_LIST);
    Json(CampaignListResponse { campaigns, total })
}

/// GET /v1/campaigns/:id — Get campaign details.
#[utoipa::path(
    get,
    path = "/v1/campaigns/{id}",
    params(("id" = Uuid, Path, description = "Campaign UUID")),
    responses(
        (status = 200, description = "Campaign details", body = CampaignResponse),
        (status = 404, description = "Campaign not found", body = crate::error::ErrorBody),
    ),
    tag = "campaigns"
)]
async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignResponse>, AppError> {
    let campaign = state
        .store
        .get(&CampaignId::from(id))
        .map_err(|_| AppError::NotFound(format!("campaign {id} not found")))?;
    Ok(Json(CampaignResponse::from_summary(
        campaign.summary(Utc::now()),
    )))
}

/// POST /v1/campaigns/:id/register — Register and receive a credential.
#[utoipa::path(
    post,
    path = "/v1/campaigns/{id}/register",
    params(("id" = Uuid, Path, description = "Campaign UUID")),
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Credential issued", body = RegisterResponse),
        (status = 404, description = "Campaign not found", body = crate::error::ErrorBody),
        (status = 409, description = "Registration closed", body = crate::error::ErrorBody),
        (status = 403, description = "Eligibility not satisfied", body = crate::error::ErrorBody),
    ),
    tag = "campaigns"
)]
async fn register(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let proofs = req.proofs.into_proofs()?;
    let secret = state
        .registrar
        .register(CampaignId::from(id), &proofs, Utc::now())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            campaign_id: id,
            credential: secret.to_hex(),
        }),
    ))
}

/// POST /v1/campaigns/:id/vote — Redeem a credential and cast a vote.
#[utoipa::path(
    post,
    path = "/v1/campaigns/{id}/vote",
    params(("id" = Uuid, Path, description = "Campaign UUID")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote recorded", body = VoteResponse),
        (status = 404, description = "Campaign not found", body = crate::error::ErrorBody),
        (status = 409, description = "Voting not active", body = crate::error::ErrorBody),
        (status = 403, description = "Invalid credential", body = crate::error::ErrorBody),
        (status = 422, description = "Option not on the ballot", body = crate::error::ErrorBody),
    ),
    tag = "campaigns"
)]
async fn vote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, AppError> {
    state
        .engine
        .cast_vote(CampaignId::from(id), &req.credential, &req.option, Utc::now())?;
    Ok(Json(VoteResponse {
        campaign_id: id,
        status: "recorded".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::Duration;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;
    use vox_crypto::CredentialSecret;
    use vox_zkp::{MockVerifier, StaticVerifier};

    fn test_state() -> AppState {
        AppState::new(Arc::new(MockVerifier))
    }

    fn test_app(state: &AppState) -> Router {
        router().with_state(state.clone())
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn create_body(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        serde_json::json!({
            "name": "Board election",
            "description": "Annual board election",
            "options": ["A", "B"],
            "start": start,
            "end": end,
        })
        .to_string()
    }

    async fn create_campaign_via_api(
        app: &Router,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CampaignResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/v1/campaigns")
            .header("content-type", "application/json")
            .body(Body::from(create_body(start, end)))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        body_json(resp).await
    }

    #[tokio::test]
    async fn create_campaign_returns_201() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let campaign =
            create_campaign_via_api(&app, now + Duration::days(1), now + Duration::days(8)).await;

        assert_eq!(campaign.name, "Board election");
        assert_eq!(campaign.phase, "upcoming");
        assert_eq!(campaign.registered_count, 0);
        assert_eq!(campaign.vote_count, 0);
        assert!(campaign.restrictions.is_none());
    }

    #[tokio::test]
    async fn create_campaign_rejects_single_option() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let body = serde_json::json!({
            "name": "x",
            "options": ["A"],
            "start": now + Duration::days(1),
            "end": now + Duration::days(2),
        })
        .to_string();
        let req = Request::builder()
            .method("POST")
            .uri("/v1/campaigns")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_campaign_rejects_inverted_window() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let req = Request::builder()
            .method("POST")
            .uri("/v1/campaigns")
            .header("content-type", "application/json")
            .body(Body::from(create_body(
                now + Duration::days(8),
                now + Duration::days(1),
            )))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn get_campaign_not_found_returns_404() {
        let state = test_state();
        let app = test_app(&state);
        let fake_id = Uuid::new_v4();
        let req = Request::builder()
            .method("GET")
            .uri(format!("/v1/campaigns/{fake_id}"))
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_campaigns_returns_created() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        for _ in 0..2 {
            create_campaign_via_api(&app, now + Duration::days(1), now + Duration::days(8)).await;
        }

        let req = Request::builder()
            .method("GET")
            .uri("/v1/campaigns")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let list: CampaignListResponse = body_json(resp).await;
        assert_eq!(list.total, 2);
        assert_eq!(list.campaigns.len(), 2);
    }

    #[tokio::test]
    async fn register_before_start_issues_credential() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let campaign =
            create_campaign_via_api(&app, now + Duration::days(1), now + Duration::days(8)).await;

        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/register", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let issued: RegisterResponse = body_json(resp).await;
        assert_eq!(issued.campaign_id, campaign.id);
        // 32 bytes of secret, hex-encoded.
        assert_eq!(issued.credential.len(), 64);

        let req = Request::builder()
            .method("GET")
            .uri(format!("/v1/campaigns/{}", campaign.id))
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let detail: CampaignResponse = body_json(resp).await;
        assert_eq!(detail.registered_count, 1);
    }

    #[tokio::test]
    async fn register_during_voting_window_returns_409() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let campaign =
            create_campaign_via_api(&app, now - Duration::hours(1), now + Duration::hours(1))
                .await;

        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/register", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn register_without_proof_on_restricted_campaign_returns_403() {
        let state = AppState::new(Arc::new(StaticVerifier::accepting()));
        let app = test_app(&state);
        let now = Utc::now();
        let body = serde_json::json!({
            "name": "Restricted",
            "options": ["A", "B"],
            "restrictions": { "min_age": 18 },
            "start": now + Duration::days(1),
            "end": now + Duration::days(8),
        })
        .to_string();
        let req = Request::builder()
            .method("POST")
            .uri("/v1/campaigns")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let campaign: CampaignResponse = body_json(resp).await;

        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/register", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn register_with_non_hex_proof_is_ineligible() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let campaign =
            create_campaign_via_api(&app, now + Duration::days(1), now + Duration::days(8)).await;

        // Undecodable proof fails closed, indistinguishable in status
        // from a proof the verifier rejects.
        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/register", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from(r#"{"proofs": {"age": "not-hex"}}"#))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        // Nothing was committed.
        let req = Request::builder()
            .method("GET")
            .uri(format!("/v1/campaigns/{}", campaign.id))
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let detail: CampaignResponse = body_json(resp).await;
        assert_eq!(detail.registered_count, 0);
    }

    /// Seed a credential directly into the store for a campaign whose
    /// voting window is already open (registration cannot run then).
    fn seed_credential(state: &AppState, id: Uuid) -> String {
        let secret = CredentialSecret::generate();
        state
            .store
            .insert_credential(&CampaignId::from(id), secret.commitment())
            .unwrap();
        secret.to_hex()
    }

    #[tokio::test]
    async fn vote_with_issued_credential_succeeds_once() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let campaign =
            create_campaign_via_api(&app, now - Duration::hours(1), now + Duration::hours(1))
                .await;
        let credential = seed_credential(&state, campaign.id);

        let vote_body = serde_json::json!({"credential": credential, "option": "A"}).to_string();
        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/vote", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from(vote_body.clone()))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let confirmed: VoteResponse = body_json(resp).await;
        assert_eq!(confirmed.status, "recorded");

        // Replaying the same credential is rejected.
        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/vote", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from(vote_body))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = Request::builder()
            .method("GET")
            .uri(format!("/v1/campaigns/{}", campaign.id))
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let detail: CampaignResponse = body_json(resp).await;
        assert_eq!(detail.vote_count, 1);
    }

    #[tokio::test]
    async fn vote_before_window_returns_409() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let campaign =
            create_campaign_via_api(&app, now + Duration::days(1), now + Duration::days(8)).await;
        let credential = seed_credential(&state, campaign.id);

        let body = serde_json::json!({"credential": credential, "option": "A"}).to_string();
        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/vote", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn vote_for_off_ballot_option_returns_422() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let campaign =
            create_campaign_via_api(&app, now - Duration::hours(1), now + Duration::hours(1))
                .await;
        let credential = seed_credential(&state, campaign.id);

        let body = serde_json::json!({"credential": credential, "option": "C"}).to_string();
        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/vote", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn vote_with_unissued_credential_returns_403() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let campaign =
            create_campaign_via_api(&app, now - Duration::hours(1), now + Duration::hours(1))
                .await;

        let stranger = CredentialSecret::generate().to_hex();
        let body = serde_json::json!({"credential": stranger, "option": "A"}).to_string();
        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/vote", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn malformed_credential_gets_same_status_as_unknown() {
        let state = test_state();
        let app = test_app(&state);
        let now = Utc::now();
        let campaign =
            create_campaign_via_api(&app, now - Duration::hours(1), now + Duration::hours(1))
                .await;

        let body = serde_json::json!({"credential": "zz", "option": "A"}).to_string();
        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/campaigns/{}/vote", campaign.id))
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn router_builds_successfully() {
        let _router = router();
    }
}
