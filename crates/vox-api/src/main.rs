// SPDX-License-Identifier: BUSL-1.1
//! Vox API server binary.
//!
//! Storage is in-memory (DashMap) with no persistence — campaigns and
//! ledgers are lost on restart. The eligibility verifier is the mock
//! backend; a proving-system integration replaces it at this seam.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vox_api::state::AppState;
use vox_zkp::MockVerifier;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("VOX_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    let state = AppState::new(Arc::new(MockVerifier));
    let app = vox_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("vox-api listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
