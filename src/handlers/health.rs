//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::handlers::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: &'static str,
    /// Uptime in seconds
    pub uptime_seconds: i64,
    /// Which optional upstreams are usable with the current configuration
    pub upstreams: UpstreamHealth,
}

/// Per-upstream configuration summary.
///
/// The service is stateless, so health is about configuration rather than
/// live connectivity: a scan degrades per-field when an upstream is down.
#[derive(Debug, Serialize)]
pub struct UpstreamHealth {
    /// Metadata/transaction/wallet lookups have a credential
    pub metadata: bool,
    /// At least one holder-list provider has a credential
    pub holders: bool,
    /// Swap-route probe endpoint is set (no credential needed)
    pub swap_probe: bool,
    /// Social-profile mirror is set
    pub social_mirror: bool,
}

/// Health check handler
///
/// GET /health
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let uptime = (Utc::now() - state.started_at).num_seconds();
    let upstream = &state.config.upstream;

    let response = HealthResponse {
        status: "ok",
        uptime_seconds: uptime,
        upstreams: UpstreamHealth {
            metadata: upstream.helius_api_key.is_some(),
            holders: state.scanner.holders_configured(),
            swap_probe: !upstream.jupiter_quote_url.is_empty(),
            social_mirror: !upstream.social_mirror_url.is_empty(),
        },
    };

    (StatusCode::OK, Json(response))
}
