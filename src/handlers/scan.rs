//! The scan endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::handlers::AppState;
use crate::models::ScanResult;

/// Query parameters for `/scan`
#[derive(Debug, Deserialize)]
pub struct ScanParams {
    /// Token mint address. Opaque; only checked for presence.
    pub mint: Option<String>,
}

/// Scan handler
///
/// GET /scan?mint=<address>
///
/// A missing or empty `mint` is rejected before any upstream call is made.
pub async fn scan_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScanParams>,
) -> AppResult<Json<ScanResult>> {
    let mint = params
        .mint
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or(AppError::BadRequest)?;

    tracing::debug!(mint = %mint, "scan requested");

    let result = state.scanner.scan(mint).await?;
    Ok(Json(result))
}
