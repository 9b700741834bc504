//! Swap-route liveness probe
//!
//! Asks the swap router for a quote from wrapped SOL into the mint. The
//! presence of any route means the token has liquidity and can be bought;
//! no route, or any probe failure, is treated as a honeypot signal. This
//! is a liveness heuristic, not a security audit.

use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Wrapped SOL mint, the probe's input asset
pub const WSOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Client for the swap-route quote endpoint
pub struct SwapProbe {
    client: Client,
    quote_url: String,
    amount_lamports: u64,
}

impl SwapProbe {
    pub fn new(client: Client, quote_url: &str, amount_lamports: u64) -> Self {
        Self {
            client,
            quote_url: quote_url.to_string(),
            amount_lamports,
        }
    }

    /// Probe whether at least one swap route into the mint exists.
    ///
    /// The caller maps `Err` to "honeypot" (treat uncertainty as risk).
    pub async fn has_route(&self, mint: &str) -> AppResult<bool> {
        let url = format!(
            "{}?inputMint={}&outputMint={}&amount={}",
            self.quote_url, WSOL_MINT, mint, self.amount_lamports
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("quote request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "quote service returned {}",
                response.status()
            )));
        }

        let quote: Value = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("quote response did not parse: {}", e)))?;

        Ok(route_present(&quote))
    }
}

/// Decide whether a quote response carries at least one route.
///
/// Handles both router response generations: the older shape with a `data`
/// array of routes, and the newer single-quote shape with a `routePlan`.
pub fn route_present(quote: &Value) -> bool {
    if let Some(routes) = quote.get("data").and_then(|d| d.as_array()) {
        return !routes.is_empty();
    }

    if let Some(plan) = quote.get("routePlan").and_then(|p| p.as_array()) {
        return !plan.is_empty();
    }

    false
}
