//! Holder-list providers
//!
//! Zero or more providers may be configured; each is independently
//! tolerant of failure and bounded by a short timeout so a dead provider
//! degrades the `holders` field instead of stalling the whole scan. The
//! entries are pass-through data, not validated.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::timeout;

use crate::error::{AppError, AppResult};
use crate::models::HolderEntry;

/// Aggregating client over the configured holder-list providers
pub struct HolderClient {
    client: Client,
    birdeye_base_url: String,
    birdeye_api_key: Option<String>,
    helius_rpc_url: String,
    helius_api_key: Option<String>,
    provider_timeout: Duration,
}

impl HolderClient {
    pub fn new(
        client: Client,
        birdeye_base_url: &str,
        birdeye_api_key: Option<String>,
        helius_rpc_url: &str,
        helius_api_key: Option<String>,
        provider_timeout_ms: u64,
    ) -> Self {
        Self {
            client,
            birdeye_base_url: birdeye_base_url.trim_end_matches('/').to_string(),
            birdeye_api_key,
            helius_rpc_url: helius_rpc_url.trim_end_matches('/').to_string(),
            helius_api_key,
            provider_timeout: Duration::from_millis(provider_timeout_ms),
        }
    }

    /// True when at least one provider credential is configured
    pub fn any_configured(&self) -> bool {
        self.birdeye_api_key.is_some() || self.helius_api_key.is_some()
    }

    /// Fetch top holders from the first provider that answers in time.
    ///
    /// Providers are tried in order; a timeout or error on one falls
    /// through to the next. `None` when no provider is configured or none
    /// produced a usable list.
    pub async fn top_holders(&self, mint: &str) -> Option<Vec<HolderEntry>> {
        if self.birdeye_api_key.is_some() {
            match timeout(self.provider_timeout, self.fetch_birdeye(mint)).await {
                Ok(Ok(entries)) if !entries.is_empty() => return Some(entries),
                Ok(Ok(_)) => {
                    tracing::debug!(mint = %mint, "holder provider returned an empty list");
                }
                Ok(Err(e)) => {
                    tracing::warn!(mint = %mint, error = %e, "holder provider failed");
                }
                Err(_) => {
                    tracing::warn!(mint = %mint, "holder provider timed out");
                }
            }
        }

        if self.helius_api_key.is_some() {
            match timeout(self.provider_timeout, self.fetch_largest_accounts(mint)).await {
                Ok(Ok(entries)) if !entries.is_empty() => return Some(entries),
                Ok(Ok(_)) => {
                    tracing::debug!(mint = %mint, "largest-accounts lookup returned nothing");
                }
                Ok(Err(e)) => {
                    tracing::warn!(mint = %mint, error = %e, "largest-accounts lookup failed");
                }
                Err(_) => {
                    tracing::warn!(mint = %mint, "largest-accounts lookup timed out");
                }
            }
        }

        None
    }

    /// Birdeye-style REST holder list
    async fn fetch_birdeye(&self, mint: &str) -> AppResult<Vec<HolderEntry>> {
        let api_key = self
            .birdeye_api_key
            .as_deref()
            .ok_or_else(|| AppError::Upstream("holder API key not configured".to_string()))?;

        let url = format!(
            "{}/defi/token_holder?address={}&offset=0&limit=20",
            self.birdeye_base_url, mint
        );
        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", api_key)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("holder request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "holder provider returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("holder response did not parse: {}", e)))?;

        Ok(parse_birdeye_holders(&body))
    }

    /// JSON-RPC `getTokenLargestAccounts` fallback
    async fn fetch_largest_accounts(&self, mint: &str) -> AppResult<Vec<HolderEntry>> {
        let api_key = self
            .helius_api_key
            .as_deref()
            .ok_or_else(|| AppError::Upstream("RPC API key not configured".to_string()))?;

        let url = format!("{}/?api-key={}", self.helius_rpc_url, api_key);
        let response = self
            .client
            .post(&url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getTokenLargestAccounts",
                "params": [mint],
            }))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("largest-accounts request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "RPC returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("RPC response did not parse: {}", e)))?;

        Ok(parse_largest_accounts(&body))
    }
}

/// Parse a Birdeye-style holder response (`data.items[]`)
fn parse_birdeye_holders(body: &Value) -> Vec<HolderEntry> {
    body.get("data")
        .and_then(|d| d.get("items"))
        .and_then(|i| i.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let owner = item.get("owner").and_then(|o| o.as_str())?;
                    let balance = item
                        .get("ui_amount")
                        .or_else(|| item.get("amount"))
                        .and_then(|a| a.as_f64())?;
                    Some(HolderEntry {
                        owner: owner.to_string(),
                        balance,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a `getTokenLargestAccounts` response (`result.value[]`).
///
/// The reported address is the token account, not its owner; it is passed
/// through as-is.
fn parse_largest_accounts(body: &Value) -> Vec<HolderEntry> {
    body.get("result")
        .and_then(|r| r.get("value"))
        .and_then(|v| v.as_array())
        .map(|accounts| {
            accounts
                .iter()
                .filter_map(|acc| {
                    let owner = acc.get("address").and_then(|a| a.as_str())?;
                    let balance = acc.get("uiAmount").and_then(|a| a.as_f64())?;
                    Some(HolderEntry {
                        owner: owner.to_string(),
                        balance,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
