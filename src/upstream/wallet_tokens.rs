//! Wallet token listing, filtered by mint authority
//!
//! The upstream returns every token associated with a wallet; the
//! mint-authority filter happens client-side because the API has no
//! server-side equivalent.

use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Client for the wallet-token-listing service
pub struct WalletTokenClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WalletTokenClient {
    pub fn new(client: Client, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Count tokens whose declared mint authority equals `wallet`.
    pub async fn created_by(&self, wallet: &str) -> AppResult<usize> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Upstream("wallet-token API key not configured".to_string()))?;

        let url = format!(
            "{}/addresses/{}/tokens?api-key={}",
            self.base_url, wallet, api_key
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("wallet-token request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "wallet-token service returned {}",
                response.status()
            )));
        }

        let tokens: Value = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("wallet-token response did not parse: {}", e)))?;

        Ok(count_minted_by(&tokens, wallet))
    }
}

/// Count entries whose `mint_authority` matches the wallet address.
fn count_minted_by(tokens: &Value, wallet: &str) -> usize {
    tokens
        .as_array()
        .map(|list| {
            list.iter()
                .filter(|t| {
                    t.get("mint_authority").and_then(|a| a.as_str()) == Some(wallet)
                })
                .count()
        })
        .unwrap_or(0)
}
