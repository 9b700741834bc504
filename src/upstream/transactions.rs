//! Transaction-history lookup for creator derivation
//!
//! Heuristic: request a small page of the most recent transactions for the
//! mint and treat the oldest entry of that page as the creation
//! transaction, its first signer as the creator wallet. This is a proxy,
//! not a verified genesis lookup; it can be wrong if the upstream's
//! ordering or paging changes.

use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::CreatorInfo;

/// Client for the transaction-history service
pub struct TransactionClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    page_limit: u32,
}

impl TransactionClient {
    pub fn new(client: Client, base_url: &str, api_key: Option<String>, page_limit: u32) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            page_limit,
        }
    }

    /// Derive creator details from the oldest transaction in the page.
    ///
    /// Returns `Ok(None)` when no history exists for the mint.
    pub async fn earliest_transaction(&self, mint: &str) -> AppResult<Option<CreatorInfo>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Upstream("transaction API key not configured".to_string()))?;

        let url = format!("{}/transactions?api-key={}", self.base_url, api_key);
        let response = self
            .client
            .post(&url)
            .json(&json!({
                "account": mint,
                "limit": self.page_limit,
                "before": "",
                "until": "",
            }))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("transaction request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "transaction service returned {}",
                response.status()
            )));
        }

        let page: Value = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("transaction response did not parse: {}", e)))?;

        let txs = match page.as_array() {
            Some(txs) if !txs.is_empty() => txs,
            _ => return Ok(None),
        };

        // The page is newest-first; the last entry is the oldest we can see.
        let oldest = &txs[txs.len() - 1];
        Ok(parse_creator(oldest, txs.len(), self.page_limit))
    }
}

/// Extract creator details from one transaction record.
///
/// `tx_count` is only reported when the page came back shorter than the
/// requested limit, meaning we saw the mint's entire history.
fn parse_creator(tx: &Value, page_len: usize, page_limit: u32) -> Option<CreatorInfo> {
    let address = tx
        .get("signers")
        .and_then(|s| s.as_array())
        .and_then(|s| s.first())
        .and_then(|s| s.as_str())
        .or_else(|| tx.get("feePayer").and_then(|f| f.as_str()))?
        .to_string();

    let program = tx
        .get("instructions")
        .and_then(|i| i.as_array())
        .and_then(|i| i.first())
        .and_then(|i| i.get("programId"))
        .and_then(|p| p.as_str())
        .or_else(|| tx.get("source").and_then(|s| s.as_str()))
        .map(str::to_string);

    let timestamp = tx.get("timestamp").and_then(|t| t.as_i64());

    let tx_count = if page_len < page_limit as usize {
        Some(page_len as u64)
    } else {
        None
    };

    Some(CreatorInfo {
        address,
        program,
        timestamp,
        tx_count,
    })
}
