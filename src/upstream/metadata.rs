//! Token metadata lookup
//!
//! Queries the metadata service for a single mint and returns the record
//! as loose JSON. The record's shape is not fixed: the same logical field
//! can appear at several nested paths depending on which upstream variant
//! answered, so resolution is left to the scanner.

use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};

/// Client for the token-metadata service
pub struct MetadataClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl MetadataClient {
    pub fn new(client: Client, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch the metadata record for a mint, if one exists.
    ///
    /// Returns `Ok(None)` when the service answers with an empty result
    /// set. Errors here are the only upstream errors that abort a scan.
    pub async fn fetch(&self, mint: &str) -> AppResult<Option<Value>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Upstream("metadata API key not configured".to_string()))?;

        let url = format!("{}/tokens/metadata?api-key={}", self.base_url, api_key);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "mintAccounts": [mint] }))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("metadata request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "metadata service returned {}",
                response.status()
            )));
        }

        let records: Value = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("metadata response did not parse: {}", e)))?;

        let first = records
            .as_array()
            .and_then(|a| a.first())
            .cloned()
            .filter(|v| !v.is_null());

        Ok(first)
    }
}
