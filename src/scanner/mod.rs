//! The aggregator: one best-effort scan pipeline per request
//!
//! A scan is a linear pipeline with independent tolerant branches. The
//! metadata lookup is the only fatal step; every other upstream failure is
//! caught at its call site and degrades that one field to a default
//! ("degrade, don't fail"). No state survives the request.

mod badge;
mod resolve;
mod score;

pub use badge::{derive_badge, CreatorActivity};
pub use resolve::{extract_socials, resolve_field, LOGO_PATHS, NAME_PATHS, SYMBOL_PATHS};
pub use score::risk_score;

use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::{CreatorInfo, ScanResult};
use crate::upstream::{
    HolderClient, MetadataClient, SocialClient, SwapProbe, TransactionClient, WalletTokenClient,
};

/// Aggregates token-risk signals for one mint across the upstream APIs
pub struct Scanner {
    metadata: MetadataClient,
    transactions: TransactionClient,
    wallet_tokens: WalletTokenClient,
    swap: SwapProbe,
    holders: HolderClient,
    social: SocialClient,
}

impl Scanner {
    /// Build a scanner from configuration. One shared HTTP client with a
    /// conservative timeout backs every upstream; the holder and social
    /// calls additionally get a tighter per-call budget.
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let upstream = &config.upstream;

        let client = Client::builder()
            .timeout(Duration::from_millis(upstream.request_timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            metadata: MetadataClient::new(
                client.clone(),
                &upstream.helius_base_url,
                upstream.helius_api_key.clone(),
            ),
            transactions: TransactionClient::new(
                client.clone(),
                &upstream.helius_base_url,
                upstream.helius_api_key.clone(),
                upstream.tx_page_limit,
            ),
            wallet_tokens: WalletTokenClient::new(
                client.clone(),
                &upstream.helius_base_url,
                upstream.helius_api_key.clone(),
            ),
            swap: SwapProbe::new(
                client.clone(),
                &upstream.jupiter_quote_url,
                upstream.probe_amount_lamports,
            ),
            holders: HolderClient::new(
                client.clone(),
                &upstream.birdeye_base_url,
                upstream.birdeye_api_key.clone(),
                &upstream.helius_rpc_url,
                upstream.helius_api_key.clone(),
                upstream.holder_timeout_ms,
            ),
            social: SocialClient::new(
                client,
                &upstream.social_mirror_url,
                upstream.holder_timeout_ms,
            ),
        })
    }

    /// True when at least one holder-list credential is configured
    pub fn holders_configured(&self) -> bool {
        self.holders.any_configured()
    }

    /// Run one scan. Fails only on a missing mint or a missing metadata
    /// record; everything else degrades.
    pub async fn scan(&self, mint: &str) -> AppResult<ScanResult> {
        if mint.trim().is_empty() {
            return Err(AppError::BadRequest);
        }

        // Step 1: metadata, the only fatal lookup
        let record = match self.metadata.fetch(mint).await {
            Ok(Some(record)) => record,
            Ok(None) => return Err(AppError::NotFound),
            Err(e) => {
                tracing::warn!(mint = %mint, error = %e, "metadata lookup failed");
                return Err(AppError::NotFound);
            }
        };

        // Step 2: ordered fallback resolution and social extraction,
        // purely local
        let name = resolve_field(&record, NAME_PATHS);
        let symbol = resolve_field(&record, SYMBOL_PATHS);
        let logo = resolve_field(&record, LOGO_PATHS);
        let socials = extract_socials(&record);

        // Step 3: tolerant fan-out; no branch's failure aborts another
        let creator_fut = async {
            match self.transactions.earliest_transaction(mint).await {
                Ok(creator) => creator,
                Err(e) => {
                    tracing::warn!(mint = %mint, error = %e, "creator lookup failed");
                    None
                }
            }
        };

        let honeypot_fut = async {
            match self.swap.has_route(mint).await {
                Ok(true) => false,
                Ok(false) => true,
                Err(e) => {
                    // Uncertainty counts as risk
                    tracing::debug!(mint = %mint, error = %e, "swap probe failed");
                    true
                }
            }
        };

        let holders_fut = self.holders.top_holders(mint);

        let engagement_fut = async {
            match socials.twitter.as_deref() {
                Some(handle) => Some(self.social.engagement(handle).await),
                None => None,
            }
        };

        let (creator, is_honeypot, holders, engagement) =
            tokio::join!(creator_fut, honeypot_fut, holders_fut, engagement_fut);

        // Step 4: created-token count depends on a resolved creator. A failed
        // lookup is reported as unknown, not zero, so the badge ladder cannot
        // mistake it for "no other tokens".
        let tokens_created = match &creator {
            Some(info) => match self.wallet_tokens.created_by(&info.address).await {
                Ok(count) => Some(count),
                Err(e) => {
                    tracing::warn!(
                        wallet = %info.address,
                        error = %e,
                        "created-token lookup failed"
                    );
                    None
                }
            },
            None => Some(0),
        };

        // Step 5: badge and composite score
        let badge = creator
            .as_ref()
            .map(|info| derive_badge(&activity_of(info, tokens_created), Utc::now()));

        let metadata_issues =
            [&name, &symbol, &logo].iter().filter(|f| f.is_none()).count() as u32;
        let risk_score = risk_score(is_honeypot, badge, metadata_issues);

        tracing::info!(
            mint = %mint,
            is_honeypot,
            risk_score,
            creator_resolved = creator.is_some(),
            engagement = ?engagement,
            "scan complete"
        );

        Ok(ScanResult {
            mint: mint.to_string(),
            name,
            symbol,
            logo,
            creator: creator.map(|info| info.address),
            tokens_created,
            is_honeypot,
            socials,
            holders,
            engagement,
            creator_badge: badge,
            risk_score,
        })
    }
}

fn activity_of(info: &CreatorInfo, tokens_created: Option<usize>) -> CreatorActivity {
    CreatorActivity {
        tokens_created,
        created_at: info.timestamp.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        tx_count: info.tx_count,
    }
}
