//! Response and intermediate data types for token scans

use serde::{Deserialize, Serialize};

/// Social handles extracted from metadata extension records.
///
/// First occurrence per platform wins; handle format is not validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Socials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
}

/// Creator details derived from the oldest transaction in a small
/// recent-history page. Heuristic, not a verified genesis lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorInfo {
    /// First signer of the presumed creation transaction
    pub address: String,
    /// Program that produced the transaction, when reported
    pub program: Option<String>,
    /// Unix timestamp of the transaction, when reported
    pub timestamp: Option<i64>,
    /// Total transactions observed for the mint, when the history page was
    /// short enough to be exhaustive
    pub tx_count: Option<u64>,
}

/// One (owner, balance) entry from a holder-list provider. Pass-through
/// data; balances are whatever unit the provider reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolderEntry {
    pub owner: String,
    pub balance: f64,
}

/// Coarse engagement tier from the follower-count scrape
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EngagementTier {
    /// Fewer than 100 followers
    Low,
    /// Fewer than 1000 followers
    Normal,
    /// 1000 followers or more
    Strong,
    /// Scrape failed or the profile page did not parse
    #[serde(rename = "Handle not found")]
    HandleNotFound,
}

/// Creator reputation badge, evaluated in priority order (first match wins)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CreatorBadge {
    #[serde(rename = "No other tokens")]
    NoOtherTokens,
    #[serde(rename = "Serial minter")]
    SerialMinter,
    #[serde(rename = "Fresh wallet")]
    FreshWallet,
    #[serde(rename = "Low activity")]
    LowActivity,
    #[serde(rename = "Creator clean")]
    CreatorClean,
}

/// The aggregated scan output. Built fresh per request, never persisted.
///
/// Missing values serialize as `null` uniformly; the service never emits a
/// placeholder string for an absent field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub mint: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub logo: Option<String>,
    pub creator: Option<String>,
    /// `None` when the created-token lookup failed; serialized as `null`
    pub tokens_created: Option<usize>,
    pub is_honeypot: bool,
    pub socials: Socials,
    pub holders: Option<Vec<HolderEntry>>,
    pub engagement: Option<EngagementTier>,
    pub creator_badge: Option<CreatorBadge>,
    pub risk_score: i32,
}
