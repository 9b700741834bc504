//! Creator reputation badge derivation

use chrono::{DateTime, Duration, Utc};

use crate::models::CreatorBadge;

/// A wallet is "fresh" when its creation transaction landed within this
/// window
const FRESH_WALLET_DAYS: i64 = 3;

/// Created-token count above which a wallet is a serial minter
const SERIAL_MINTER_THRESHOLD: usize = 10;

/// Transaction count below which a wallet counts as low activity
const LOW_ACTIVITY_THRESHOLD: u64 = 5;

/// Observed creator activity, assembled by the scan pipeline
#[derive(Debug, Clone, Default)]
pub struct CreatorActivity {
    /// Tokens whose mint authority is this wallet; `None` when the lookup
    /// failed and the count is unknown
    pub tokens_created: Option<usize>,
    /// Timestamp of the presumed creation transaction
    pub created_at: Option<DateTime<Utc>>,
    /// Transaction count for the mint, when tracked
    pub tx_count: Option<u64>,
}

/// Classify the creator wallet. Rules are evaluated in priority order and
/// the first match wins. Rungs that judge an unavailable observation are
/// skipped rather than fed a default: an unknown created-token count never
/// yields `NoOtherTokens`, and `LowActivity` only fires when a transaction
/// count was actually tracked.
pub fn derive_badge(activity: &CreatorActivity, now: DateTime<Utc>) -> CreatorBadge {
    if activity.tokens_created == Some(0) {
        return CreatorBadge::NoOtherTokens;
    }

    if activity
        .tokens_created
        .is_some_and(|count| count > SERIAL_MINTER_THRESHOLD)
    {
        return CreatorBadge::SerialMinter;
    }

    if let Some(created_at) = activity.created_at {
        if now - created_at < Duration::days(FRESH_WALLET_DAYS) {
            return CreatorBadge::FreshWallet;
        }
    }

    if let Some(tx_count) = activity.tx_count {
        if tx_count < LOW_ACTIVITY_THRESHOLD {
            return CreatorBadge::LowActivity;
        }
    }

    CreatorBadge::CreatorClean
}
