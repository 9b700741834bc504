//! Composite risk score

use crate::models::CreatorBadge;

const BASE_SCORE: i32 = 100;
const HONEYPOT_PENALTY: i32 = 60;
const SERIAL_MINTER_PENALTY: i32 = 25;
const FRESH_WALLET_PENALTY: i32 = 10;
const METADATA_ISSUE_PENALTY: i32 = 5;

/// Compute the composite risk score.
///
/// Starts at 100 and applies flat deductions: honeypot flag, badge
/// (serial minter and fresh wallet are the only penalized badges, and they
/// are mutually exclusive by construction), and one deduction per missing
/// metadata field. Deliberately not floor-clamped; a very bad token can go
/// negative.
pub fn risk_score(
    is_honeypot: bool,
    badge: Option<CreatorBadge>,
    metadata_issues: u32,
) -> i32 {
    let mut score = BASE_SCORE;

    if is_honeypot {
        score -= HONEYPOT_PENALTY;
    }

    match badge {
        Some(CreatorBadge::SerialMinter) => score -= SERIAL_MINTER_PENALTY,
        Some(CreatorBadge::FreshWallet) => score -= FRESH_WALLET_PENALTY,
        _ => {}
    }

    score -= METADATA_ISSUE_PENALTY * metadata_issues as i32;

    score
}
