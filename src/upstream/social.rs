//! Follower-count scrape from a public profile mirror
//!
//! The scrape is inherently unreliable: the mirror may be down, rate
//! limited, or serving a changed page layout. Every failure mode collapses
//! into the `HandleNotFound` tier under a short timeout.

use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;

use crate::error::{AppError, AppResult};
use crate::models::EngagementTier;

/// Client for the social-profile scrape
pub struct SocialClient {
    client: Client,
    mirror_url: String,
    scrape_timeout: Duration,
}

impl SocialClient {
    pub fn new(client: Client, mirror_url: &str, scrape_timeout_ms: u64) -> Self {
        Self {
            client,
            mirror_url: mirror_url.trim_end_matches('/').to_string(),
            scrape_timeout: Duration::from_millis(scrape_timeout_ms),
        }
    }

    /// Scrape a follower count for the handle and classify it.
    ///
    /// Never fails: timeout, transport error, and parse failure all map to
    /// `HandleNotFound`.
    pub async fn engagement(&self, handle: &str) -> EngagementTier {
        let handle = normalize_handle(handle);
        if handle.is_empty() {
            return EngagementTier::HandleNotFound;
        }

        match timeout(self.scrape_timeout, self.fetch_followers(&handle)).await {
            Ok(Ok(count)) => classify_followers(count),
            Ok(Err(e)) => {
                tracing::debug!(handle = %handle, error = %e, "follower scrape failed");
                EngagementTier::HandleNotFound
            }
            Err(_) => {
                tracing::debug!(handle = %handle, "follower scrape timed out");
                EngagementTier::HandleNotFound
            }
        }
    }

    async fn fetch_followers(&self, handle: &str) -> AppResult<u64> {
        let url = format!("{}/{}", self.mirror_url, handle);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("profile request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "profile mirror returned {}",
                response.status()
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("profile body unavailable: {}", e)))?;

        parse_follower_count(&html)
            .ok_or_else(|| AppError::Parse("no follower count on profile page".to_string()))
    }
}

/// Reduce a handle to its bare form: strip a leading `@` and any profile
/// URL prefix. Metadata extensions carry both forms interchangeably.
fn normalize_handle(handle: &str) -> String {
    let handle = handle.trim();
    let handle = handle
        .rsplit('/')
        .next()
        .unwrap_or(handle)
        .trim_start_matches('@');
    handle.split('?').next().unwrap_or(handle).to_string()
}

/// Pull the follower count out of a mirror profile page.
///
/// Looks for the stat block labeled `followers` and reads the adjacent
/// `profile-stat-num` value, tolerating thousands separators.
pub fn parse_follower_count(html: &str) -> Option<u64> {
    let anchor = html.find("followers")?;
    let tail = &html[anchor..];

    let marker = "profile-stat-num\">";
    let start = tail.find(marker)? + marker.len();
    let rest = &tail[start..];
    let end = rest.find('<')?;

    let digits: String = rest[..end].chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Classify a follower count into a coarse engagement tier
pub fn classify_followers(count: u64) -> EngagementTier {
    if count < 100 {
        EngagementTier::Low
    } else if count < 1000 {
        EngagementTier::Normal
    } else {
        EngagementTier::Strong
    }
}
