//! Degradation and aggregation flow tests
//!
//! Runs the full pipeline against local mock upstreams, checking the
//! partial-failure policy: metadata is fatal, everything else degrades to
//! a default without affecting the rest of the response.

use axum::http::StatusCode;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::time::{Duration, Instant};

use crate::support::{app, get_json, spawn_upstream, unreachable_base};
use mintscan::config::AppConfig;

const MINT: &str = "Mint1111111111111111111111111111111111111111";
const CREATOR: &str = "CreatorWallet1111111111111111111111111111111";

fn metadata_record() -> Value {
    json!({
        "account": MINT,
        "name": "Example Token",
        "symbol": "EXT",
        "offChainData": {
            "image": "https://cdn.example.com/ext.png",
            "extensions": [ { "twitter": "@example_token" } ]
        }
    })
}

/// Mock for the metadata/transaction/wallet-token service
fn helius_mock() -> Router {
    Router::new()
        .route(
            "/tokens/metadata",
            post(|| async { Json(json!([metadata_record()])) }),
        )
        .route(
            "/transactions",
            post(|| async {
                // Newest-first page of two; the last entry is the oldest
                Json(json!([
                    {
                        "signers": ["RecentTrader111"],
                        "timestamp": 1700000500,
                    },
                    {
                        "signers": [CREATOR],
                        "timestamp": 1600000000,
                        "instructions": [ { "programId": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA" } ],
                    },
                ]))
            }),
        )
        .route(
            "/addresses/:wallet/tokens",
            get(|| async {
                Json(json!([
                    { "mint": "MintA", "mint_authority": CREATOR },
                    { "mint": "MintB", "mint_authority": CREATOR },
                    { "mint": "MintC", "mint_authority": CREATOR },
                    { "mint": "MintD", "mint_authority": "SomeoneElse" },
                ]))
            }),
        )
}

fn config_with_key(helius_base: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.upstream.helius_api_key = Some("test-key".to_string());
    config.upstream.helius_base_url = helius_base.to_string();
    config
}

#[tokio::test]
async fn test_full_aggregation_with_all_upstreams_healthy() {
    let helius = spawn_upstream(helius_mock()).await;
    let quote = spawn_upstream(Router::new().route(
        "/quote",
        get(|| async {
            Json(json!({
                "routePlan": [ { "swapInfo": { "ammKey": "pool1" } } ],
                "outAmount": "991827",
            }))
        }),
    ))
    .await;
    let mirror = spawn_upstream(Router::new().route(
        "/profile/:handle",
        get(|| async {
            r#"<li class="followers">
                <span class="profile-stat-header">Followers</span>
                <span class="profile-stat-num">12,345</span>
            </li>"#
        }),
    ))
    .await;

    let mut config = config_with_key(&helius);
    config.upstream.jupiter_quote_url = format!("{}/quote", quote);
    config.upstream.social_mirror_url = format!("{}/profile", mirror);
    config.upstream.helius_rpc_url = unreachable_base().await;
    let app = app(config);

    let (status, body) = get_json(&app, &format!("/scan?mint={}", MINT)).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["mint"], MINT);
    assert_eq!(body["name"], "Example Token");
    assert_eq!(body["symbol"], "EXT");
    assert_eq!(body["logo"], "https://cdn.example.com/ext.png");
    assert_eq!(body["creator"], CREATOR);
    assert_eq!(body["tokensCreated"], 3);
    assert_eq!(body["isHoneypot"], false);
    assert_eq!(body["socials"]["twitter"], "@example_token");
    assert_eq!(body["engagement"], "Strong");
    // No holder credential configured
    assert!(body["holders"].is_null());
    // 3 tokens, old wallet, count untracked on a full page: clean creator
    assert_eq!(body["creatorBadge"], "Creator clean");
    assert_eq!(body["riskScore"], 100);
}

#[tokio::test]
async fn test_metadata_only_still_answers_200_with_defaults() {
    // Metadata answers; every other upstream refuses connections.
    let helius = spawn_upstream(Router::new().route(
        "/tokens/metadata",
        post(|| async { Json(json!([metadata_record()])) }),
    ))
    .await;
    let dead = unreachable_base().await;

    let mut config = config_with_key(&helius);
    config.upstream.jupiter_quote_url = format!("{}/quote", dead);
    config.upstream.social_mirror_url = dead.clone();
    config.upstream.helius_rpc_url = dead;
    let app = app(config);

    let (status, body) = get_json(&app, &format!("/scan?mint={}", MINT)).await;
    assert_eq!(status, StatusCode::OK);

    // Metadata-derived fields survive
    assert_eq!(body["name"], "Example Token");
    assert_eq!(body["symbol"], "EXT");
    assert_eq!(body["socials"]["twitter"], "@example_token");

    // Everything else degrades to its documented default
    assert!(body["creator"].is_null());
    assert_eq!(body["tokensCreated"], 0);
    assert_eq!(body["isHoneypot"], true);
    assert!(body["holders"].is_null());
    assert!(body["creatorBadge"].is_null());
    assert_eq!(body["engagement"], "Handle not found");

    // Only the honeypot deduction applies: 100 - 60
    assert_eq!(body["riskScore"], 40);
}

#[tokio::test]
async fn test_failed_token_count_reports_null_not_no_other_tokens() {
    // The creator resolves, but the wallet-token listing fails. The count
    // must come back null, and the badge ladder must not treat the failure
    // as a zero-token creator.
    let helius = spawn_upstream(
        Router::new()
            .route(
                "/tokens/metadata",
                post(|| async { Json(json!([metadata_record()])) }),
            )
            .route(
                "/transactions",
                post(|| async {
                    // Single short page: the count is tracked at one tx
                    Json(json!([
                        {
                            "signers": [CREATOR],
                            "timestamp": 1600000000,
                            "instructions": [ { "programId": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA" } ],
                        },
                    ]))
                }),
            ),
    )
    .await;
    let dead = unreachable_base().await;

    let mut config = config_with_key(&helius);
    config.upstream.jupiter_quote_url = format!("{}/quote", dead);
    config.upstream.social_mirror_url = dead.clone();
    config.upstream.helius_rpc_url = dead;
    let app = app(config);

    let (status, body) = get_json(&app, &format!("/scan?mint={}", MINT)).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["creator"], CREATOR);
    assert!(body["tokensCreated"].is_null());
    // Old wallet, one tracked transaction: low activity, not "No other tokens"
    assert_eq!(body["creatorBadge"], "Low activity");
    // Only the honeypot deduction applies: 100 - 60
    assert_eq!(body["riskScore"], 40);
}

#[tokio::test]
async fn test_empty_metadata_is_404_even_when_other_lookups_would_succeed() {
    let helius = spawn_upstream(
        Router::new()
            .route("/tokens/metadata", post(|| async { Json(json!([])) }))
            .route(
                "/transactions",
                post(|| async { Json(json!([{ "signers": [CREATOR] }])) }),
            ),
    )
    .await;
    let quote = spawn_upstream(Router::new().route(
        "/quote",
        get(|| async { Json(json!({ "routePlan": [ {} ] })) }),
    ))
    .await;

    let mut config = config_with_key(&helius);
    config.upstream.jupiter_quote_url = format!("{}/quote", quote);
    let app = app(config);

    let (status, body) = get_json(&app, &format!("/scan?mint={}", MINT)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Token not found" }));
}

#[tokio::test]
async fn test_slow_holder_provider_does_not_stall_the_response() {
    let helius = spawn_upstream(Router::new().route(
        "/tokens/metadata",
        post(|| async { Json(json!([metadata_record()])) }),
    ))
    .await;
    // Holder provider hangs far beyond its budget
    let slow_holders = spawn_upstream(Router::new().route(
        "/defi/token_holder",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "data": { "items": [ { "owner": "H1", "ui_amount": 1.0 } ] } }))
        }),
    ))
    .await;
    let dead = unreachable_base().await;

    let mut config = config_with_key(&helius);
    config.upstream.jupiter_quote_url = format!("{}/quote", dead);
    config.upstream.social_mirror_url = dead.clone();
    config.upstream.helius_rpc_url = dead;
    config.upstream.birdeye_api_key = Some("holder-key".to_string());
    config.upstream.birdeye_base_url = slow_holders;
    config.upstream.holder_timeout_ms = 500;
    let app = app(config);

    let started = Instant::now();
    let (status, body) = get_json(&app, &format!("/scan?mint={}", MINT)).await;
    let elapsed = started.elapsed();

    assert_eq!(status, StatusCode::OK);
    // The slow provider degraded to absent instead of stalling the scan
    assert!(body["holders"].is_null());
    assert!(
        elapsed < Duration::from_millis(2000),
        "scan took {:?}, holder timeout did not bound it",
        elapsed
    );
}

#[tokio::test]
async fn test_holder_provider_populates_holders_when_healthy() {
    let helius = spawn_upstream(Router::new().route(
        "/tokens/metadata",
        post(|| async { Json(json!([metadata_record()])) }),
    ))
    .await;
    let holders = spawn_upstream(Router::new().route(
        "/defi/token_holder",
        get(|| async {
            Json(json!({
                "data": {
                    "items": [
                        { "owner": "Whale1", "ui_amount": 500000.0 },
                        { "owner": "Whale2", "ui_amount": 120000.0 },
                    ]
                }
            }))
        }),
    ))
    .await;
    let dead = unreachable_base().await;

    let mut config = config_with_key(&helius);
    config.upstream.jupiter_quote_url = format!("{}/quote", dead);
    config.upstream.social_mirror_url = dead.clone();
    config.upstream.helius_rpc_url = dead;
    config.upstream.birdeye_api_key = Some("holder-key".to_string());
    config.upstream.birdeye_base_url = holders;
    let app = app(config);

    let (status, body) = get_json(&app, &format!("/scan?mint={}", MINT)).await;
    assert_eq!(status, StatusCode::OK);

    let entries = body["holders"].as_array().expect("holders list");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["owner"], "Whale1");
    assert_eq!(entries[0]["balance"], 500000.0);
}
