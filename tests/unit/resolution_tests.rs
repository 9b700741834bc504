//! Field-resolution unit tests
//!
//! Tests ordered multi-path resolution against realistic metadata record
//! variants, and social-handle extraction from extension lists.

use mintscan::scanner::{
    extract_socials, resolve_field, LOGO_PATHS, NAME_PATHS, SYMBOL_PATHS,
};
use serde_json::json;

/// A full record the way the metadata service answers for an established
/// token: values present at several paths at once.
fn full_record() -> serde_json::Value {
    json!({
        "account": "Mint1111111111111111111111111111111111111111",
        "name": "Example Token",
        "symbol": "EXT",
        "offChainData": {
            "name": "Example Token (off-chain)",
            "symbol": "EXT",
            "image": "https://cdn.example.com/ext.png",
            "extensions": [
                { "twitter": "@example_token" },
                { "telegram": "https://t.me/example_token" },
            ]
        },
        "onChainMetadata": {
            "metadata": {
                "data": {
                    "name": "Example Token (on-chain)",
                    "symbol": "EXT",
                    "uri": "https://arweave.net/abc123"
                }
            }
        }
    })
}

#[test]
fn test_top_level_name_is_authoritative() {
    let record = full_record();
    assert_eq!(
        resolve_field(&record, NAME_PATHS).as_deref(),
        Some("Example Token")
    );
}

#[test]
fn test_resolution_is_order_preserving() {
    // Value only at the second candidate path resolves to exactly that
    // value, regardless of deeper paths also being populated.
    let record = json!({
        "offChainData": { "name": "Second Path" },
        "onChainMetadata": { "metadata": { "data": { "name": "Fourth Path" } } },
    });
    assert_eq!(
        resolve_field(&record, NAME_PATHS).as_deref(),
        Some("Second Path")
    );
}

#[test]
fn test_logo_falls_back_to_on_chain_uri() {
    let record = json!({
        "onChainMetadata": { "metadata": { "data": { "uri": "https://arweave.net/xyz" } } },
    });
    assert_eq!(
        resolve_field(&record, LOGO_PATHS).as_deref(),
        Some("https://arweave.net/xyz")
    );
}

#[test]
fn test_placeholder_dash_counts_as_missing() {
    // Some upstream variants answer "-" where others answer null; both
    // must resolve identically.
    let dashed = json!({ "symbol": "-" });
    let nulled = json!({ "symbol": null });
    assert_eq!(
        resolve_field(&dashed, SYMBOL_PATHS),
        resolve_field(&nulled, SYMBOL_PATHS)
    );
    assert!(resolve_field(&dashed, SYMBOL_PATHS).is_none());
}

#[test]
fn test_unresolvable_fields_are_none() {
    let record = json!({ "account": "Mint", "supply": 1000 });
    assert!(resolve_field(&record, NAME_PATHS).is_none());
    assert!(resolve_field(&record, SYMBOL_PATHS).is_none());
    assert!(resolve_field(&record, LOGO_PATHS).is_none());
}

#[test]
fn test_socials_from_extension_list() {
    let socials = extract_socials(&full_record());
    assert_eq!(socials.twitter.as_deref(), Some("@example_token"));
    assert_eq!(
        socials.telegram.as_deref(),
        Some("https://t.me/example_token")
    );
    assert!(socials.discord.is_none());
}

#[test]
fn test_socials_first_occurrence_per_platform_wins() {
    let record = json!({
        "offChainData": {
            "extensions": [
                { "twitter": "original", "discord": "https://discord.gg/abc" },
                { "twitter": "impostor" },
            ]
        }
    });
    let socials = extract_socials(&record);
    assert_eq!(socials.twitter.as_deref(), Some("original"));
    assert_eq!(socials.discord.as_deref(), Some("https://discord.gg/abc"));
}

#[test]
fn test_socials_from_off_chain_metadata_variant() {
    // The newer record variant nests extensions one level deeper.
    let record = json!({
        "offChainMetadata": {
            "metadata": {
                "extensions": [ { "telegram": "tg_only" } ]
            }
        }
    });
    let socials = extract_socials(&record);
    assert_eq!(socials.telegram.as_deref(), Some("tg_only"));
}
