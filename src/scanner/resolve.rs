//! Ordered multi-path field resolution over loose metadata records
//!
//! The metadata service has answered with several record shapes over time;
//! the same logical field can live at different nested paths. Each logical
//! field gets a declarative ordered list of candidate paths, and the first
//! present non-empty value wins. Upstream schema drift means adding a
//! path, not new code.

use serde_json::Value;

use crate::models::Socials;

/// Candidate paths for the display name, most authoritative first
pub const NAME_PATHS: &[&[&str]] = &[
    &["name"],
    &["offChainData", "name"],
    &["offChainMetadata", "metadata", "name"],
    &["onChainMetadata", "metadata", "data", "name"],
];

/// Candidate paths for the ticker symbol
pub const SYMBOL_PATHS: &[&[&str]] = &[
    &["symbol"],
    &["offChainData", "symbol"],
    &["offChainMetadata", "metadata", "symbol"],
    &["onChainMetadata", "metadata", "data", "symbol"],
];

/// Candidate paths for the logo image
pub const LOGO_PATHS: &[&[&str]] = &[
    &["image"],
    &["offChainData", "image"],
    &["offChainMetadata", "metadata", "image"],
    &["onChainMetadata", "metadata", "data", "uri"],
];

/// Resolve one logical field: walk the candidate paths in order and take
/// the first present, non-empty string. Some record variants use the
/// placeholder `"-"` for absence; it counts as missing too.
pub fn resolve_field(record: &Value, paths: &[&[&str]]) -> Option<String> {
    paths
        .iter()
        .find_map(|path| lookup_str(record, path))
        .map(str::to_string)
}

fn lookup_str<'a>(record: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = record;
    for key in path {
        current = current.get(key)?;
    }
    current
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "-")
}

/// Extract social handles from the metadata extension records.
///
/// Extensions are an ordered list of loose objects; the first occurrence
/// of each platform wins and handle format is not validated.
pub fn extract_socials(record: &Value) -> Socials {
    let mut socials = Socials::default();

    let extension_lists = [
        record.get("offChainData").and_then(|d| d.get("extensions")),
        record
            .get("offChainMetadata")
            .and_then(|d| d.get("metadata"))
            .and_then(|m| m.get("extensions")),
    ];

    for extensions in extension_lists.into_iter().flatten() {
        let Some(items) = extensions.as_array() else {
            continue;
        };
        for ext in items {
            fill_platform(&mut socials.twitter, ext, "twitter");
            fill_platform(&mut socials.telegram, ext, "telegram");
            fill_platform(&mut socials.discord, ext, "discord");
        }
    }

    socials
}

fn fill_platform(slot: &mut Option<String>, ext: &Value, platform: &str) {
    if slot.is_some() {
        return;
    }
    if let Some(handle) = ext.get(platform).and_then(|h| h.as_str()) {
        if !handle.trim().is_empty() {
            *slot = Some(handle.to_string());
        }
    }
}
