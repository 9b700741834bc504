//! Configuration management for mintscan
//!
//! Loads configuration from YAML files and environment variables.
//! Environment variables override YAML values. The resulting `AppConfig`
//! is an explicit struct passed into handlers via shared state; no module
//! reads ambient global state.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Upstream data API configuration
    pub upstream: UpstreamConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

/// Upstream data API configuration
///
/// Every credential is optional. A missing optional credential degrades the
/// corresponding response field to null/absent; it never fails the request.
/// The exception is the metadata service, whose unavailability makes every
/// scan resolve to "token not found".
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// API key for the metadata/transaction/wallet-token service
    #[serde(default)]
    pub helius_api_key: Option<String>,
    /// Base URL for the metadata/transaction/wallet-token service
    #[serde(default = "default_helius_base_url")]
    pub helius_base_url: String,
    /// JSON-RPC endpoint used for the largest-accounts holder fallback
    #[serde(default = "default_helius_rpc_url")]
    pub helius_rpc_url: String,
    /// Full URL of the swap-route quote endpoint
    #[serde(default = "default_jupiter_quote_url")]
    pub jupiter_quote_url: String,
    /// API key for the holder-list provider (optional)
    #[serde(default)]
    pub birdeye_api_key: Option<String>,
    /// Base URL for the holder-list provider
    #[serde(default = "default_birdeye_base_url")]
    pub birdeye_base_url: String,
    /// Base URL of the public profile mirror used for the follower scrape
    #[serde(default = "default_social_mirror_url")]
    pub social_mirror_url: String,
    /// Shared timeout for ordinary upstream calls, in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
    /// Tighter per-provider timeout for holder-list and social-scrape
    /// calls, in milliseconds
    #[serde(default = "default_holder_timeout")]
    pub holder_timeout_ms: u64,
    /// Probe amount (lamports of wrapped SOL) for the swap-route check
    #[serde(default = "default_probe_amount")]
    pub probe_amount_lamports: u64,
    /// Page size for the recent-transaction lookup
    #[serde(default = "default_tx_page_limit")]
    pub tx_page_limit: u32,
}

fn default_helius_base_url() -> String {
    "https://api.helius.xyz/v0".to_string()
}

fn default_helius_rpc_url() -> String {
    "https://mainnet.helius-rpc.com".to_string()
}

fn default_jupiter_quote_url() -> String {
    "https://quote-api.jup.ag/v6/quote".to_string()
}

fn default_birdeye_base_url() -> String {
    "https://public-api.birdeye.so".to_string()
}

fn default_social_mirror_url() -> String {
    "https://nitter.net".to_string()
}

fn default_request_timeout() -> u64 {
    8000
}

fn default_holder_timeout() -> u64 {
    2000
}

fn default_probe_amount() -> u64 {
    10_000_000
}

fn default_tx_page_limit() -> u32 {
    2
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MINTSCAN_*)
    /// 2. config/config.yaml (if exists)
    /// 3. config.yaml (if exists)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("upstream.helius_base_url", default_helius_base_url())?
            .set_default("upstream.helius_rpc_url", default_helius_rpc_url())?
            .set_default("upstream.jupiter_quote_url", default_jupiter_quote_url())?
            .set_default("upstream.birdeye_base_url", default_birdeye_base_url())?
            .set_default("upstream.social_mirror_url", default_social_mirror_url())?
            .set_default("upstream.request_timeout_ms", 8000)?
            .set_default("upstream.holder_timeout_ms", 2000)?
            .set_default("upstream.probe_amount_lamports", 10_000_000i64)?
            .set_default("upstream.tx_page_limit", 2)?
            // Load from config files (lower priority)
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config/config").required(false))
            // Override with environment variables (highest priority - loaded last)
            // MINTSCAN_SERVER__PORT=8081 -> server.port = 8081
            // MINTSCAN_UPSTREAM__HELIUS_API_KEY=... -> upstream.helius_api_key
            .add_source(
                Environment::with_prefix("MINTSCAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.helius_base_url.is_empty() {
            return Err(ConfigError::Message(
                "Metadata service base URL must be set".to_string(),
            ));
        }

        if self.upstream.jupiter_quote_url.is_empty() {
            return Err(ConfigError::Message(
                "Swap quote URL must be set".to_string(),
            ));
        }

        if self.upstream.request_timeout_ms == 0 || self.upstream.holder_timeout_ms == 0 {
            return Err(ConfigError::Message(
                "Upstream timeouts must be non-zero".to_string(),
            ));
        }

        if self.upstream.tx_page_limit == 0 {
            return Err(ConfigError::Message(
                "Transaction page limit must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            helius_api_key: None,
            helius_base_url: default_helius_base_url(),
            helius_rpc_url: default_helius_rpc_url(),
            jupiter_quote_url: default_jupiter_quote_url(),
            birdeye_api_key: None,
            birdeye_base_url: default_birdeye_base_url(),
            social_mirror_url: default_social_mirror_url(),
            request_timeout_ms: default_request_timeout(),
            holder_timeout_ms: default_holder_timeout(),
            probe_amount_lamports: default_probe_amount(),
            tx_page_limit: default_tx_page_limit(),
        }
    }
}
