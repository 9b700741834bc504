//! mintscan library
//!
//! Token-risk aggregation service for Solana mint addresses.
//! This library exposes core modules for testing.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod scanner;
pub mod upstream;

// Re-export commonly used types for tests
pub use config::{AppConfig, ServerConfig, UpstreamConfig};
pub use error::{AppError, AppResult};
pub use handlers::{health_check, scan_handler, AppState};
pub use models::{
    CreatorBadge, CreatorInfo, EngagementTier, HolderEntry, ScanResult, Socials,
};
pub use scanner::Scanner;
