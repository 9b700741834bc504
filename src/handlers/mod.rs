//! HTTP handlers for mintscan

mod health;
mod scan;

pub use health::*;
pub use scan::*;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::scanner::Scanner;

/// Shared application state, constructed once in `main` and passed by
/// reference into every handler. No handler reads ambient global state.
pub struct AppState {
    /// Loaded configuration
    pub config: AppConfig,
    /// The aggregation pipeline
    pub scanner: Scanner,
    /// Application start time
    pub started_at: DateTime<Utc>,
}
