//! HTTP clients for the upstream data APIs
//!
//! Each upstream is an opaque remote service; these clients own the URL
//! building and response-shape probing, nothing more. No retries, no
//! caching, reads only.

mod holders;
mod metadata;
mod social;
mod swap;
mod transactions;
mod wallet_tokens;

pub use holders::HolderClient;
pub use metadata::MetadataClient;
pub use social::{classify_followers, parse_follower_count, SocialClient};
pub use swap::{route_present, SwapProbe, WSOL_MINT};
pub use transactions::TransactionClient;
pub use wallet_tokens::WalletTokenClient;
