use crate::environment::Environment;

pub(crate) mod client;
pub use client::AnalyticsClient;
pub mod error;
pub mod types;

pub use error::ApiError;
pub use types::{AnalyticsSnapshot, StrikeRow};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AnalyticsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch options-chain analytics for a symbol.
    async fn fetch_analytics(&self, symbol: &str) -> Result<AnalyticsSnapshot, ApiError>;
}
