mod dto;
mod types;

use reqwest::Client;
use tracing::debug;

use crate::errors::ExportResult;
use dto::TransferList;

pub use dto::{FeeSummary, Transfer};
pub use types::{TransferDate, parse_from_date};

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

// The transfer summary object was removed in later API versions; the
// pinned version keeps the response shape the DTOs expect.
const STRIPE_API_VERSION: &str = "2013-08-13";

/// Explicit client configuration, constructed once by the caller and
/// handed to [`StripeClient`] by ownership.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub api_key: String,
    pub api_version: String,
}

impl StripeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_version: STRIPE_API_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StripeClient {
    config: StripeConfig,
    http: Client,
}

impl StripeClient {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Request a single page of transfers created strictly after `since`
    /// (Unix seconds). `count` is passed through untouched; the API caps
    /// it at 100 server side.
    pub async fn list_transfers(&self, since: i64, count: u32) -> ExportResult<Vec<Transfer>> {
        debug!(since, count, "listing transfers");

        let body = self
            .http
            .get(format!("{STRIPE_API_BASE}/transfers"))
            .bearer_auth(&self.config.api_key)
            .header("Stripe-Version", &self.config.api_version)
            .query(&[("count", count.to_string()), ("date[gt]", since.to_string())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let list = serde_json::from_str::<TransferList>(&body)?;
        Ok(list.data)
    }
}
