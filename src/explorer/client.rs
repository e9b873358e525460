use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::ExplorerConfig;
use crate::entity::{DashboardError, ExplorerTransaction};
use crate::explorer::models::TxListResponse;

/// Interface to the block explorer account API
#[async_trait]
pub trait ExplorerService: Send + Sync {
    /// First page of an address's transactions, ascending by block
    async fn get_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<ExplorerTransaction>, DashboardError>;
}

/// BscScan-compatible implementation of the explorer service
pub struct BscScanExplorerService {
    http_client: Client,
    config: ExplorerConfig,
}

impl BscScanExplorerService {
    pub fn new(config: ExplorerConfig) -> Result<Self, DashboardError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http_client: builder.build()?,
            config,
        })
    }

    /// Turns the response envelope into transactions, rejecting non-success statuses
    fn parse_envelope(
        envelope: TxListResponse,
    ) -> Result<Vec<ExplorerTransaction>, DashboardError> {
        if !envelope.is_success() {
            let detail = match envelope.result.as_str() {
                Some(reason) if !reason.is_empty() => format!("{} ({})", envelope.message, reason),
                _ => envelope.message,
            };
            return Err(DashboardError::ExplorerStatus {
                status: envelope.status,
                message: detail,
            });
        }

        Ok(serde_json::from_value(envelope.result)?)
    }
}

#[async_trait]
impl ExplorerService for BscScanExplorerService {
    async fn get_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<ExplorerTransaction>, DashboardError> {
        let page_size = self.config.page_size.to_string();

        debug!("Requesting transaction list for {}", address);

        let response = self
            .http_client
            .get(&self.config.api_url)
            .query(&[
                ("module", "account"),
                ("action", "txlist"),
                ("address", address),
                ("startblock", "0"),
                ("endblock", "99999999"),
                ("page", "1"),
                ("offset", page_size.as_str()),
                ("sort", "asc"),
                ("apikey", self.config.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let envelope: TxListResponse = serde_json::from_str(&body)?;

        let transactions = Self::parse_envelope(envelope)?;
        debug!(
            "Explorer returned {} transactions for {}",
            transactions.len(),
            address
        );

        Ok(transactions)
    }
}
