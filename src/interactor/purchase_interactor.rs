use async_trait::async_trait;
use chrono::{Local, TimeZone};
use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use crate::entity::{DashboardError, ExplorerTransaction, PurchaseCard};
use crate::explorer::{ExplorerService, SignatureTable};

const WEI_PER_BNB: u64 = 1_000_000_000_000_000_000;

#[async_trait]
pub trait PurchaseInteractor: Send + Sync {
    /// Successful transactions with call data, decoded into feed cards
    async fn get_purchases(&self, address: &str) -> Result<Vec<PurchaseCard>, DashboardError>;
}

pub struct PurchaseInteractorImpl {
    explorer_service: Arc<dyn ExplorerService + Send + Sync>,
    signatures: SignatureTable,
}

impl PurchaseInteractorImpl {
    pub fn new(explorer_service: Arc<dyn ExplorerService + Send + Sync>) -> Self {
        Self {
            explorer_service,
            signatures: SignatureTable::known(),
        }
    }

    fn to_card(&self, tx: ExplorerTransaction) -> PurchaseCard {
        let call = self.signatures.decode(&tx.function_name, &tx.input);
        let status = if tx.succeeded() { "Success" } else { "Failed" };

        PurchaseCard {
            value: wei_to_bnb(&tx.value),
            status: status.to_string(),
            date: format_timestamp(&tx.time_stamp),
            call,
            hash: tx.hash,
            from: tx.from,
            to: tx.to,
            block_number: tx.block_number,
            function_name: tx.function_name,
        }
    }
}

#[async_trait]
impl PurchaseInteractor for PurchaseInteractorImpl {
    async fn get_purchases(&self, address: &str) -> Result<Vec<PurchaseCard>, DashboardError> {
        let transactions = self.explorer_service.get_transactions(address).await?;
        let total = transactions.len();

        let cards: Vec<PurchaseCard> = transactions
            .into_iter()
            .filter(|tx| tx.succeeded() && tx.has_call_data())
            .map(|tx| self.to_card(tx))
            .collect();

        debug!("Kept {} of {} transactions for {}", cards.len(), total, address);
        Ok(cards)
    }
}

/// Converts a wei amount to BNB. Unparseable values are returned unchanged.
pub fn wei_to_bnb(value: &str) -> String {
    Decimal::from_str(value)
        .ok()
        .and_then(|wei| wei.checked_div(Decimal::from(WEI_PER_BNB)))
        .map(|bnb| bnb.normalize().to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Formats unix seconds as a local date-time. Unparseable values are returned unchanged.
pub fn format_timestamp(timestamp: &str) -> String {
    timestamp
        .parse::<i64>()
        .ok()
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|dt| dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_wei_to_bnb() {
        assert_eq!(wei_to_bnb("50000000000000000"), "0.05");
        assert_eq!(wei_to_bnb("1000000000000000000"), "1");
        assert_eq!(wei_to_bnb("0"), "0");
        assert_eq!(wei_to_bnb("1"), "0.000000000000000001");
        assert_eq!(wei_to_bnb("not-a-number"), "not-a-number");
    }

    #[test]
    fn formats_unix_timestamps() {
        let formatted = format_timestamp("1700000000");
        assert!(formatted.contains("2023"), "{}", formatted);
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
