use anyhow::Result;
use async_trait::async_trait;

use crate::entity::PurchaseCard;
use crate::view::console::Console;
use crate::view::ui;

pub const PURCHASES_TITLE: &str = "In-Game Purchases and Subscriptions";
pub const NO_PURCHASES_MESSAGE: &str =
    "No in-game purchases or subscriptions found for this address.";

#[async_trait]
pub trait PurchaseView: Send + Sync {
    async fn display_loading(&self, address: &str) -> Result<()>;
    async fn display_purchases(&self, cards: &[PurchaseCard]) -> Result<()>;
    async fn display_empty(&self) -> Result<()>;
    async fn display_error(&self, error_message: &str) -> Result<()>;
}

pub struct TerminalPurchaseView {
    console: Console,
}

impl TerminalPurchaseView {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    fn format_card(card: &PurchaseCard) -> String {
        ui::card(&[
            "Transaction Hash".to_string(),
            card.hash.clone(),
            format!("From: {}", card.from),
            format!("To: {}", card.to),
            format!("Value: {} BNB", card.value),
            format!("Status: {}", card.status),
            format!("Block: {}", card.block_number),
            format!("Date: {}", card.date),
            format!("Function: {}", card.function_name),
            card.call.to_string(),
        ])
    }
}

#[async_trait]
impl PurchaseView for TerminalPurchaseView {
    async fn display_loading(&self, _address: &str) -> Result<()> {
        self.console.print("Loading transactions...")
    }

    async fn display_purchases(&self, cards: &[PurchaseCard]) -> Result<()> {
        let mut text = ui::heading(PURCHASES_TITLE);
        for card in cards {
            text.push('\n');
            text.push_str(&Self::format_card(card));
        }
        self.console.print(&text)
    }

    async fn display_empty(&self) -> Result<()> {
        let text = format!("{}\n{}", ui::heading(PURCHASES_TITLE), NO_PURCHASES_MESSAGE);
        self.console.print(&text)
    }

    async fn display_error(&self, error_message: &str) -> Result<()> {
        self.console.print(&format!("❌ {}", error_message))
    }
}
