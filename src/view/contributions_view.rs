use anyhow::Result;
use async_trait::async_trait;

use crate::config::ExplorerConfig;
use crate::entity::Contribution;
use crate::utils::shorten_transaction_id;
use crate::view::console::Console;
use crate::view::ui::{self, Align, Table};

pub const EMPTY_ROUND_MESSAGE: &str =
    "No transactions found for this round. Try refreshing the page or check back later.";

#[async_trait]
pub trait ContributionsView: Send + Sync {
    async fn display_contributions(
        &self,
        round: &str,
        is_first: bool,
        contributions: &[Contribution],
    ) -> Result<()>;
}

pub struct TerminalContributionsView {
    console: Console,
    explorer: ExplorerConfig,
}

impl TerminalContributionsView {
    pub fn new(console: Console, explorer: ExplorerConfig) -> Self {
        Self { console, explorer }
    }

    fn format_round(&self, round: &str, is_first: bool, contributions: &[Contribution]) -> String {
        let mut table = Table::new(vec!["Transaction ID", "Gameplay Date", "Amount"])
            .align(2, Align::Right)
            .placeholder(EMPTY_ROUND_MESSAGE);

        for item in contributions {
            table.add_row(vec![
                shorten_transaction_id(&item.transaction_id),
                item.gameplay_date_label(),
                item.amount_label(),
            ]);
        }

        let mut text = String::new();
        if !is_first {
            text.push('\n');
        }
        text.push_str(&format!(
            "{} Contributions {}\n",
            round,
            ui::badge(&contributions.len().to_string())
        ));
        text.push_str(&format!("List of contributions for {}\n\n", round));
        text.push_str(&table.render());

        for item in contributions {
            text.push_str(&format!(
                "\n  ↗ {}",
                self.explorer.tx_url(&item.transaction_id)
            ));
        }

        text
    }
}

#[async_trait]
impl ContributionsView for TerminalContributionsView {
    async fn display_contributions(
        &self,
        round: &str,
        is_first: bool,
        contributions: &[Contribution],
    ) -> Result<()> {
        let text = self.format_round(round, is_first, contributions);
        self.console.print(&text)
    }
}
