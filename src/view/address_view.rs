use anyhow::Result;
use async_trait::async_trait;

use crate::config::ExplorerConfig;
use crate::entity::AddressMetric;
use crate::utils::truncate_eth_address;
use crate::view::console::Console;
use crate::view::ui;

pub const PAGE_TITLE: &str = "Game Sybil Detection Dashboard";
pub const CALLOUT_TEXT: &str = "This dashboard visualizes real-time and historical player data for Sybil detection in a Web3 game environment.";

#[async_trait]
pub trait AddressView: Send + Sync {
    async fn display_header(&self, address: &str) -> Result<()>;
    async fn display_metrics(&self, metrics: &[AddressMetric], overall_score: u8) -> Result<()>;
}

pub struct TerminalAddressView {
    console: Console,
    explorer: ExplorerConfig,
}

impl TerminalAddressView {
    pub fn new(console: Console, explorer: ExplorerConfig) -> Self {
        Self { console, explorer }
    }

    fn format_metric(metric: &AddressMetric) -> String {
        let value = match &metric.extra {
            Some(extra) => format!("{}   {}", metric.metric, extra),
            None => metric.metric.clone(),
        };
        ui::card(&[metric.title.clone(), value])
    }
}

#[async_trait]
impl AddressView for TerminalAddressView {
    async fn display_header(&self, address: &str) -> Result<()> {
        let short = truncate_eth_address(address);
        let text = format!(
            "{}\n\nPlayer: {} {}\n{} ↗ {}\nHome / {}\n\n⚠ {}",
            ui::heading(PAGE_TITLE),
            address,
            ui::badge("Verified"),
            short,
            self.explorer.address_url(address),
            short,
            CALLOUT_TEXT
        );
        self.console.print(&text)
    }

    async fn display_metrics(&self, metrics: &[AddressMetric], overall_score: u8) -> Result<()> {
        let mut blocks: Vec<String> = metrics.iter().map(Self::format_metric).collect();

        blocks.push(ui::card(&ui::overall_score_lines(overall_score)));

        self.console.print(&blocks.join("\n"))
    }
}
