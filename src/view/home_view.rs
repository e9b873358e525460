use anyhow::Result;
use async_trait::async_trait;

use crate::entity::{CategorySummary, SelectOption};
use crate::view::console::Console;
use crate::view::ui;

#[async_trait]
pub trait HomeView: Send + Sync {
    async fn display_rounds(&self, rounds: &[SelectOption], selected: &str) -> Result<()>;
    async fn display_category_summaries(
        &self,
        round: &str,
        summaries: &[CategorySummary],
    ) -> Result<()>;
    async fn display_filters(&self, filters: &[(&str, Vec<SelectOption>)]) -> Result<()>;
}

pub struct TerminalHomeView {
    console: Console,
}

impl TerminalHomeView {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    fn format_option(option: &SelectOption, selected: bool) -> String {
        let marker = if selected { "●" } else { "○" };
        if option.value.is_empty() {
            format!("{} {}", marker, option.text)
        } else {
            format!("{} {} ({})", marker, option.text, option.value)
        }
    }
}

#[async_trait]
impl HomeView for TerminalHomeView {
    async fn display_rounds(&self, rounds: &[SelectOption], selected: &str) -> Result<()> {
        let mut text = ui::heading("Rounds");
        for option in rounds {
            text.push('\n');
            text.push_str(&Self::format_option(option, option.value == selected));
        }
        self.console.print(&text)
    }

    async fn display_category_summaries(
        &self,
        round: &str,
        summaries: &[CategorySummary],
    ) -> Result<()> {
        if summaries.is_empty() {
            return self
                .console
                .print(&format!("No summary available for round {}", round));
        }

        let cards: Vec<String> = summaries
            .iter()
            .map(|summary| {
                ui::card(&[
                    format!("{} {}", summary.title, ui::badge(&summary.color.to_string())),
                    format!("{} of {}", summary.metric, summary.metric_prev),
                    summary.percentage.to_string(),
                ])
            })
            .collect();

        self.console.print(&cards.join("\n"))
    }

    async fn display_filters(&self, filters: &[(&str, Vec<SelectOption>)]) -> Result<()> {
        let mut text = ui::heading("Filters");
        for (title, options) in filters {
            text.push_str(&format!("\n{}:", title));
            for option in options {
                text.push_str(&format!("\n  {}", Self::format_option(option, false)));
            }
        }
        self.console.print(&text)
    }
}
