use anyhow::Result;
use async_trait::async_trait;

use crate::data::risk_level;
use crate::entity::RiskSnapshot;
use crate::view::console::Console;
use crate::view::ui;

#[async_trait]
pub trait RiskView: Send + Sync {
    async fn display_risk_scores(&self, snapshot: &RiskSnapshot) -> Result<()>;
}

pub struct TerminalRiskView {
    console: Console,
}

impl TerminalRiskView {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

#[async_trait]
impl RiskView for TerminalRiskView {
    async fn display_risk_scores(&self, snapshot: &RiskSnapshot) -> Result<()> {
        let mut lines = vec!["Game Sybil Risk Scores".to_string(), String::new()];

        for risk in &snapshot.items {
            lines.push(format!(
                "{} ({}): {} % {}",
                risk.name,
                risk.level,
                risk.score,
                risk_level(risk.score)
            ));
            lines.push(ui::progress_bar(risk.score));
        }

        lines.push(String::new());
        lines.extend(ui::overall_score_lines(snapshot.overall_score));

        lines.push(String::new());
        lines.push(format!(
            "Updated {}",
            snapshot.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        self.console.print(&ui::card(&lines))
    }
}
