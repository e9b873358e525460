use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::entity::{RiskItem, RiskSnapshot};
use crate::random::RandomSource;

pub const MAX_RISK_SCORE: u8 = 100;

/// Risk factors tracked for every player, with their dollar exposure
const RISK_FACTORS: [(&str, &str); 4] = [
    ("High Transaction Frequency", "$5000"),
    ("Suspicious IP Matching", "$3000"),
    ("Duplicate Accounts", "$7000"),
    ("Unusual Login Patterns", "$4000"),
];

const INITIAL_SCORES: [u8; 4] = [40, 55, 70, 60];

pub fn initial_risk_list() -> Vec<RiskItem> {
    RISK_FACTORS
        .iter()
        .zip(INITIAL_SCORES)
        .map(|((name, level), score)| RiskItem::new(name, score, level))
        .collect()
}

/// Mean of all scores rounded half up; zero for an empty list
pub fn overall_risk_score(items: &[RiskItem]) -> u8 {
    if items.is_empty() {
        return 0;
    }

    let n = items.len() as u64;
    let total: u64 = items.iter().map(|item| item.score as u64).sum();
    ((2 * total + n) / (2 * n)) as u8
}

pub fn snapshot(items: Vec<RiskItem>) -> RiskSnapshot {
    RiskSnapshot {
        overall_score: overall_risk_score(&items),
        items,
        updated_at: Utc::now(),
    }
}

#[async_trait]
pub trait RiskInteractor: Send + Sync {
    fn initial_snapshot(&self) -> RiskSnapshot;

    /// Latest risk scores for the player
    async fn fetch_risk_scores(&self) -> Result<RiskSnapshot>;
}

/// Produces random scores in place of a real scoring backend
pub struct RiskInteractorImpl {
    rng: Arc<dyn RandomSource>,
}

impl RiskInteractorImpl {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl RiskInteractor for RiskInteractorImpl {
    fn initial_snapshot(&self) -> RiskSnapshot {
        snapshot(initial_risk_list())
    }

    async fn fetch_risk_scores(&self) -> Result<RiskSnapshot> {
        let items = RISK_FACTORS
            .iter()
            .map(|(name, level)| {
                let score = self.rng.next_in_range(0, MAX_RISK_SCORE as u64) as u8;
                RiskItem::new(name, score, level)
            })
            .collect();

        Ok(snapshot(items))
    }
}
