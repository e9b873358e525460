use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub name: String,
    pub score: u8,     // 0..=100
    pub level: String, // Exposure labelled as a dollar amount, e.g. "$5000"
}

impl RiskItem {
    pub fn new(name: &str, score: u8, level: &str) -> Self {
        Self {
            name: name.to_string(),
            score,
            level: level.to_string(),
        }
    }
}

/// Latest state of the risk list. No history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSnapshot {
    pub items: Vec<RiskItem>,
    pub overall_score: u8,
    pub updated_at: DateTime<Utc>,
}
