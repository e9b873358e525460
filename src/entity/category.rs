use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Orange,
    Rose,
    Sky,
    Blue,
    Yellow,
    Emerald,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Orange => write!(f, "orange"),
            Color::Rose => write!(f, "rose"),
            Color::Sky => write!(f, "sky"),
            Color::Blue => write!(f, "blue"),
            Color::Yellow => write!(f, "yellow"),
            Color::Emerald => write!(f, "emerald"),
        }
    }
}

/// Summary statistic for one user category within a round
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub title: &'static str,
    pub metric: &'static str,
    pub metric_prev: &'static str,
    pub percentage: &'static str,
    pub color: Color,
}

/// Option of a filter drop-down
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub text: &'static str,
    pub value: &'static str,
}

/// One summary card on the address page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressMetric {
    pub title: String,
    pub metric: String,
    pub extra: Option<String>,
}
