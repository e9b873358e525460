use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const CONTRIBUTION_CURRENCY: &str = "BUSD";

/// Mock contribution made by a player during a game round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub transaction_id: String,  // 0x + 64 hex digits
    pub address: String,         // 0x + 40 hex digits
    pub gameplay_date: NaiveDate,
    pub amount: Decimal,         // Amount in BUSD, two decimal places
}

impl Contribution {
    /// Gameplay date in `dd-mm-yyyy` form
    pub fn gameplay_date_label(&self) -> String {
        self.gameplay_date.format("%d-%m-%Y").to_string()
    }

    pub fn amount_label(&self) -> String {
        format!("{} {}", self.amount, CONTRIBUTION_CURRENCY)
    }
}
