mod category;
mod contribution;
mod dashboard_error;
mod decoded_call;
mod explorer_transaction;
mod purchase;
mod risk_item;

pub use category::{AddressMetric, CategorySummary, Color, SelectOption};
pub use contribution::{Contribution, CONTRIBUTION_CURRENCY};
pub use dashboard_error::DashboardError;
pub use decoded_call::{DecodedCall, DecodedValue};
pub use explorer_transaction::ExplorerTransaction;
pub use purchase::{FeedState, PurchaseCard};
pub use risk_item::{RiskItem, RiskSnapshot};
