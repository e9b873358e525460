pub mod address_view;
pub mod console;
pub mod contributions_view;
pub mod home_view;
pub mod purchase_view;
pub mod risk_view;
pub mod ui;

pub use console::{CapturedOutput, Console};
