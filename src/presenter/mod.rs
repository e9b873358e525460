pub mod address_presenter;
pub mod contributions_presenter;
pub mod home_presenter;
pub mod purchase_presenter;
pub mod risk_presenter;
