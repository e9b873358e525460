pub mod contributions_interactor;
pub mod purchase_interactor;
pub mod risk_interactor;
