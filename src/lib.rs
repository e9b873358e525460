pub mod config;
pub mod data;
pub mod di;
pub mod entity;
pub mod explorer;
pub mod interactor;
pub mod presenter;
pub mod random;
pub mod router;
pub mod services;
pub mod utils;
pub mod view;

use std::sync::Arc;

use crate::interactor::purchase_interactor::PurchaseInteractorImpl;
use crate::interactor::risk_interactor::RiskInteractorImpl;
use crate::presenter::address_presenter::{AddressDetailsPresenter, AddressDetailsPresenterImpl};
use crate::presenter::contributions_presenter::{ContributionsPresenter, ContributionsPresenterImpl};
use crate::presenter::home_presenter::{HomePresenter, HomePresenterImpl};
use crate::presenter::purchase_presenter::{PurchasePresenter, PurchasePresenterImpl};
use crate::presenter::risk_presenter::{RiskPresenter, RiskPresenterImpl};
use crate::view::address_view::TerminalAddressView;
use crate::view::contributions_view::TerminalContributionsView;
use crate::view::home_view::TerminalHomeView;
use crate::view::purchase_view::TerminalPurchaseView;
use crate::view::risk_view::TerminalRiskView;

// Re-export commonly used items
pub use config::AppConfig;
pub use di::ServiceContainer;
pub use entity::DashboardError;
pub use router::{parse_route, Route};
pub use services::RiskPollerService;
pub use view::{CapturedOutput, Console};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Presenters for every page, wired to terminal views on one console
pub struct Application {
    pub home: Arc<dyn HomePresenter>,
    pub address: Arc<dyn AddressDetailsPresenter>,
    pub risk: Arc<dyn RiskPresenter>,
    pub purchases: Arc<dyn PurchasePresenter>,
    services: Arc<ServiceContainer>,
}

impl Application {
    /// Poller that keeps this application's risk panel fresh
    pub fn risk_poller(&self) -> RiskPollerService {
        RiskPollerService::new(self.risk.clone(), self.services.config().poll_interval())
    }
}

/// Build the page presenters on top of a service container
pub fn create_application(services: Arc<ServiceContainer>, console: Console) -> Application {
    let explorer_config = services.config().explorer;

    let risk: Arc<dyn RiskPresenter> = Arc::new(RiskPresenterImpl::new(
        Arc::new(RiskInteractorImpl::new(services.random_source())),
        Arc::new(TerminalRiskView::new(console.clone())),
    ));

    let contributions: Arc<dyn ContributionsPresenter> = Arc::new(ContributionsPresenterImpl::new(
        services.contributions_interactor(),
        Arc::new(TerminalContributionsView::new(
            console.clone(),
            explorer_config.clone(),
        )),
    ));

    let purchases: Arc<dyn PurchasePresenter> = Arc::new(PurchasePresenterImpl::new(
        Arc::new(PurchaseInteractorImpl::new(services.explorer_service())),
        Arc::new(TerminalPurchaseView::new(console.clone())),
    ));

    let address: Arc<dyn AddressDetailsPresenter> = Arc::new(AddressDetailsPresenterImpl::new(
        Arc::new(TerminalAddressView::new(console.clone(), explorer_config)),
        risk.clone(),
        contributions,
        purchases.clone(),
        services.random_source(),
    ));

    let home: Arc<dyn HomePresenter> = Arc::new(HomePresenterImpl::new(Arc::new(
        TerminalHomeView::new(console),
    )));

    Application {
        home,
        address,
        risk,
        purchases,
        services,
    }
}
