use std::sync::Arc;

use crate::config::AppConfig;
use crate::entity::DashboardError;
use crate::explorer::{BscScanExplorerService, ExplorerService};
use crate::interactor::contributions_interactor::ContributionsInteractorImpl;
use crate::random::{RandomSource, ThreadRandom};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Core services
    explorer_service: Arc<dyn ExplorerService + Send + Sync>,
    random_source: Arc<dyn RandomSource>,

    // Mock round data is generated once per session
    contributions_interactor: Arc<ContributionsInteractorImpl>,

    // Configuration
    config: AppConfig,
}

impl ServiceContainer {
    /// Create a container talking to the configured block explorer
    pub fn new(config: AppConfig) -> Result<Self, DashboardError> {
        let explorer_service = Arc::new(BscScanExplorerService::new(config.explorer.clone())?)
            as Arc<dyn ExplorerService + Send + Sync>;
        let random_source = Arc::new(ThreadRandom) as Arc<dyn RandomSource>;

        Ok(Self::with_services(config, explorer_service, random_source))
    }

    /// Create a container around externally supplied services
    pub fn with_services(
        config: AppConfig,
        explorer_service: Arc<dyn ExplorerService + Send + Sync>,
        random_source: Arc<dyn RandomSource>,
    ) -> Self {
        let contributions_interactor =
            Arc::new(ContributionsInteractorImpl::new(random_source.as_ref()));

        Self {
            explorer_service,
            random_source,
            contributions_interactor,
            config,
        }
    }

    // Accessor methods

    pub fn explorer_service(&self) -> Arc<dyn ExplorerService + Send + Sync> {
        self.explorer_service.clone()
    }

    pub fn random_source(&self) -> Arc<dyn RandomSource> {
        self.random_source.clone()
    }

    pub fn contributions_interactor(&self) -> Arc<ContributionsInteractorImpl> {
        self.contributions_interactor.clone()
    }

    pub fn config(&self) -> AppConfig {
        self.config.clone()
    }
}
