use crate::entity::RiskSnapshot;
use crate::interactor::risk_interactor::RiskInteractor;
use crate::view::risk_view::RiskView;
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tokio::sync::RwLock;

#[async_trait]
pub trait RiskPresenter: Send + Sync {
    /// Renders the current risk list
    async fn show_risk_scores(&self) -> Result<()>;

    /// Replaces the risk list with fresh scores and renders it
    async fn refresh_risk_scores(&self) -> Result<()>;

    async fn snapshot(&self) -> RiskSnapshot;
}

pub struct RiskPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    snapshot: RwLock<RiskSnapshot>,
}

impl<I, V> RiskPresenterImpl<I, V>
where
    I: RiskInteractor,
    V: RiskView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        let snapshot = RwLock::new(interactor.initial_snapshot());
        Self {
            interactor,
            view,
            snapshot,
        }
    }
}

#[async_trait]
impl<I, V> RiskPresenter for RiskPresenterImpl<I, V>
where
    I: RiskInteractor + Send + Sync,
    V: RiskView + Send + Sync,
{
    async fn show_risk_scores(&self) -> Result<()> {
        let snapshot = self.snapshot.read().await.clone();
        self.view.display_risk_scores(&snapshot).await
    }

    async fn refresh_risk_scores(&self) -> Result<()> {
        let fresh = self.interactor.fetch_risk_scores().await?;
        debug!("Risk scores refreshed, overall {}", fresh.overall_score);

        *self.snapshot.write().await = fresh.clone();
        self.view.display_risk_scores(&fresh).await
    }

    async fn snapshot(&self) -> RiskSnapshot {
        self.snapshot.read().await.clone()
    }
}
