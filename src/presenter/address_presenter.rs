use crate::data;
use crate::interactor::contributions_interactor::ROUND_IDS;
use crate::presenter::contributions_presenter::ContributionsPresenter;
use crate::presenter::purchase_presenter::PurchasePresenter;
use crate::presenter::risk_presenter::RiskPresenter;
use crate::random::RandomSource;
use crate::view::address_view::AddressView;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::sync::Arc;

#[async_trait]
pub trait AddressDetailsPresenter: Send + Sync {
    async fn show_page(&self, address: &str) -> Result<()>;
}

/// Composes the address page out of the feed presenters
pub struct AddressDetailsPresenterImpl<V> {
    view: Arc<V>,
    risk_presenter: Arc<dyn RiskPresenter>,
    contributions_presenter: Arc<dyn ContributionsPresenter>,
    purchase_presenter: Arc<dyn PurchasePresenter>,
    rng: Arc<dyn RandomSource>,
}

impl<V> AddressDetailsPresenterImpl<V>
where
    V: AddressView,
{
    pub fn new(
        view: Arc<V>,
        risk_presenter: Arc<dyn RiskPresenter>,
        contributions_presenter: Arc<dyn ContributionsPresenter>,
        purchase_presenter: Arc<dyn PurchasePresenter>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            view,
            risk_presenter,
            contributions_presenter,
            purchase_presenter,
            rng,
        }
    }
}

#[async_trait]
impl<V> AddressDetailsPresenter for AddressDetailsPresenterImpl<V>
where
    V: AddressView + Send + Sync,
{
    async fn show_page(&self, address: &str) -> Result<()> {
        info!("Rendering address page for {}", address);

        self.view.display_header(address).await?;

        let metrics = data::address_metrics(self.rng.as_ref(), Utc::now());
        let snapshot = self.risk_presenter.snapshot().await;
        self.view
            .display_metrics(&metrics, snapshot.overall_score)
            .await?;

        self.risk_presenter.show_risk_scores().await?;

        for (index, round) in ROUND_IDS.iter().enumerate() {
            self.contributions_presenter
                .show_round(round, index == 0)
                .await
                .with_context(|| format!("Failed to render contributions for {}", round))?;
        }

        self.purchase_presenter.show_purchases(address).await
    }
}
