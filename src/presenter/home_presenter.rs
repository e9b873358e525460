use crate::data;
use crate::view::home_view::HomeView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait HomePresenter: Send + Sync {
    async fn show_overview(&self, round: &str) -> Result<()>;
}

pub struct HomePresenterImpl<V> {
    view: Arc<V>,
}

impl<V> HomePresenterImpl<V>
where
    V: HomeView,
{
    pub fn new(view: Arc<V>) -> Self {
        Self { view }
    }
}

#[async_trait]
impl<V> HomePresenter for HomePresenterImpl<V>
where
    V: HomeView + Send + Sync,
{
    async fn show_overview(&self, round: &str) -> Result<()> {
        self.view.display_rounds(&data::rounds(), round).await?;
        self.view
            .display_category_summaries(round, &data::categories(round))
            .await?;

        let filters = [
            ("Score", data::score_options()),
            ("Risk", data::risk_options()),
            ("Status", data::status_options()),
        ];
        self.view.display_filters(&filters).await
    }
}
