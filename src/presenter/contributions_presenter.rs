use crate::interactor::contributions_interactor::ContributionsInteractor;
use crate::view::contributions_view::ContributionsView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ContributionsPresenter: Send + Sync {
    async fn show_round(&self, round: &str, is_first: bool) -> Result<()>;
}

pub struct ContributionsPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> ContributionsPresenterImpl<I, V>
where
    I: ContributionsInteractor,
    V: ContributionsView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> ContributionsPresenter for ContributionsPresenterImpl<I, V>
where
    I: ContributionsInteractor + Send + Sync,
    V: ContributionsView + Send + Sync,
{
    async fn show_round(&self, round: &str, is_first: bool) -> Result<()> {
        let contributions = self.interactor.get_round_contributions(round).await;
        self.view
            .display_contributions(round, is_first, &contributions)
            .await
    }
}
