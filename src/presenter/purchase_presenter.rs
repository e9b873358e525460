use crate::entity::FeedState;
use crate::interactor::purchase_interactor::PurchaseInteractor;
use crate::view::purchase_view::PurchaseView;
use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The only failure text users see; the cause goes to the log
pub const PURCHASE_FEED_ERROR: &str = "Failed to fetch transactions.";

#[async_trait]
pub trait PurchasePresenter: Send + Sync {
    async fn show_purchases(&self, address: &str) -> Result<()>;
    async fn state(&self) -> FeedState;
}

pub struct PurchasePresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    generation: AtomicU64,
    state: RwLock<FeedState>,
}

impl<I, V> PurchasePresenterImpl<I, V>
where
    I: PurchaseInteractor,
    V: PurchaseView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self {
            interactor,
            view,
            generation: AtomicU64::new(0),
            state: RwLock::new(FeedState::Loading),
        }
    }
}

#[async_trait]
impl<I, V> PurchasePresenter for PurchasePresenterImpl<I, V>
where
    I: PurchaseInteractor + Send + Sync,
    V: PurchaseView + Send + Sync,
{
    async fn show_purchases(&self, address: &str) -> Result<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            *state = FeedState::Loading;
            self.view.display_loading(address).await?;
        }

        let result = self.interactor.get_purchases(address).await;

        // Holding the lock across the check keeps a newer load from
        // interleaving between the generation test and the state update.
        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            warn!("Discarding stale purchase response for {}", address);
            return Ok(());
        }

        *state = match result {
            Ok(cards) if cards.is_empty() => FeedState::Empty,
            Ok(cards) => FeedState::Loaded(cards),
            Err(e) => {
                warn!("Failed to load purchases for {}: {}", address, e);
                FeedState::Failed(PURCHASE_FEED_ERROR.to_string())
            }
        };

        match &*state {
            FeedState::Loaded(cards) => self.view.display_purchases(cards).await?,
            FeedState::Empty => self.view.display_empty().await?,
            FeedState::Failed(message) => self.view.display_error(message).await?,
            FeedState::Loading => {}
        }

        Ok(())
    }

    async fn state(&self) -> FeedState {
        self.state.read().await.clone()
    }
}
