use crate::presenter::risk_presenter::RiskPresenter;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// Background task that refreshes the risk scores on a fixed period
pub struct RiskPollerService {
    presenter: Arc<dyn RiskPresenter>,
    period: Duration,
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RiskPollerService {
    pub fn new(presenter: Arc<dyn RiskPresenter>, period: Duration) -> Self {
        Self {
            presenter,
            period,
            stop_tx: None,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    // Start polling; the first refresh happens one full period from now
    pub fn start(&mut self) {
        if self.stop_tx.is_some() {
            warn!("Risk poller is already running");
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
        self.stop_tx = Some(stop_tx);

        let presenter = self.presenter.clone();
        let period = self.period;

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            let mut last_run = Instant::now();

            loop {
                select! {
                    _ = ticker.tick() => {
                        debug!("Refreshing risk scores (last run: {:.2?} ago)", last_run.elapsed());

                        if let Err(e) = presenter.refresh_risk_scores().await {
                            error!("Error refreshing risk scores: {}", e);
                        }

                        last_run = Instant::now();
                    }
                    _ = stop_rx.recv() => {
                        info!("Stopping risk poller");
                        break;
                    }
                }
            }
        }));

        info!("Risk poller started, refreshing every {:?}", self.period);
    }

    // Stop polling and wait for the task to exit
    pub async fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(()).await;
            info!("Risk poller stop signal sent");
        }

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                error!("Risk poller task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for RiskPollerService {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
