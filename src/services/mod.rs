pub mod risk_poller;

pub use risk_poller::RiskPollerService;
