#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Explorer API returned status {status}: {message}")]
    ExplorerStatus { status: String, message: String },

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Failed to decode call data: {0}")]
    Decode(String),
}
