use crate::entity::DashboardError;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_EXPLORER_API_URL: &str = "https://api.bscscan.com/api";
pub const DEFAULT_EXPLORER_WEB_URL: &str = "https://bscscan.com";
pub const DEFAULT_EXPLORER_API_KEY: &str = "YourApiKeyToken";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Explorer endpoints and request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerConfig {
    /// URL of the `txlist` API
    pub api_url: String,

    /// Base URL used for rendered transaction and address links
    pub web_url: String,

    pub api_key: String,

    /// Number of transactions requested per address
    pub page_size: u32,

    /// Request timeout; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    pub poll_interval_secs: u64,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub explorer: ExplorerConfig,
    pub risk: RiskConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            explorer: ExplorerConfig {
                api_url: DEFAULT_EXPLORER_API_URL.to_string(),
                web_url: DEFAULT_EXPLORER_WEB_URL.to_string(),
                api_key: DEFAULT_EXPLORER_API_KEY.to_string(),
                page_size: DEFAULT_PAGE_SIZE,
                timeout_secs: None,
            },
            risk: RiskConfig {
                poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            },
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, an optional `dashboard.toml` and
    /// `SYBIL_`-prefixed environment variables, in increasing precedence.
    pub fn load() -> Result<Self, DashboardError> {
        Self::load_from(config::File::with_name("dashboard").required(false))
    }

    pub fn load_from<S>(file: S) -> Result<Self, DashboardError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .set_default("explorer.api_url", DEFAULT_EXPLORER_API_URL)?
            .set_default("explorer.web_url", DEFAULT_EXPLORER_WEB_URL)?
            .set_default("explorer.api_key", DEFAULT_EXPLORER_API_KEY)?
            .set_default("explorer.page_size", DEFAULT_PAGE_SIZE as i64)?
            .set_default("risk.poll_interval_secs", DEFAULT_POLL_INTERVAL_SECS as i64)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("SYBIL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.risk.poll_interval_secs.max(1))
    }
}

impl ExplorerConfig {
    pub fn tx_url(&self, transaction_id: &str) -> String {
        format!("{}/tx/{}", self.web_url.trim_end_matches('/'), transaction_id)
    }

    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.web_url.trim_end_matches('/'), address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_apply_without_sources() {
        let config =
            AppConfig::load_from(config::File::from_str("", FileFormat::Toml)).unwrap();

        assert_eq!(config.explorer.api_url, DEFAULT_EXPLORER_API_URL);
        assert_eq!(config.explorer.page_size, 10);
        assert_eq!(config.explorer.timeout_secs, None);
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
    }

    #[test]
    fn file_overrides_defaults() {
        let toml = r#"
            [explorer]
            web_url = "https://testnet.bscscan.com/"
            page_size = 25

            [risk]
            poll_interval_secs = 5
        "#;
        let config =
            AppConfig::load_from(config::File::from_str(toml, FileFormat::Toml)).unwrap();

        assert_eq!(config.explorer.page_size, 25);
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(
            config.explorer.tx_url("0xabc"),
            "https://testnet.bscscan.com/tx/0xabc"
        );
        assert_eq!(
            config.explorer.address_url("0xdef"),
            "https://testnet.bscscan.com/address/0xdef"
        );
    }
}
