use serde::Deserialize;

pub const SUCCESS_STATUS: &str = "1";

/// Envelope of every explorer API response.
///
/// `result` is an array of transactions on success but a plain string
/// (e.g. "Invalid API Key") on failure, so it is kept untyped until the
/// status has been checked.
#[derive(Debug, Clone, Deserialize)]
pub struct TxListResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

impl TxListResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}
