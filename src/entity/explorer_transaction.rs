use serde::{Deserialize, Serialize};

/// Transaction record as returned by the explorer `txlist` endpoint.
///
/// The explorer encodes every field as a string, including numbers and flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExplorerTransaction {
    pub hash: String,
    pub value: String,          // Value in wei
    pub is_error: String,       // "0" for success, "1" for failure
    pub block_number: String,
    pub time_stamp: String,     // Unix seconds
    pub input: String,          // Hex encoded call data
    pub function_name: String,
    pub from: String,
    pub to: String,
}

impl ExplorerTransaction {
    pub fn succeeded(&self) -> bool {
        self.is_error == "0"
    }

    /// True when the transaction carries call data beyond the empty `0x` marker
    pub fn has_call_data(&self) -> bool {
        !self.input.is_empty() && self.input != "0x"
    }
}
