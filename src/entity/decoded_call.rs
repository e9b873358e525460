use alloy_primitives::{Address, U256};
use std::fmt;

/// A single decoded argument of a contract call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    Address(Address),
    Uint(U256),
    AddressList(Vec<Address>),
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Address(address) => write!(f, "{}", address.to_checksum(None)),
            DecodedValue::Uint(value) => write!(f, "{}", value),
            DecodedValue::AddressList(addresses) => {
                let joined = addresses
                    .iter()
                    .map(|address| address.to_checksum(None))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{}]", joined)
            }
        }
    }
}

/// Call data interpreted against the known signature table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedCall {
    Known {
        function: String,
        fields: Vec<(String, DecodedValue)>,
    },
    /// Unknown or malformed call data, kept verbatim
    Raw(String),
}

impl DecodedCall {
    pub fn field(&self, label: &str) -> Option<&DecodedValue> {
        match self {
            DecodedCall::Known { fields, .. } => fields
                .iter()
                .find(|(name, _)| name == label)
                .map(|(_, value)| value),
            DecodedCall::Raw(_) => None,
        }
    }
}

impl fmt::Display for DecodedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedCall::Known { fields, .. } => {
                let parts = fields
                    .iter()
                    .map(|(label, value)| format!("{}: {}", label, value))
                    .collect::<Vec<_>>();
                write!(f, "{}", parts.join("; "))
            }
            DecodedCall::Raw(input) => write!(f, "Input data: {}", input),
        }
    }
}
