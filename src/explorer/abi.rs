use alloy_primitives::{hex, keccak256, Address, U256};
use log::debug;

use crate::entity::{DashboardError, DecodedCall, DecodedValue};

const WORD: usize = 32;
const SELECTOR_LEN: usize = 4;

/// ABI type of a call argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Address,
    Uint256,
    AddressArray,
}

impl ParamKind {
    pub fn abi_name(&self) -> &'static str {
        match self {
            ParamKind::Address => "address",
            ParamKind::Uint256 => "uint256",
            ParamKind::AddressArray => "address[]",
        }
    }
}

/// A contract function the dashboard knows how to decode
#[derive(Debug, Clone)]
pub struct CallSignature {
    pub name: String,
    pub params: Vec<(String, ParamKind)>, // Display label and type, in call order
    pub selector: [u8; 4],
}

impl CallSignature {
    pub fn new(name: &str, params: &[(&str, ParamKind)]) -> Self {
        let params: Vec<(String, ParamKind)> = params
            .iter()
            .map(|(label, kind)| (label.to_string(), *kind))
            .collect();
        let canonical = canonical_form(name, params.iter().map(|(_, kind)| kind.abi_name()));

        let hash = keccak256(canonical.as_bytes());
        let mut selector = [0u8; SELECTOR_LEN];
        selector.copy_from_slice(&hash[..SELECTOR_LEN]);

        Self {
            name: name.to_string(),
            params,
            selector,
        }
    }

    /// `name(type1,type2)` form the selector is derived from
    pub fn canonical(&self) -> String {
        canonical_form(&self.name, self.params.iter().map(|(_, kind)| kind.abi_name()))
    }

    /// Decodes the arguments that follow the selector
    pub fn decode_args(&self, args: &[u8]) -> Result<Vec<(String, DecodedValue)>, DashboardError> {
        self.params
            .iter()
            .enumerate()
            .map(|(index, (label, kind))| {
                let head = word(args, index * WORD)?;
                let value = match kind {
                    ParamKind::Address => DecodedValue::Address(read_address(head)?),
                    ParamKind::Uint256 => DecodedValue::Uint(U256::from_be_slice(head)),
                    ParamKind::AddressArray => {
                        let offset = read_offset(head)?;
                        let len = read_offset(word(args, offset)?)?;
                        let addresses = (0..len)
                            .map(|i| {
                                let position = offset
                                    .checked_add(WORD * (i + 1))
                                    .ok_or_else(|| DashboardError::Decode("offset overflow".into()))?;
                                read_address(word(args, position)?)
                            })
                            .collect::<Result<Vec<_>, _>>()?;
                        DecodedValue::AddressList(addresses)
                    }
                };
                Ok((label.clone(), value))
            })
            .collect()
    }
}

/// Selector-indexed table of known call signatures
#[derive(Debug, Clone)]
pub struct SignatureTable {
    entries: Vec<CallSignature>,
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self::known()
    }
}

impl SignatureTable {
    pub fn new(entries: Vec<CallSignature>) -> Self {
        Self { entries }
    }

    /// Subscription contract functions used by the game
    pub fn known() -> Self {
        Self::new(vec![
            CallSignature::new(
                "addSubscribersInBulk",
                &[("Subscribers", ParamKind::AddressArray)],
            ),
            CallSignature::new(
                "subscribe",
                &[
                    ("Token Address", ParamKind::Address),
                    ("Amount", ParamKind::Uint256),
                ],
            ),
            CallSignature::new(
                "subscribeNFT",
                &[
                    ("NFT Address", ParamKind::Address),
                    ("Token ID", ParamKind::Uint256),
                    ("Token Address", ParamKind::Address),
                    ("Token Amount", ParamKind::Uint256),
                ],
            ),
        ])
    }

    pub fn lookup(&self, selector: &[u8]) -> Option<&CallSignature> {
        self.entries.iter().find(|entry| entry.selector[..] == *selector)
    }

    /// Decodes hex call data. Anything that does not match a table entry is
    /// returned verbatim as `DecodedCall::Raw`.
    pub fn decode(&self, function_name: &str, input: &str) -> DecodedCall {
        let raw = || DecodedCall::Raw(input.to_string());

        let bytes = match hex::decode(input) {
            Ok(bytes) if bytes.len() >= SELECTOR_LEN => bytes,
            _ => return raw(),
        };

        let (selector, args) = bytes.split_at(SELECTOR_LEN);
        let Some(entry) = self.lookup(selector) else {
            return raw();
        };

        if let Some(reported) = normalize_signature(function_name) {
            if reported != entry.canonical() {
                debug!(
                    "Explorer reports {} for selector of {}",
                    reported,
                    entry.canonical()
                );
            }
        }

        match entry.decode_args(args) {
            Ok(fields) => DecodedCall::Known {
                function: entry.name.clone(),
                fields,
            },
            Err(e) => {
                debug!("Falling back to raw input for {}: {}", entry.name, e);
                raw()
            }
        }
    }
}

/// Strips argument names and whitespace from a human readable signature:
/// `subscribe(address tokenAddress, uint256 amount)` becomes
/// `subscribe(address,uint256)`.
pub fn normalize_signature(signature: &str) -> Option<String> {
    let open = signature.find('(')?;
    let close = signature.rfind(')')?;
    if close < open {
        return None;
    }

    let name = signature[..open].trim();
    if name.is_empty() {
        return None;
    }

    let types = signature[open + 1..close]
        .split(',')
        .filter_map(|arg| arg.split_whitespace().next());

    Some(canonical_form(name, types))
}

fn canonical_form<'a>(name: &str, types: impl Iterator<Item = &'a str>) -> String {
    format!("{}({})", name, types.collect::<Vec<_>>().join(","))
}

fn word(data: &[u8], offset: usize) -> Result<&[u8], DashboardError> {
    offset
        .checked_add(WORD)
        .and_then(|end| data.get(offset..end))
        .ok_or_else(|| DashboardError::Decode(format!("call data too short for word at {}", offset)))
}

fn read_address(word: &[u8]) -> Result<Address, DashboardError> {
    let (padding, address) = word.split_at(WORD - 20);
    if padding.iter().any(|b| *b != 0) {
        return Err(DashboardError::Decode("address word has non-zero padding".into()));
    }
    Ok(Address::from_slice(address))
}

fn read_offset(word: &[u8]) -> Result<usize, DashboardError> {
    let (high, low) = word.split_at(WORD - 8);
    if high.iter().any(|b| *b != 0) {
        return Err(DashboardError::Decode("offset out of range".into()));
    }

    let mut buf = [0u8; 8];
    buf.copy_from_slice(low);
    usize::try_from(u64::from_be_bytes(buf))
        .map_err(|_| DashboardError::Decode("offset out of range".into()))
}
