pub mod abi;
pub mod client;
pub mod models;

pub use abi::{CallSignature, ParamKind, SignatureTable};
pub use client::{BscScanExplorerService, ExplorerService};
pub use models::TxListResponse;
