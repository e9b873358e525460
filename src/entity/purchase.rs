use crate::entity::DecodedCall;

/// In-game purchase or subscription as shown on a feed card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseCard {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub value: String,  // Value converted to BNB, or the raw wei string if unparseable
    pub status: String, // "Success" or "Failed"
    pub block_number: String,
    pub date: String,   // Local date-time of the block timestamp
    pub function_name: String,
    pub call: DecodedCall,
}

/// Lifecycle of one purchase feed load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedState {
    #[default]
    Loading,
    Loaded(Vec<PurchaseCard>),
    Empty,
    Failed(String),
}

impl FeedState {
    pub fn cards(&self) -> &[PurchaseCard] {
        match self {
            FeedState::Loaded(cards) => cards,
            _ => &[],
        }
    }
}
