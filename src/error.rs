use thiserror::Error;

/// Failures while loading or validating a deck.
#[derive(Error, Debug)]
pub enum CardError {
    #[error("Failed to read JSON: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No cards in JSON")]
    Empty,
    #[error("Card '{id}' ('{name}') has invalid side values (must be 1..=10)")]
    InvalidStats { id: String, name: String },
    #[error("Duplicate card id '{0}'")]
    DuplicateId(String),
}

/// Rejected session moves. The engine itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cell index {0} out of range")]
    CellOutOfRange(u8),
    #[error("Cell {0} is not empty")]
    CellOccupied(u8),
    #[error("Card index {0} out of range")]
    CardOutOfRange(usize),
    #[error("Card '{0}' is already on the board")]
    CardAlreadyPlaced(String),
    #[error("Order rule: card '{0}' is not the next card to play")]
    OutOfOrder(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rule '{0}'")]
pub struct UnknownRule(pub String);
