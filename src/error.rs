//! Board Errors
//!
//! Why a board operation was rejected. The store logs these and keeps
//! the current board.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Reasons a board operation leaves the board unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Drop target is neither a card nor a column: {0}")]
    UnknownDropTarget(String),

    #[error("Card title is empty")]
    EmptyTitle,
}
