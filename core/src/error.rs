use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid cell index: {0}")]
    InvalidIndex(usize),
    #[error("No round is in progress")]
    NoActiveRound,
    #[error("Round is still being played, it can only be reset once over")]
    RoundNotOver,
    #[error("No player is currently playing")]
    NoCurrentPlayer,
    #[error("No player id is left to assign")]
    IdsExhausted,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Could not serialize roster: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Player name must not be blank")]
    BlankName,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage rejected write to {key:?}: {reason}")]
    WriteRejected { key: String, reason: String },
}

pub type Result<T> = core::result::Result<T, GameError>;
