use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index")]
    InvalidIndex,
    #[error("Unknown difficulty level")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
