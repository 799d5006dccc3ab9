use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Square index out of range")]
    InvalidSquare,
    #[error("No such step in the match history")]
    InvalidStep,
    #[error("Game already decided, no new moves are accepted")]
    AlreadyDecided,
}

pub type Result<T> = core::result::Result<T, GameError>;
