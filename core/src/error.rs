use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid level {0}, expected a level between 1 and 3")]
    InvalidLevel(u8),
    #[error("Unknown category")]
    InvalidCategory,
    #[error("Image pool too small, need {required} distinct images but only {available} available")]
    InsufficientPoolSize { required: usize, available: usize },
    #[error("Deck layout has an image that does not appear exactly twice")]
    UnpairedImage,
    #[error("Invalid tile index {0}")]
    InvalidIndex(usize),
    #[error("A mismatch revert is already pending")]
    ResolutionPending,
}

pub type Result<T> = core::result::Result<T, GameError>;
