use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Symbol catalog is empty")]
    EmptyCatalog,
    #[error("Symbol catalog contains a duplicate entry")]
    DuplicateSymbol,
    #[error("Board size must be at least 1")]
    InvalidSize,
    #[error("Card layout does not pair every symbol or does not fit the board")]
    InvalidLayout,
}

pub type Result<T> = core::result::Result<T, GameError>;
