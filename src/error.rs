use thiserror;

/// The Result type for slide48.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("unsupported grid size {0}, expected one of {supported:?}", supported = crate::engine::board::SUPPORTED_SIZES)]
    UnsupportedSize(usize),

    #[error("invalid tile value {0}, expected a power of two of at least 2")]
    InvalidTile(crate::engine::grid::Card),

    #[error("no previous move to undo")]
    NothingToUndo,

    #[error("no undos left")]
    NoUndosLeft,

    #[error("invalid move '{0}'")]
    InvalidMove(char),
}
