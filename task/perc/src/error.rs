use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("site ({row}, {col}) is outside of the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
