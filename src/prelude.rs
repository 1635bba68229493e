pub use crate::error::BoardError;

pub type Result<T> = std::result::Result<T, BoardError>;
