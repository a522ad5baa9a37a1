use thiserror::Error;

use crate::Dim;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board layout {rows}x{cols}, both dimensions must be positive")]
    InvalidLayout { rows: Dim, cols: Dim },
}

pub type Result<T> = core::result::Result<T, BoardError>;
