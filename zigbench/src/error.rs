use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to write histogram: {0}")]
    Io(#[from] io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
