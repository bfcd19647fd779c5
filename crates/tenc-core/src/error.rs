use thiserror::Error;

use crate::replace::ReplaceStage;

pub type Result<T> = std::result::Result<T, TencError>;

#[derive(Debug, Error)]
pub enum TencError {
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("{stage} failed: {source}")]
    Replace {
        stage: ReplaceStage,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
