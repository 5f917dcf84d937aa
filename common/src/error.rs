//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// `index < len` でなければ OutOfRange
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::OutOfRange { index, len })
    }
}
