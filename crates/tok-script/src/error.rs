use thiserror::Error;

use crate::symbols::STRING_TABLE_CAPACITY;

#[derive(Debug, Error)]
pub enum TokError {
    #[error("unit too small: {len} bytes, need at least {min}")]
    TooSmall { len: usize, min: usize },

    #[error("string table has {len} entries, at most {} allowed", STRING_TABLE_CAPACITY)]
    StringTableTooLarge { len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("symbol table yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TokError>;
