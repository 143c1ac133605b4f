//! 错误类型定义

use thiserror::Error;

/// 解码失败原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unrecognized symbol '{found}' at position {position}")]
    MalformedInput { position: usize, found: char },

    #[error("Symbol count must be a multiple of 3, got {tokens}")]
    InvalidLength { tokens: usize },

    #[error("Unknown symbol group \"{0}\"")]
    UnknownSymbolGroup(String),

    #[error("Base64 decode failed: {0}")]
    Base64(String),

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    Utf8(String),
}

/// 自定义字母表校验失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("Alphabet symbol #{0} is empty")]
    Empty(usize),

    #[error("Alphabet symbol \"{0}\" appears more than once")]
    Duplicate(String),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
