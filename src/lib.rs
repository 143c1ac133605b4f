//! Guga - 企鹅语翻译器
//!
//! 将任意 UTF-8 文本可逆地转写为 5 符号字母表（咕、嘎、🐧、🍄、哇擦）组成的"企鹅语"。
//! 仅用于娱乐性混淆：不压缩，也不提供任何保密性。
//!
//! # 编码流程
//!
//! ```text
//! 文本 ──UTF-8──▶ 字节 ──Base64──▶ "QQ==" ──去填充 + 查表──▶ 咕🍄嘎 咕🍄嘎
//!                                    │
//!                      每个 Base64 字符 = 3 位 5 进制数 = 3 个符号
//! ```
//!
//! # Example
//!
//! ```
//! let encoded = guga::encode("企鹅");
//! let decoded = guga::decode(&encoded).unwrap();
//! assert_eq!(decoded, "企鹅");
//!
//! // 非字母表字符
//! assert!(guga::decode("咕x").is_err());
//! ```

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod table;

#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "app")]
pub mod app;

// Re-exports
pub use alphabet::{Alphabet, ALPHABET, ALPHABET_LEN, BASE64_DIGITS};
pub use codec::{default_codec, Codec};
pub use error::{AlphabetError, DecodeError, Result};
pub use table::{EncodingTable, SYMBOLS_PER_DIGIT, TABLE_LEN};

/// 使用默认字母表编码
#[must_use]
pub fn encode(text: &str) -> String {
    default_codec().encode(text)
}

/// 使用默认字母表解码
///
/// # Errors
/// 见 [`DecodeError`]。.
pub fn decode(symbols: &str) -> Result<String> {
    default_codec().decode(symbols)
}
