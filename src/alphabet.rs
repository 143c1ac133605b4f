//! 字母表定义
//!
//! 企鹅语使用 5 个符号，其中 "哇擦" 由两个码点组成，
//! 因此符号不能按固定宽度切分。

use std::cmp::Reverse;

use crate::error::AlphabetError;

/// 字母表符号数
pub const ALPHABET_LEN: usize = 5;

/// 默认字母表
pub const ALPHABET: [&str; ALPHABET_LEN] = ["咕", "嘎", "🐧", "🍄", "哇擦"];

/// 标准 Base64 字符集（仅作中间表示）
pub const BASE64_DIGITS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Base64 字符转索引 (0-63)，无效字符返回 None
#[inline]
pub fn digit_to_index(c: u8) -> Option<u8> {
    BASE64_DIGITS
        .iter()
        .position(|&x| x == c)
        .and_then(|i| u8::try_from(i).ok())
}

/// 索引转 Base64 字符
#[inline]
pub fn index_to_digit(i: u8) -> Option<u8> {
    BASE64_DIGITS.get(usize::from(i)).copied()
}

/// 有序的 5 符号字母表.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [String; ALPHABET_LEN],
    /// 按字节长度降序排列的符号下标，用于最长匹配.
    by_length: [usize; ALPHABET_LEN],
}

impl Alphabet {
    /// 从 5 个符号创建字母表.
    ///
    /// # Example
    /// ```
    /// use guga::Alphabet;
    /// let alphabet = Alphabet::new(["a", "b", "c", "d", "ee"]).unwrap();
    /// assert_eq!(alphabet.symbol(4), "ee");
    /// ```
    ///
    /// # Errors
    /// 当存在空符号或重复符号时返回错误。.
    pub fn new<S: AsRef<str>>(symbols: [S; ALPHABET_LEN]) -> Result<Self, AlphabetError> {
        let symbols = symbols.map(|s| s.as_ref().to_owned());

        for (i, symbol) in symbols.iter().enumerate() {
            if symbol.is_empty() {
                return Err(AlphabetError::Empty(i));
            }
            if symbols[..i].contains(symbol) {
                return Err(AlphabetError::Duplicate(symbol.clone()));
            }
        }

        Ok(Self::from_symbols(symbols))
    }

    fn from_symbols(symbols: [String; ALPHABET_LEN]) -> Self {
        let mut by_length = [0, 1, 2, 3, 4];
        // 稳定排序，长度相同时保持字母表顺序
        by_length.sort_by_key(|&i| Reverse(symbols[i].len()));
        Self { symbols, by_length }
    }

    /// 获取第 `digit` 个符号（`digit` 为 0-4）.
    ///
    /// # Panics
    /// `digit` 超出 0-4 时 panic。.
    #[must_use]
    pub fn symbol(&self, digit: usize) -> &str {
        &self.symbols[digit]
    }

    /// 全部符号（字母表顺序）.
    #[must_use]
    pub const fn symbols(&self) -> &[String; ALPHABET_LEN] {
        &self.symbols
    }

    /// 匹配 `input` 开头的符号，优先尝试最长的符号.
    #[must_use]
    pub fn match_prefix(&self, input: &str) -> Option<&str> {
        self.by_length
            .iter()
            .map(|&i| self.symbols[i].as_str())
            .find(|symbol| input.starts_with(symbol))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::from_symbols(ALPHABET.map(str::to_owned))
    }
}
