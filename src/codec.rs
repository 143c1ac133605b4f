//! 企鹅语编解码
//!
//! 编码: UTF-8 → 标准 Base64 → 每个 Base64 字符替换为 3 个符号（丢弃 `=` 填充）
//!
//! 解码: 贪婪分词 → 每 3 个符号一组反查 → 补齐 `=` → Base64 解码 → UTF-8

use std::sync::LazyLock;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::Engine;

use crate::alphabet::{digit_to_index, index_to_digit, Alphabet, ALPHABET_LEN};
use crate::error::{AlphabetError, DecodeError, Result};
use crate::table::{EncodingTable, SYMBOLS_PER_DIGIT};

static DEFAULT_CODEC: LazyLock<Codec> = LazyLock::new(Codec::new);

/// 解码用引擎：忽略最后一个 Base64 字符的多余位（"QR==" 与 "QQ==" 同为 "A"）
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// 进程内共享的默认编解码器（首次使用时构建）.
#[must_use]
pub fn default_codec() -> &'static Codec {
    &DEFAULT_CODEC
}

/// 字母表 + 编码表，构建后只读.
#[derive(Debug, Clone)]
pub struct Codec {
    alphabet: Alphabet,
    table: EncodingTable,
}

impl Codec {
    /// 使用默认字母表.
    #[must_use]
    pub fn new() -> Self {
        Self::from_alphabet(Alphabet::default())
    }

    /// 使用自定义的 5 个符号.
    ///
    /// # Errors
    /// 当存在空符号或重复符号时返回错误。.
    pub fn with_alphabet<S: AsRef<str>>(
        symbols: [S; ALPHABET_LEN],
    ) -> std::result::Result<Self, AlphabetError> {
        Alphabet::new(symbols).map(Self::from_alphabet)
    }

    #[must_use]
    pub fn from_alphabet(alphabet: Alphabet) -> Self {
        let table = EncodingTable::new(&alphabet);
        Self { alphabet, table }
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub const fn table(&self) -> &EncodingTable {
        &self.table
    }

    /// 编码文本，任意输入都不会失败.
    ///
    /// # Example
    /// ```
    /// use guga::Codec;
    /// let codec = Codec::new();
    /// // "A" → "QQ==" → Q(16) Q(16)
    /// assert_eq!(codec.encode("A"), "咕🍄嘎咕🍄嘎");
    /// ```
    #[must_use]
    pub fn encode(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let standard = STANDARD.encode(text.as_bytes());
        let mut out = String::with_capacity(standard.len() * SYMBOLS_PER_DIGIT * 4);

        for c in standard.bytes() {
            if c == b'=' {
                continue;
            }
            if let Some(entry) = digit_to_index(c).and_then(|index| self.table.entry(index)) {
                out.push_str(entry);
            }
        }

        out
    }

    /// 解码符号串，失败时不返回任何部分结果.
    ///
    /// # Errors
    /// - `MalformedInput`: 某位置无法匹配任何符号
    /// - `InvalidLength`: 符号数不是 3 的倍数
    /// - `UnknownSymbolGroup`: 3 符号组合不在编码表中
    /// - `Base64` / `Utf8`: 底层解码失败
    pub fn decode(&self, symbols: &str) -> Result<String> {
        if symbols.is_empty() {
            return Ok(String::new());
        }

        let tokens = self.tokenize(symbols)?;
        if tokens.len() % SYMBOLS_PER_DIGIT != 0 {
            return Err(DecodeError::InvalidLength {
                tokens: tokens.len(),
            });
        }

        let mut standard = String::with_capacity(tokens.len() / SYMBOLS_PER_DIGIT + 3);
        for group in tokens.chunks(SYMBOLS_PER_DIGIT) {
            let group = group.concat();
            let digit = self
                .table
                .index_of(&group)
                .and_then(index_to_digit)
                .ok_or(DecodeError::UnknownSymbolGroup(group))?;
            standard.push(char::from(digit));
        }

        let padding = (4 - standard.len() % 4) % 4;
        standard.extend(std::iter::repeat('=').take(padding));

        let bytes = LENIENT
            .decode(&standard)
            .map_err(|e| DecodeError::Base64(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| DecodeError::Utf8(e.utf8_error().to_string()))
    }

    /// 贪婪分词：每个位置优先匹配最长的符号.
    ///
    /// # Errors
    /// 某位置无法匹配任何符号时返回 `MalformedInput`，
    /// `position` 为该字符的字符（而非字节）偏移。.
    pub fn tokenize<'a>(&self, input: &'a str) -> Result<Vec<&'a str>> {
        let mut tokens = Vec::new();
        let mut rest = input;
        let mut position = 0;

        while let Some(found) = rest.chars().next() {
            let Some(symbol) = self.alphabet.match_prefix(rest) else {
                return Err(DecodeError::MalformedInput { position, found });
            };
            let (token, tail) = rest.split_at(symbol.len());
            tokens.push(token);
            position += token.chars().count();
            rest = tail;
        }

        Ok(tokens)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}
