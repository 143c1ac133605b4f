//! 编码表
//!
//! 索引 i (0-63) 视为 3 位 5 进制数 (d2, d1, d0)，
//! 对应条目为 `alphabet[d2] + alphabet[d1] + alphabet[d0]`。

use std::collections::HashMap;

use crate::alphabet::Alphabet;

/// 编码表条目数
pub const TABLE_LEN: usize = 64;

/// 每个 Base64 字符对应的符号数
pub const SYMBOLS_PER_DIGIT: usize = 3;

/// Base64 索引与 3 符号组合的双向映射.
#[derive(Debug, Clone)]
pub struct EncodingTable {
    entries: [String; TABLE_LEN],
    reverse: HashMap<String, u8>,
}

impl EncodingTable {
    /// 从字母表构建编码表和反查表.
    #[must_use]
    pub fn new(alphabet: &Alphabet) -> Self {
        let entries: [String; TABLE_LEN] = std::array::from_fn(|i| {
            base5_digits(i)
                .iter()
                .map(|&d| alphabet.symbol(d))
                .collect()
        });

        let reverse = (0u8..)
            .zip(entries.iter())
            .map(|(index, entry)| (entry.clone(), index))
            .collect();

        Self { entries, reverse }
    }

    /// 索引对应的 3 符号组合.
    #[must_use]
    pub fn entry(&self, index: u8) -> Option<&str> {
        self.entries.get(usize::from(index)).map(String::as_str)
    }

    /// 3 符号组合对应的索引，不在表中返回 None.
    #[must_use]
    pub fn index_of(&self, group: &str) -> Option<u8> {
        self.reverse.get(group).copied()
    }

    /// 按索引顺序遍历全部条目.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// 拆分为 3 位 5 进制数字 (d2, d1, d0).
const fn base5_digits(i: usize) -> [usize; SYMBOLS_PER_DIGIT] {
    [i / 25, (i % 25) / 5, i % 5]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;
    use std::collections::HashSet;

    #[test]
    fn test_base5_digits() {
        assert_eq!(base5_digits(0), [0, 0, 0]);
        assert_eq!(base5_digits(16), [0, 3, 1]);
        assert_eq!(base5_digits(63), [2, 2, 3]);
    }

    #[test]
    fn test_known_entries() {
        let table = EncodingTable::new(&Alphabet::default());
        assert_eq!(table.entry(0), Some("咕咕咕"));
        assert_eq!(table.entry(16), Some("咕🍄嘎"));
        assert_eq!(table.entry(63), Some("🐧🐧🍄"));
        assert_eq!(table.entry(64), None);
    }

    #[test]
    fn test_entries_distinct() {
        let table = EncodingTable::new(&Alphabet::default());
        let unique: HashSet<&str> = table.entries().collect();
        assert_eq!(unique.len(), TABLE_LEN);
    }

    #[test]
    fn test_entries_are_three_symbols() {
        let table = EncodingTable::new(&Alphabet::default());
        for (i, entry) in table.entries().enumerate() {
            let [d2, d1, d0] = base5_digits(i);
            assert_eq!(entry, [ALPHABET[d2], ALPHABET[d1], ALPHABET[d0]].concat());
        }
    }

    #[test]
    fn test_reverse_lookup() {
        let table = EncodingTable::new(&Alphabet::default());
        for index in 0..64u8 {
            let entry = table.entry(index).map(str::to_owned);
            assert_eq!(entry.and_then(|e| table.index_of(&e)), Some(index));
        }
        // 64 = (2, 2, 4) 超出编码表范围
        assert_eq!(table.index_of("🐧🐧哇擦"), None);
        assert_eq!(table.index_of("咕咕"), None);
    }

    #[test]
    fn test_deterministic() {
        let a = EncodingTable::new(&Alphabet::default());
        let b = EncodingTable::new(&Alphabet::default());
        assert!(a.entries().eq(b.entries()));
    }
}
