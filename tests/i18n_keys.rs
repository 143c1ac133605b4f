use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

fn parse_ftl_pairs(path: &Path) -> BTreeMap<String, String> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let mut pairs = BTreeMap::new();
    for line in content.lines() {
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
            {
                pairs.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    pairs
}

fn placeholders(value: &str) -> BTreeSet<String> {
    value
        .split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split_once(" }").map(|(name, _)| name.to_string()))
        .collect()
}

#[test]
fn i18n_key_sets_match_between_en_and_zh() {
    let en = parse_ftl_pairs(Path::new("i18n/en-US/guga.ftl"));
    let zh = parse_ftl_pairs(Path::new("i18n/zh-CN/guga.ftl"));
    let en_keys: BTreeSet<_> = en.keys().collect();
    let zh_keys: BTreeSet<_> = zh.keys().collect();
    assert_eq!(en_keys, zh_keys, "en-US and zh-CN i18n keys must match exactly");
}

#[test]
fn placeholders_match_between_en_and_zh() {
    let en = parse_ftl_pairs(Path::new("i18n/en-US/guga.ftl"));
    let zh = parse_ftl_pairs(Path::new("i18n/zh-CN/guga.ftl"));
    for (key, en_value) in &en {
        let Some(zh_value) = zh.get(key) else {
            continue;
        };
        assert_eq!(
            placeholders(en_value),
            placeholders(zh_value),
            "placeholders differ for {key}"
        );
    }
}

#[test]
fn every_decode_error_has_copy() {
    let en = parse_ftl_pairs(Path::new("i18n/en-US/guga.ftl"));
    let required = [
        "decode-error-malformed_input",
        "decode-error-invalid_length",
        "decode-error-unknown_group",
        "decode-error-base64",
        "decode-error-utf8",
        "cli-decode-failed",
        "cli-error-empty_encode",
        "cli-error-empty_decode",
        "cli-error-quiet_verbose_conflict",
    ];
    for key in required {
        assert!(en.contains_key(key), "required i18n key missing: {key}");
    }
}

#[test]
fn zh_copy_uses_penguin_glossary() {
    let zh = parse_ftl_pairs(Path::new("i18n/zh-CN/guga.ftl"));
    let samples = [
        ("decode-error-malformed_input", "企鹅字母表"),
        ("decode-error-unknown_group", "符号组合"),
        ("cli-error-empty_encode", "编码"),
        ("cli-error-empty_decode", "解码"),
    ];
    for (key, term) in samples {
        let value = zh.get(key).unwrap_or_else(|| panic!("missing zh key: {key}"));
        assert!(value.contains(term), "zh key {key} should contain {term}");
    }
}
