//! C FFI 导出
//!
//! 提供 C ABI 接口供 GUI 前端（Swift/C#/Qt 等）调用。
//! 返回的字符串由 Rust 分配，必须通过 `guga_string_free` 释放。

// FFI 模块需要 unsafe 代码
#![allow(unsafe_code)]

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::alphabet::ALPHABET_LEN;
use crate::codec::default_codec;
use crate::error::DecodeError;

/// FFI 错误码
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GugaError {
    Success = 0,
    NullPointer = -1,
    InvalidUtf8 = -2,
    MalformedInput = -3,
    InvalidLength = -4,
    UnknownSymbolGroup = -5,
    Base64Decode = -6,
    Utf8Decode = -7,
    InteriorNul = -8,
}

impl From<&DecodeError> for GugaError {
    fn from(err: &DecodeError) -> Self {
        match err {
            DecodeError::MalformedInput { .. } => Self::MalformedInput,
            DecodeError::InvalidLength { .. } => Self::InvalidLength,
            DecodeError::UnknownSymbolGroup(_) => Self::UnknownSymbolGroup,
            DecodeError::Base64(_) => Self::Base64Decode,
            DecodeError::Utf8(_) => Self::Utf8Decode,
        }
    }
}

/// 编码文本
///
/// 输入为空指针或非法 UTF-8 时返回空指针。
///
/// # Safety
/// - `text` 必须是有效的 C 字符串
/// - 返回值需要通过 `guga_string_free` 释放
#[no_mangle]
pub unsafe extern "C" fn guga_encode(text: *const c_char) -> *mut c_char {
    if text.is_null() {
        return ptr::null_mut();
    }

    let Ok(text) = CStr::from_ptr(text).to_str() else {
        return ptr::null_mut();
    };

    // 编码结果只含字母表符号，不会出现 NUL
    CString::new(default_codec().encode(text)).map_or(ptr::null_mut(), CString::into_raw)
}

/// 解码企鹅语
///
/// 成功时 `*out` 指向解码后的文本；失败时 `*out` 置为空指针。
///
/// # Safety
/// - `symbols` 必须是有效的 C 字符串
/// - `out` 必须是有效指针
/// - `*out` 需要通过 `guga_string_free` 释放
#[no_mangle]
pub unsafe extern "C" fn guga_decode(symbols: *const c_char, out: *mut *mut c_char) -> i32 {
    if symbols.is_null() || out.is_null() {
        return GugaError::NullPointer as i32;
    }
    *out = ptr::null_mut();

    let Ok(symbols) = CStr::from_ptr(symbols).to_str() else {
        return GugaError::InvalidUtf8 as i32;
    };

    match default_codec().decode(symbols) {
        Ok(text) => match CString::new(text) {
            Ok(c_text) => {
                *out = c_text.into_raw();
                GugaError::Success as i32
            }
            Err(_) => GugaError::InteriorNul as i32,
        },
        Err(err) => GugaError::from(&err) as i32,
    }
}

/// 释放由 `guga_encode` / `guga_decode` 返回的字符串
///
/// # Safety
/// `s` 必须为空指针或由本库返回且尚未释放的指针
#[no_mangle]
pub unsafe extern "C" fn guga_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// 获取字母表符号数
#[no_mangle]
pub extern "C" fn guga_alphabet_len() -> usize {
    ALPHABET_LEN
}
