//! 解码错误的本地化提示

use crate::app::i18n::{tr, tr_args};
use crate::error::DecodeError;
use fluent_bundle::FluentArgs;

/// 将解码错误转换为面向用户的本地化消息.
#[must_use]
pub fn decode_error_message(err: &DecodeError) -> String {
    match err {
        DecodeError::MalformedInput { position, found } => {
            let mut args = FluentArgs::new();
            args.set("position", position.to_string());
            args.set("found", found.to_string());
            tr_args("decode-error-malformed_input", &args)
        }
        DecodeError::InvalidLength { tokens } => {
            let mut args = FluentArgs::new();
            args.set("tokens", tokens.to_string());
            tr_args("decode-error-invalid_length", &args)
        }
        DecodeError::UnknownSymbolGroup(group) => {
            let mut args = FluentArgs::new();
            args.set("group", group.as_str());
            tr_args("decode-error-unknown_group", &args)
        }
        DecodeError::Base64(detail) => {
            let mut args = FluentArgs::new();
            args.set("detail", detail.as_str());
            tr_args("decode-error-base64", &args)
        }
        DecodeError::Utf8(detail) => {
            let mut args = FluentArgs::new();
            args.set("detail", detail.as_str());
            tr_args("decode-error-utf8", &args)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::i18n::set_language;

    #[test]
    fn every_variant_has_a_message() {
        assert!(set_language(Some("en-US")).is_ok());
        let errors = [
            DecodeError::MalformedInput {
                position: 3,
                found: 'x',
            },
            DecodeError::InvalidLength { tokens: 4 },
            DecodeError::UnknownSymbolGroup("哇擦哇擦哇擦".to_string()),
            DecodeError::Base64("Invalid padding".to_string()),
            DecodeError::Utf8("invalid utf-8 sequence".to_string()),
        ];
        for err in &errors {
            let message = decode_error_message(err);
            assert!(!message.contains("No localization for id"), "{message}");
        }
    }

    #[test]
    fn message_carries_details() {
        assert!(set_language(Some("en-US")).is_ok());
        let message = decode_error_message(&DecodeError::UnknownSymbolGroup("咕咕".to_string()));
        assert!(message.contains("咕咕"));
    }
}
