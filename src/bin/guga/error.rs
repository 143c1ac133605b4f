use fluent_bundle::FluentArgs;
use guga::app::{decode_error_message, i18n};
use thiserror::Error;

#[derive(Error, Debug)]
/// Internal enum.
pub enum CliError {
    #[error("{0}")]
    /// Internal variant.
    Message(String),

    #[error("nothing to encode")]
    /// Internal variant.
    EmptyEncodeInput,

    #[error("nothing to decode")]
    /// Internal variant.
    EmptyDecodeInput,

    #[error("input not found: {0}")]
    /// Internal variant.
    InputNotFound(String),

    #[error("unsupported language: {0}")]
    /// Internal variant.
    UnsupportedLanguage(String),

    #[error("config error: {0}")]
    /// Internal variant.
    Config(String),

    #[error(transparent)]
    /// Internal variant.
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// Internal variant.
    Decode(#[from] guga::DecodeError),
}

/// Internal type alias.
pub type Result<T> = std::result::Result<T, CliError>;

impl From<guga::app::AppError> for CliError {
    fn from(err: guga::app::AppError) -> Self {
        use guga::app::AppError;
        match err {
            AppError::Message(msg) => Self::Message(msg),
            AppError::Io(err) => Self::Io(err),
            AppError::TomlDe(err) => Self::Config(err.to_string()),
            AppError::TomlSer(err) => Self::Config(err.to_string()),
        }
    }
}

impl CliError {
    /// Internal helper method.
    pub fn user_message(&self) -> String {
        match self {
            Self::Message(msg) => msg.clone(),
            Self::EmptyEncodeInput => i18n::tr("cli-error-empty_encode"),
            Self::EmptyDecodeInput => i18n::tr("cli-error-empty_decode"),
            Self::InputNotFound(path) => {
                let mut args = FluentArgs::new();
                args.set("path", path.as_str());
                i18n::tr_args("cli-error-input_not_found", &args)
            }
            Self::UnsupportedLanguage(lang) => {
                let mut args = FluentArgs::new();
                args.set("lang", lang.as_str());
                i18n::tr_args("cli-error-unsupported_language", &args)
            }
            Self::Config(error) => {
                let mut args = FluentArgs::new();
                args.set("error", error.as_str());
                i18n::tr_args("cli-error-config", &args)
            }
            Self::Io(err) => {
                let mut args = FluentArgs::new();
                args.set("error", err.to_string());
                i18n::tr_args("cli-error-io", &args)
            }
            Self::Decode(err) => {
                let mut args = FluentArgs::new();
                args.set("error", decode_error_message(err));
                i18n::tr_args("cli-decode-failed", &args)
            }
        }
    }
}
