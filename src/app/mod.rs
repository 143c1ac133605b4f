pub mod error;
pub mod i18n;
pub mod messages;
pub mod settings;

pub use error::{AppError, Result};
pub use i18n::{
    available_languages, current_language, env_language, set_language, tr, tr_args, LanguageInfo,
};
pub use messages::decode_error_message;
pub use settings::Preferences;
