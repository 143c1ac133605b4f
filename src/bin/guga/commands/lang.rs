use crate::error::{CliError, Result};
use crate::Context;
use clap::Subcommand;
use fluent_bundle::FluentArgs;
use guga::app::{i18n, settings, Preferences};

#[derive(Subcommand)]
/// Internal enum.
pub enum Command {
    /// Show the saved language preference.
    Show,

    /// Save a language preference.
    Set {
        /// Language id (see `guga lang list`).
        lang: String,
    },

    /// Remove the saved language preference.
    Clear,

    /// List available languages.
    List,
}

/// Internal helper function.
pub fn run(ctx: &Context, command: Command) -> Result<()> {
    match command {
        Command::Show => show(ctx),
        Command::Set { lang } => set(ctx, &lang),
        Command::Clear => {
            Preferences::clear_language()?;
            ctx.out.info_user(i18n::tr("cli-lang-cleared"));
            Ok(())
        }
        Command::List => {
            let current = i18n::current_language();
            for info in i18n::available_languages() {
                let marker = if current.as_deref() == Some(info.id) {
                    "*"
                } else {
                    " "
                };
                ctx.out
                    .info_user(format!("{marker} {}\t{}", info.id, info.label));
            }
            Ok(())
        }
    }
}

/// Internal helper function.
fn show(ctx: &Context) -> Result<()> {
    let path = settings::config_path()?;
    let mut args = FluentArgs::new();
    args.set("path", path.display().to_string());
    ctx.out.info_diag(i18n::tr_args("cli-diag-config", &args));

    let prefs = Preferences::load()?;
    match prefs.language {
        Some(lang) => {
            let mut args = FluentArgs::new();
            args.set("lang", lang);
            ctx.out
                .info_user(i18n::tr_args("cli-lang-current", &args));
        }
        None => ctx.out.info_user(i18n::tr("cli-lang-none")),
    }
    Ok(())
}

/// Internal helper function.
fn set(ctx: &Context, lang: &str) -> Result<()> {
    let info =
        i18n::find_language(lang).ok_or_else(|| CliError::UnsupportedLanguage(lang.to_string()))?;
    Preferences::save_language(info.id)?;

    let mut args = FluentArgs::new();
    args.set("lang", info.id);
    ctx.out.info_user(i18n::tr_args("cli-lang-saved", &args));
    Ok(())
}
