//! `guga` CLI.

/// Internal module.
mod commands;
/// Internal module.
mod error;
/// Internal module.
mod output;
/// Internal module.
mod util;

use clap::{Parser, Subcommand};
use error::{CliError, Result};
use guga::app::{i18n, Preferences};
use output::Output;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}

#[derive(Parser)]
#[command(name = "guga")]
#[command(about = "Penguin language translator", version)]
#[command(arg_required_else_help = true)]
/// Internal struct.
struct Cli {
    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (only results and errors).
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Language (e.g. zh-CN, en-US).
    #[arg(long, global = true, value_name = "LANG")]
    lang: Option<String>,

    /// Write the result to a file instead of stdout.
    #[arg(short, long, global = true, value_name = "PATH")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    /// Internal field.
    command: Commands,
}

#[derive(Subcommand)]
/// Internal enum.
enum Commands {
    /// Encode text into penguin language.
    Encode(commands::encode::CmdArgs),

    /// Decode penguin language back into text.
    Decode(commands::decode::CmdArgs),

    /// Print the 64-entry encoding table.
    Table,

    /// Language preference.
    Lang {
        #[command(subcommand)]
        /// Internal field.
        command: commands::lang::Command,
    },
}

/// Internal struct.
pub struct Context {
    /// Internal field.
    pub out: Output,
    /// Internal field.
    pub output: Option<PathBuf>,
}

/// Internal helper function.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = Preferences::load().unwrap_or_default();
    let env_lang = i18n::env_language();
    let lang = cli
        .lang
        .as_deref()
        .or(env_lang.as_deref())
        .or(settings.language.as_deref());
    i18n::set_language(lang).map_err(CliError::from)?;

    if cli.quiet && cli.verbose {
        return Err(CliError::Message(i18n::tr(
            "cli-error-quiet_verbose_conflict",
        )));
    }

    let ctx = Context {
        out: Output::new(cli.quiet, cli.verbose),
        output: cli.output,
    };

    match cli.command {
        Commands::Encode(args) => commands::encode::run(&ctx, &args),
        Commands::Decode(args) => commands::decode::run(&ctx, &args),
        Commands::Table => commands::table::run(&ctx),
        Commands::Lang { command } => commands::lang::run(&ctx, command),
    }
}
