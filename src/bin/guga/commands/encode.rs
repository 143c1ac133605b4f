use crate::error::{CliError, Result};
use crate::util::{diag_count, emit_result, read_input};
use crate::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Text to encode (reads --file or stdin when omitted).
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Keep leading and trailing whitespace.
    #[arg(long)]
    pub raw: bool,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let input = read_input(args.text.as_deref(), args.file.as_deref())?;
    let input = if args.raw { input.as_str() } else { input.trim() };
    if input.is_empty() {
        return Err(CliError::EmptyEncodeInput);
    }
    diag_count(ctx, "cli-diag-input", input.chars().count());

    let encoded = guga::encode(input);
    if let Ok(tokens) = guga::default_codec().tokenize(&encoded) {
        diag_count(ctx, "cli-diag-symbols", tokens.len());
    }

    emit_result(ctx, &encoded)
}
