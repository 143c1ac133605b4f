use crate::error::{CliError, Result};
use crate::util::{diag_count, emit_result, read_input};
use crate::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Penguin language to decode (reads --file or stdin when omitted).
    pub symbols: Option<String>,

    /// Read the symbols from a file.
    #[arg(long, value_name = "PATH", conflicts_with = "symbols")]
    pub file: Option<PathBuf>,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let input = read_input(args.symbols.as_deref(), args.file.as_deref())?;
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::EmptyDecodeInput);
    }
    diag_count(ctx, "cli-diag-input", input.chars().count());

    let decoded = guga::decode(input)?;
    emit_result(ctx, &decoded)
}
