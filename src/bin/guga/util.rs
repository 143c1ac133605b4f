use crate::error::{CliError, Result};
use crate::output::Output;
use crate::Context;
use fluent_bundle::FluentArgs;
use guga::app::i18n;
use std::fs;
use std::io;
use std::path::Path;

/// Reads the command input: positional text, then `--file`, then stdin.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        ensure_file(path)?;
        return Ok(fs::read_to_string(path)?);
    }
    Ok(io::read_to_string(io::stdin())?)
}

pub fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::InputNotFound(path.display().to_string()))
    }
}

/// Prints the result, or writes it to `--output` when given.
pub fn emit_result(ctx: &Context, result: &str) -> Result<()> {
    match &ctx.output {
        Some(path) => {
            fs::write(path, result)?;
            let mut args = FluentArgs::new();
            args.set("path", path.display().to_string());
            ctx.out
                .info_user(i18n::tr_args("cli-output-written", &args));
        }
        None => Output::result(result),
    }
    Ok(())
}

pub fn diag_count(ctx: &Context, key: &str, count: usize) {
    let mut args = FluentArgs::new();
    args.set("count", count.to_string());
    ctx.out.info_diag(i18n::tr_args(key, &args));
}
