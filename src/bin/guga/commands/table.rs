use crate::error::Result;
use crate::util::emit_result;
use crate::Context;
use guga::app::i18n;
use guga::BASE64_DIGITS;
use std::fmt::Write;

/// Internal helper function.
pub fn run(ctx: &Context) -> Result<()> {
    let mut out = i18n::tr("cli-table-header");
    for ((index, entry), digit) in guga::default_codec()
        .table()
        .entries()
        .enumerate()
        .zip(BASE64_DIGITS.iter())
    {
        let _ = write!(out, "\n{index}\t{}\t{entry}", char::from(*digit));
    }
    emit_result(ctx, &out)
}
