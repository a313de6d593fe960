//! One run of the tool: banner → input → lookup → rendered result.

use crate::console;
use crate::i18n::Locale;
use crate::lookup::IpLookup;
use crate::render::Presenter;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Exit status for input that is not an IP address.
pub const EXIT_INVALID_INPUT: i32 = 1;

/// What the command line asked for.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Address given up front; the prompt is skipped when set.
    pub address: Option<String>,
    pub locale: Locale,
    pub details: bool,
}

/// One lookup from input to printed result. Returns the exit code:
/// `EXIT_INVALID_INPUT` for bad input, 0 otherwise. Provider and DNS
/// failures are part of the printed result, not the exit code.
pub fn run(
    options: &RunOptions,
    lookup: &IpLookup,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<i32> {
    let messages = options.locale.messages();
    let presenter = Presenter::new(messages).with_details(options.details);

    writeln!(out, "{}", console::BANNER)?;

    let raw = match &options.address {
        Some(address) => address.clone(),
        None => console::prompt_line(messages, input, out)?,
    };

    let code = match lookup.run(&raw) {
        Ok(outcome) => {
            debug!(%outcome, "lookup finished");
            presenter.render(out, &outcome)?;
            0
        }
        Err(e) => {
            debug!(error = %e, "rejected input");
            presenter.render_invalid(out)?;
            EXIT_INVALID_INPUT
        }
    };
    out.flush()?;
    Ok(code)
}
