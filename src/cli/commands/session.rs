//! `espco session`: the packing-station loop
//!
//! One command per line. Orders run back to back: `calc` quotes the current
//! order and `new` starts the next one. Errors are reported inline and the
//! session carries on with the order untouched.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use super::output::render_quote;
use crate::{Config, EspcoError, Order, UserFriendlyError};

const SESSION_HELP: &str = "\
Commands:
  add <token>...   add packs or items (item-id[:qty]); 'add' may be omitted
  calc             pick the container and weigh the order
  new              start the next order
  list             show what has been added
  help             show this text
  quit             leave the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum SessionCommand {
    Add,
    #[strum(serialize = "calc", serialize = "calculate")]
    Calc,
    #[strum(serialize = "new", serialize = "reset")]
    New,
    List,
    #[strum(serialize = "help", serialize = "?")]
    Help,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

pub fn execute_session_command(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), config)
}

/// Drive a session from `input`, writing everything the packer sees to
/// `output`. Ends on `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W, config: &Config) -> Result<()> {
    let mut order = Order::new();

    writeln!(output, "Order {} started. Type 'help' for commands.", order.order_no())?;

    for line in input.lines() {
        let line = line.context("Failed to read session input")?;
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            continue;
        };

        match SessionCommand::from_str(first) {
            Ok(SessionCommand::Quit) => break,
            Ok(SessionCommand::Help) => writeln!(output, "{SESSION_HELP}")?,
            Ok(SessionCommand::New) => {
                order.reset();
                writeln!(output, "Order {} started.", order.order_no())?;
            }
            Ok(SessionCommand::List) => {
                if order.display_log().is_empty() {
                    writeln!(output, "No items added.")?;
                }
                for item in order.display_log() {
                    writeln!(output, "  {item}")?;
                }
            }
            Ok(SessionCommand::Calc) => match order.finalize() {
                Ok(quote) => {
                    writeln!(output, "{}", render_quote(&quote, order.display_log(), config)?)?;
                }
                Err(err) => report(&mut output, &EspcoError::from(err))?,
            },
            Ok(SessionCommand::Add) => add_tokens(&mut order, words, &mut output)?,
            Err(_) => add_tokens(&mut order, std::iter::once(first).chain(words), &mut output)?,
        }
    }

    debug!(order_no = order.order_no(), "Session ended");
    output.flush().context("Failed to flush session output")
}

fn add_tokens<'a, W: Write>(
    order: &mut Order,
    tokens: impl IntoIterator<Item = &'a str>,
    output: &mut W,
) -> Result<()> {
    let mut any = false;
    for token in tokens {
        any = true;
        let added = order
            .catalog()
            .resolve(token)
            .map_err(EspcoError::from)
            .and_then(|line| {
                order.add_line(&line)?;
                Ok(line.description)
            });

        match added {
            Ok(description) => writeln!(output, "{description}")?,
            Err(err) => report(output, &err)?,
        }
    }

    if !any {
        writeln!(output, "Nothing to add. Example: add wheelhouse-12 sauce")?;
    }
    Ok(())
}

fn report<W: Write>(output: &mut W, err: &EspcoError) -> Result<()> {
    writeln!(output, "✗ {}", err.user_message())?;
    for suggestion in err.suggestions() {
        writeln!(output, "  • {suggestion}")?;
    }
    Ok(())
}
