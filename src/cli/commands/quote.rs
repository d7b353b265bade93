//! `espco quote <TOKEN>...`

use anyhow::Result;

use super::output::render_quote;
use crate::{Config, EspcoError, Order, Quote};

/// Build one order from `tokens` and finalize it.
pub(crate) fn quote_tokens(tokens: &[String]) -> Result<(Order, Quote), EspcoError> {
    let mut order = Order::new();
    let catalog = order.catalog();

    for token in tokens {
        let line = catalog.resolve(token)?;
        order.add_line(&line)?;
    }

    let quote = order.finalize()?;
    Ok((order, quote))
}

pub fn execute_quote_command(tokens: &[String], config: &Config) -> Result<()> {
    let (order, quote) = quote_tokens(tokens)?;
    println!("{}", render_quote(&quote, order.display_log(), config)?);
    Ok(())
}
