//! Logging infrastructure for espco
//!
//! Structured logging through `tracing`. Events go to stderr so that quote
//! output on stdout stays machine-readable.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Build the filter used by [`init_tracing`].
///
/// `RUST_LOG` wins when set and parseable. Otherwise verbose mode enables
/// debug events from the espco crates.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("espco=debug,espco_engine=debug,espco_config=debug,info")
            } else {
                EnvFilter::try_new("espco=info,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing subscriber for structured logging
///
/// Sets up tracing with either compact (default) or verbose format.
///
/// # Arguments
/// * `verbose` - If true, include targets and span close events
///
/// # Returns
/// Result indicating success or failure of initialization. Fails if a global
/// subscriber was already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = env_filter(verbose);

    if verbose {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_line_number(false)
                    .with_file(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_line_number(false)
                    .with_file(false)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}

/// Create a span covering one order from first item to quote.
pub fn order_span(order_no: u64) -> tracing::Span {
    tracing::info_span!("order", order_no = order_no)
}
