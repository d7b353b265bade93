//! CLI command implementations
//!
//! Each `execute_*` function prints its own output and returns errors for
//! `run.rs` to report.

mod catalog;
mod config;
mod output;
mod quote;
pub(crate) mod session;

pub use catalog::execute_catalog_command;
pub use config::execute_config_command;
pub use quote::execute_quote_command;
pub use session::execute_session_command;
