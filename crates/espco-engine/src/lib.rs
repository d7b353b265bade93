//! Order accumulation and container selection for espco
//!
//! An [`Order`] collects catalog items and, when finalized, asks
//! [`select_container`] for a shipping container. The resulting [`Quote`]
//! carries the container label and the total weight in pounds and ounces.

pub mod container;
mod log;
pub mod order;
pub mod quote;
pub mod selector;
pub mod state;
pub mod weight;

pub use container::Container;
pub use log::ItemLog;
pub use order::Order;
pub use quote::Quote;
pub use selector::{Selection, SelectionPath, select_container};
pub use state::OrderState;
pub use weight::to_pounds_ounces;
