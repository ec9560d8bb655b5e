#![doc(test(attr(deny(warnings))))]

//! Datebook validates and compares calendar dates and sorts dated documents,
//! behind a small line-oriented console menu.

pub mod calendar;
pub mod cli;
pub mod clock;
pub mod config;
pub mod document;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
///
/// `log_filter` is used when `RUST_LOG` is unset.
pub fn init(log_filter: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(log_filter);
        tracing::debug!("Datebook tracing initialized.");
    });
}
