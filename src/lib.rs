#![doc(test(attr(deny(warnings))))]

//! Budget Ledger offers named spending categories backed by append-only
//! transaction ledgers, plus a text spend chart across categories.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

pub use errors::{ChartError, LedgerError};
pub use ledger::{Budget, Category, SharedCategory, Transaction};
pub use report::{create_shared_spend_chart, create_spend_chart};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Ledger tracing initialized.");
    });
}
