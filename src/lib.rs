#![doc(test(attr(deny(warnings))))]

//! Spendwise offers a small personal budget ledger with write-through
//! persistence, time-bucketed chart aggregation, and a terminal front-end.

pub mod chart;
pub mod cli;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod theme;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spendwise tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
