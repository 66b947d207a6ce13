#![doc(test(attr(deny(warnings))))]

//! Finsim Core offers the account registry, cash-flow ledger, and purchase
//! projection simulator that power the personal-finance app's workflows.

pub mod config;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod registry;
pub mod simulation;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finsim Core tracing initialized.");
    });
}
