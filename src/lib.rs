#![doc(test(attr(deny(warnings))))]

//! Obligation Core derives amortization schedules, due-date rollovers, and
//! alert plans from plain financial records. Every computation is a pure
//! function over its inputs: the caller supplies "now" explicitly and owns
//! all persistence and delivery concerns.

pub mod alerts;
pub mod amortization;
pub mod errors;
pub mod obligations;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Obligation Core tracing initialized.");
    });
}
