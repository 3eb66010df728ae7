#![doc(test(attr(deny(warnings))))]

//! Planner Core computes forward-looking cash-flow projections for a personal
//! finance plan: recurring income/expense occurrences, installment (MSI)
//! schedules, credit-card billing cycles, interest/amortization math, and a
//! period summary with a 50/30/20 budget breakdown and sufficiency verdict.
//!
//! The engine is a pure function of its inputs. Callers load accounts,
//! recurring templates, installment purchases, and categories however they
//! like, inject `today`, and receive plain serializable records back.

pub mod credit;
pub mod domain;
pub mod errors;
pub mod projection;
pub mod schedule;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Planner Core tracing initialized.");
    });
}
