use serde::{Deserialize, Serialize};

use crate::utils::round2;

/// Default cap for generated amortization tables.
pub const DEFAULT_TABLE_MONTHS: u32 = 60;

/// One month of an amortization schedule. Monetary fields are rounded to
/// currency precision; the running balance never goes negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

/// Builds an amortization table for a fixed monthly payment.
///
/// The final payment is clamped to the remaining balance plus its interest,
/// and the table stops early once the balance rounds to zero. Generation is
/// capped at `max_months`, so a payment that never amortizes still yields a
/// finite table. Degenerate input (non-positive balance or payment) yields
/// an empty table.
pub fn amortization_table(
    balance: f64,
    annual_rate: f64,
    monthly_payment: f64,
    max_months: u32,
) -> Vec<AmortizationRow> {
    if balance <= 0.0 || monthly_payment <= 0.0 {
        return Vec::new();
    }
    let rate = (annual_rate / 12.0).max(0.0);
    let mut remaining = balance;
    let mut rows = Vec::new();

    for month in 1..=max_months {
        let interest = remaining * rate;
        let payment = monthly_payment.min(remaining + interest);
        let principal = payment - interest;
        remaining -= principal;

        rows.push(AmortizationRow {
            month,
            payment: round2(payment),
            principal: round2(principal),
            interest: round2(interest),
            balance: round2(remaining.max(0.0)),
        });

        // Stops once the balance rounds to zero.
        if remaining < 0.005 {
            break;
        }
    }

    rows
}
