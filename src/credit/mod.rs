//! Credit-card interest and amortization math.
//!
//! Every function here is pure and total: degenerate numeric input resolves
//! to a sentinel (zero, infinity, or an empty table), never an error.

pub mod amortization;
pub mod interest;

pub use amortization::{amortization_table, AmortizationRow, DEFAULT_TABLE_MONTHS};
pub use interest::{
    minimum_payment, minimum_payment_cost, monthly_interest, payoff_months, MinimumPaymentTerms,
    PayoffCost, DEFAULT_COST_MONTHS,
};
