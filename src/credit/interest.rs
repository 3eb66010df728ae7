use serde::{Deserialize, Serialize};

use crate::utils::round2;

/// Default cap for the iterative minimum-payment simulation.
pub const DEFAULT_COST_MONTHS: u32 = 120;

/// Bank terms for the minimum-payment formula.
///
/// Defaults follow the common Mexican card terms (5% of the balance, 200
/// currency-unit floor); callers can override per bank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MinimumPaymentTerms {
    pub percent: f64,
    pub floor: f64,
}

impl Default for MinimumPaymentTerms {
    fn default() -> Self {
        Self {
            percent: 0.05,
            floor: 200.0,
        }
    }
}

/// Outcome of paying only the minimum each month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PayoffCost {
    /// Months until the balance reached zero, capped at the simulation
    /// limit. A value equal to the cap means "at least this long".
    pub months: u32,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// One month of interest on a revolving balance.
pub fn monthly_interest(balance: f64, annual_rate: f64) -> f64 {
    if balance <= 0.0 || annual_rate <= 0.0 {
        return 0.0;
    }
    round2(balance * annual_rate / 12.0)
}

/// Minimum payment due on a balance: the larger of the percentage and the
/// fixed floor.
pub fn minimum_payment(balance: f64, terms: MinimumPaymentTerms) -> f64 {
    if balance <= 0.0 {
        return 0.0;
    }
    round2((balance * terms.percent).max(terms.floor))
}

/// Months to pay off a balance at a fixed monthly payment, from the
/// standard amortization closed form.
///
/// Returns 0 for a non-positive balance and `f64::INFINITY` when the
/// payment is non-positive or does not cover the monthly interest (the debt
/// never shrinks; detected explicitly, not via an iteration cap).
pub fn payoff_months(balance: f64, annual_rate: f64, monthly_payment: f64) -> f64 {
    if balance <= 0.0 {
        return 0.0;
    }
    if monthly_payment <= 0.0 {
        return f64::INFINITY;
    }
    if monthly_payment <= monthly_interest(balance, annual_rate) {
        return f64::INFINITY;
    }
    let rate = annual_rate / 12.0;
    if rate <= 0.0 {
        return (balance / monthly_payment).ceil();
    }
    let factor = 1.0 - balance * rate / monthly_payment;
    if factor <= 0.0 {
        return f64::INFINITY;
    }
    (-factor.ln() / (1.0 + rate).ln()).ceil()
}

/// Simulates month-by-month minimum-only payments for up to `max_months`,
/// accruing interest each step.
///
/// Always terminates at `max_months` even if the balance never reaches
/// zero; callers read a capped month count as "longer than the horizon".
/// The balance is clamped to zero once below one cent to stop
/// float-rounding drift.
pub fn minimum_payment_cost(
    balance: f64,
    annual_rate: f64,
    terms: MinimumPaymentTerms,
    max_months: u32,
) -> PayoffCost {
    if balance <= 0.0 {
        return PayoffCost {
            months: 0,
            total_paid: 0.0,
            total_interest: 0.0,
        };
    }
    let rate = (annual_rate / 12.0).max(0.0);
    let mut remaining = balance;
    let mut months = 0u32;
    let mut total_paid = 0.0;
    let mut total_interest = 0.0;

    while months < max_months && remaining > 0.0 {
        let interest = remaining * rate;
        remaining += interest;
        total_interest += interest;

        let mut payment = (remaining * terms.percent).max(terms.floor);
        if payment > remaining {
            payment = remaining;
        }
        remaining -= payment;
        total_paid += payment;
        months += 1;

        if remaining < 0.01 {
            remaining = 0.0;
        }
    }

    PayoffCost {
        months,
        total_paid: round2(total_paid),
        total_interest: round2(total_interest),
    }
}
