use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::{date_with_day, shift_months};

/// Resolved billing-cycle boundaries for a credit card, relative to a
/// reference date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillingCycle {
    pub cycle_start: NaiveDate,
    pub cutoff_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub days_until_cutoff: i64,
    pub days_until_payment: i64,
    pub is_before_cutoff: bool,
}

/// Resolves the billing cycle a card is in on `today`.
///
/// The relevant cutoff is this month's `cutoff_day` (clamped to the month
/// length), or next month's once today has passed it. The payment date is
/// `payment_day` resolved to the nearest occurrence strictly after that
/// cutoff. `is_before_cutoff` reports whether this month's cutoff has not
/// yet passed.
pub fn resolve_cycle(cutoff_day: u32, payment_day: u32, today: NaiveDate) -> BillingCycle {
    let this_month_cutoff = date_with_day(today.year(), today.month(), cutoff_day);
    let is_before_cutoff = today <= this_month_cutoff;

    let cutoff_date = if today > this_month_cutoff {
        let next = shift_months(date_with_day(today.year(), today.month(), 1), 1);
        date_with_day(next.year(), next.month(), cutoff_day)
    } else {
        this_month_cutoff
    };

    // The cycle opens the day after the previous cutoff.
    let prev = shift_months(date_with_day(cutoff_date.year(), cutoff_date.month(), 1), -1);
    let cycle_start = date_with_day(prev.year(), prev.month(), cutoff_day) + Duration::days(1);

    let mut payment_date = date_with_day(cutoff_date.year(), cutoff_date.month(), payment_day);
    if payment_date <= cutoff_date {
        let next = shift_months(date_with_day(cutoff_date.year(), cutoff_date.month(), 1), 1);
        payment_date = date_with_day(next.year(), next.month(), payment_day);
    }

    BillingCycle {
        cycle_start,
        cutoff_date,
        payment_date,
        days_until_cutoff: (cutoff_date - today).num_days(),
        days_until_payment: (payment_date - today).num_days(),
        is_before_cutoff,
    }
}
