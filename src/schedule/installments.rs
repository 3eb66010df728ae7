use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::window::DateWindow;
use crate::domain::InstallmentPurchase;
use crate::utils::{round2, shift_months};

/// One future installment of an MSI purchase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InstallmentDue {
    pub number: u32,
    pub due_date: NaiveDate,
    pub amount: f64,
    pub is_last: bool,
}

/// Future installments of a purchase falling inside `[window.start,
/// window.end)`.
///
/// Installment `k` is due `k` months after the purchase date (day-of-month
/// clamped on short months). The final installment absorbs any rounding
/// remainder so the cumulative paid amount lands exactly on `total_amount`.
pub fn due_payments_in_window(
    purchase: &InstallmentPurchase,
    window: &DateWindow,
) -> Vec<InstallmentDue> {
    let count = purchase.installment_count;
    if count == 0 || purchase.paid_installments >= count {
        return Vec::new();
    }

    let monthly = purchase.monthly_payment();
    let mut due = Vec::new();
    for k in purchase.paid_installments + 1..=count {
        let due_date = shift_months(purchase.purchase_date, k as i32);
        if !window.contains(due_date) {
            continue;
        }
        let is_last = k == count;
        let amount = if is_last {
            let scheduled_before = monthly * (count - 1 - purchase.paid_installments) as f64;
            round2(purchase.total_amount - purchase.paid_amount - scheduled_before)
        } else {
            monthly
        };
        due.push(InstallmentDue {
            number: k,
            due_date,
            amount,
            is_last,
        });
    }
    due
}
