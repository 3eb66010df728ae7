use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::round2;

/// Residual balance below which a purchase counts as settled, tolerating
/// per-installment rounding.
pub const SETTLED_TOLERANCE: f64 = 0.5;

/// An interest-free installment purchase ("meses sin intereses").
///
/// The whole purchase amortizes in `installment_count` equal monthly
/// payments; no interest is modeled. `account_id` must reference a credit
/// account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstallmentPurchase {
    pub id: Uuid,
    pub description: String,
    pub total_amount: f64,
    pub installment_count: u32,
    pub paid_installments: u32,
    pub paid_amount: f64,
    pub purchase_date: NaiveDate,
    pub account_id: Uuid,
}

impl InstallmentPurchase {
    pub fn new(
        description: impl Into<String>,
        total_amount: f64,
        installment_count: u32,
        purchase_date: NaiveDate,
        account_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            total_amount,
            installment_count,
            paid_installments: 0,
            paid_amount: 0.0,
            purchase_date,
            account_id,
        }
    }

    pub fn with_paid(mut self, paid_installments: u32, paid_amount: f64) -> Self {
        self.paid_installments = paid_installments;
        self.paid_amount = paid_amount;
        self
    }

    /// Equal monthly payment, rounded to currency precision. The final
    /// installment absorbs any rounding remainder (see the schedule
    /// resolver).
    pub fn monthly_payment(&self) -> f64 {
        if self.installment_count == 0 {
            return 0.0;
        }
        round2(self.total_amount / self.installment_count as f64)
    }

    pub fn remaining(&self) -> f64 {
        self.total_amount - self.paid_amount
    }

    pub fn is_settled(&self) -> bool {
        self.remaining() <= SETTLED_TOLERANCE
    }
}
