//! Output records of the projection engine: plain serializable data with no
//! behavior attached, ready for a presentation layer to render.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::period::{PeriodType, ProjectionMode};

/// An expected income or expense occurrence inside the period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpectedItem {
    /// Template that generated the occurrence.
    pub template_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    /// Due strictly before `today`.
    pub overdue: bool,
}

/// An installment payment due inside the period, with its purchase context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MsiDue {
    pub purchase_id: Uuid,
    pub description: String,
    pub account_id: Uuid,
    pub account_name: String,
    pub is_msi: bool,
    pub installment_number: u32,
    pub installment_count: u32,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub is_last_installment: bool,
    pub total_amount: f64,
    pub paid_amount: f64,
}

/// Aggregated money facts for the period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PeriodTotals {
    pub expected_income: f64,
    pub expected_expenses: f64,
    pub msi_payments: f64,
    /// Expenses plus installment payments.
    pub commitments: f64,
    /// Current balance plus expected income minus commitments.
    pub projected_balance: f64,
    /// Post-commitment headroom; equals the projected balance.
    pub disposable_income: f64,
    pub net_worth: f64,
}

/// Projected vs ideal amounts for one 50/30/20 bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BucketBreakdown {
    pub projected: f64,
    pub ideal: f64,
}

/// 50/30/20 split of projected expenses against expected income.
///
/// Occurrences with an unclassified (or unknown) category are excluded from
/// the buckets but still count toward the totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetAnalysis {
    pub needs: BucketBreakdown,
    pub wants: BucketBreakdown,
    pub savings: BucketBreakdown,
}

/// Severity of a generated notice. Informational notices (an MSI plan
/// ending) are kept apart from actionable warnings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}

/// A generated, human-readable notice. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warning {
    pub severity: WarningSeverity,
    pub message: String,
}

impl Warning {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: WarningSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: WarningSeverity::Info,
            message: message.into(),
        }
    }
}

/// The projection engine's output for one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub period_type: PeriodType,
    pub mode: ProjectionMode,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Sum of checking and cash balances.
    pub current_balance: f64,
    /// Sum of credit-account debt.
    pub current_debt: f64,
    /// Sum of remaining balances on unsettled installment purchases.
    pub current_msi_debt: f64,
    pub expected_income: Vec<ExpectedItem>,
    pub expected_expenses: Vec<ExpectedItem>,
    pub msi_payments_due: Vec<MsiDue>,
    pub totals: PeriodTotals,
    pub budget_analysis: BudgetAnalysis,
    pub is_sufficient: bool,
    /// Present iff `is_sufficient` is false; equals `-projected_balance`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<f64>,
    pub warnings: Vec<Warning>,
}
