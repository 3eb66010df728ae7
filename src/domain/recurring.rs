use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::Frequency;

/// A recurring income or expense template.
///
/// `next_due_date` is trusted as the next unconsumed occurrence: the editor
/// that created the template already folded any "paid this period" state
/// into it, and the calendar walks forward by frequency from there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringTemplate {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: FlowKind,
    pub frequency: Frequency,
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub next_due_date: NaiveDate,
    /// No occurrence is generated on or after this date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

impl RecurringTemplate {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: FlowKind,
        frequency: Frequency,
        account_id: Uuid,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            kind,
            frequency,
            account_id,
            category_id: None,
            start_date,
            next_due_date: start_date,
            end_date: None,
            active: true,
        }
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_next_due(mut self, next_due_date: NaiveDate) -> Self {
        self.next_due_date = next_due_date;
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, FlowKind::Income)
    }
}

/// Direction of a recurring cash flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowKind {
    Income,
    Expense,
}
