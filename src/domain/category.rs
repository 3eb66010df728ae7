use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorises plan activity for budgeting and reporting.
///
/// Color and icon are presentation concerns and are not modeled here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub kind: CategoryKind,
    /// 50/30/20 bucket this category counts toward. `None` means
    /// unclassified: excluded from the ratio chart, still in the totals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<BudgetBucket>,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            bucket: None,
        }
    }

    pub fn with_bucket(mut self, bucket: BudgetBucket) -> Self {
        self.bucket = Some(bucket);
        self
    }
}

/// Supported category types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryKind {
    Income,
    Expense,
}

/// 50/30/20 budget buckets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetBucket {
    Need,
    Want,
    Savings,
}
