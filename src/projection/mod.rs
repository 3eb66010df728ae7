//! The period projection engine: resolves the requested period window,
//! aggregates recurring and installment occurrences, and folds everything
//! into a [`PeriodSummary`].

pub mod engine;
pub mod period;
pub mod summary;

pub use engine::{project_period, Snapshot};
pub use period::{resolve_window, PeriodType, ProjectionMode};
pub use summary::{
    BucketBreakdown, BudgetAnalysis, ExpectedItem, MsiDue, PeriodSummary, PeriodTotals, Warning,
    WarningSeverity,
};
