//! Domain models consumed by the projection engine. The engine only ever
//! reads a snapshot of these; creating and editing them is the caller's job.

pub mod account;
pub mod category;
pub mod installment;
pub mod recurring;

pub use account::{Account, AccountKind, CreditTerms};
pub use category::{BudgetBucket, Category, CategoryKind};
pub use installment::InstallmentPurchase;
pub use recurring::{FlowKind, RecurringTemplate};
