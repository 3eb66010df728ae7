//! Pure calendar components: occurrence generation for recurring templates,
//! credit-card billing cycles, and installment (MSI) due dates.

pub mod billing_cycle;
pub mod frequency;
pub mod installments;
pub mod window;

pub use billing_cycle::{resolve_cycle, BillingCycle};
pub use frequency::{occurrences_in_window, Frequency, Occurrences};
pub use installments::{due_payments_in_window, InstallmentDue};
pub use window::DateWindow;
