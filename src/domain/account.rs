use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A financial account snapshot.
///
/// For credit accounts `balance` is the debt owed, not available funds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<CreditTerms>,
}

impl Account {
    pub fn new(name: impl Into<String>, kind: AccountKind, balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            balance,
            credit: None,
        }
    }

    pub fn with_credit_terms(mut self, terms: CreditTerms) -> Self {
        self.credit = Some(terms);
        self
    }

    /// Liquid accounts contribute to the current spendable balance.
    pub fn is_liquid(&self) -> bool {
        matches!(self.kind, AccountKind::Checking | AccountKind::Cash)
    }

    pub fn is_credit(&self) -> bool {
        matches!(self.kind, AccountKind::Credit)
    }
}

/// Supported account types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    Cash,
    Credit,
    Loan,
    Investment,
}

/// Billing terms attached to credit accounts.
///
/// `cutoff_day` and `payment_day` are 1-31 and are resolved against real
/// month lengths wherever they become concrete dates (day 31 on a 30-day
/// month means the last day of the month). `annual_rate` is a decimal
/// fraction, e.g. 0.45 for 45% APR.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CreditTerms {
    pub limit: f64,
    pub cutoff_day: u32,
    pub payment_day: u32,
    pub annual_rate: f64,
}

impl CreditTerms {
    pub fn new(limit: f64, cutoff_day: u32, payment_day: u32, annual_rate: f64) -> Self {
        Self {
            limit,
            cutoff_day,
            payment_day,
            annual_rate,
        }
    }
}
