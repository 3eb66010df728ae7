use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Account, BudgetBucket, Category, InstallmentPurchase, RecurringTemplate};
use crate::schedule::{due_payments_in_window, occurrences_in_window, DateWindow};
use crate::utils::round2;

use super::period::{resolve_window, PeriodType, ProjectionMode};
use super::summary::{
    BucketBreakdown, BudgetAnalysis, ExpectedItem, MsiDue, PeriodSummary, PeriodTotals, Warning,
};

const HIGH_UTILIZATION_THRESHOLD: f64 = 0.80;

const IDEAL_NEEDS_SHARE: f64 = 0.50;
const IDEAL_WANTS_SHARE: f64 = 0.30;
const IDEAL_SAVINGS_SHARE: f64 = 0.20;

/// An already-loaded, consistent view of a user's plan. The engine reads it
/// and persists nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub templates: Vec<RecurringTemplate>,
    pub purchases: Vec<InstallmentPurchase>,
    pub categories: Vec<Category>,
}

/// Projects the selected period into a [`PeriodSummary`].
///
/// Deterministic and side-effect free: `today` is injected, the snapshot is
/// only read, and identical inputs always yield an identical summary.
/// Occurrences referencing an account missing from the snapshot are excluded
/// from the totals; a missing or unclassified category only drops the
/// occurrence from the 50/30/20 buckets.
pub fn project_period(
    period_type: PeriodType,
    mode: ProjectionMode,
    today: NaiveDate,
    snapshot: &Snapshot,
) -> PeriodSummary {
    let window = resolve_window(period_type, mode, today);

    let accounts: HashMap<Uuid, &Account> =
        snapshot.accounts.iter().map(|a| (a.id, a)).collect();
    let categories: HashMap<Uuid, &Category> =
        snapshot.categories.iter().map(|c| (c.id, c)).collect();

    let (expected_income, expected_expenses) =
        collect_recurring(&snapshot.templates, &accounts, &window, today);
    let msi_payments_due = collect_installments(&snapshot.purchases, &accounts, &window);

    let current_balance = round2(
        snapshot
            .accounts
            .iter()
            .filter(|a| a.is_liquid())
            .map(|a| a.balance)
            .sum(),
    );
    let current_debt = round2(
        snapshot
            .accounts
            .iter()
            .filter(|a| a.is_credit())
            .map(|a| a.balance)
            .sum(),
    );
    let current_msi_debt = round2(
        snapshot
            .purchases
            .iter()
            .filter(|p| !p.is_settled())
            .map(|p| p.remaining().max(0.0))
            .sum(),
    );

    let total_income = round2(expected_income.iter().map(|i| i.amount).sum());
    let total_expenses = round2(expected_expenses.iter().map(|i| i.amount).sum());
    let total_msi = round2(msi_payments_due.iter().map(|p| p.amount).sum());
    let commitments = round2(total_expenses + total_msi);
    let projected_balance = round2(current_balance + total_income - commitments);

    let totals = PeriodTotals {
        expected_income: total_income,
        expected_expenses: total_expenses,
        msi_payments: total_msi,
        commitments,
        projected_balance,
        disposable_income: projected_balance,
        net_worth: round2(current_balance - current_debt - current_msi_debt),
    };

    let budget_analysis = classify_budget(&expected_expenses, &categories, total_income);

    let is_sufficient = projected_balance >= 0.0;
    let shortfall = (!is_sufficient).then(|| round2(-projected_balance));

    let warnings = build_warnings(
        shortfall,
        &snapshot.accounts,
        &expected_expenses,
        &msi_payments_due,
    );

    tracing::debug!(
        period = ?period_type,
        ?mode,
        incomes = expected_income.len(),
        expenses = expected_expenses.len(),
        installments = msi_payments_due.len(),
        projected_balance,
        "period projection computed"
    );

    PeriodSummary {
        period_type,
        mode,
        period_start: window.start,
        period_end: window.end,
        current_balance,
        current_debt,
        current_msi_debt,
        expected_income,
        expected_expenses,
        msi_payments_due,
        totals,
        budget_analysis,
        is_sufficient,
        shortfall,
        warnings,
    }
}

fn collect_recurring(
    templates: &[RecurringTemplate],
    accounts: &HashMap<Uuid, &Account>,
    window: &DateWindow,
    today: NaiveDate,
) -> (Vec<ExpectedItem>, Vec<ExpectedItem>) {
    let mut income = Vec::new();
    let mut expenses = Vec::new();

    for template in templates.iter().filter(|t| t.active) {
        // Snapshot inconsistency: an occurrence without an account would
        // distort the totals, so the template contributes nothing.
        if !accounts.contains_key(&template.account_id) {
            continue;
        }
        for due_date in occurrences_in_window(
            template.next_due_date,
            template.frequency,
            template.end_date,
            window,
        ) {
            let item = ExpectedItem {
                template_id: template.id,
                description: template.description.clone(),
                amount: template.amount,
                due_date,
                category_id: template.category_id,
                overdue: !template.is_income() && due_date < today,
            };
            if template.is_income() {
                income.push(item);
            } else {
                expenses.push(item);
            }
        }
    }

    income.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    expenses.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    (income, expenses)
}

fn collect_installments(
    purchases: &[InstallmentPurchase],
    accounts: &HashMap<Uuid, &Account>,
    window: &DateWindow,
) -> Vec<MsiDue> {
    let mut due = Vec::new();
    for purchase in purchases.iter().filter(|p| !p.is_settled()) {
        let Some(account) = accounts.get(&purchase.account_id) else {
            continue;
        };
        for payment in due_payments_in_window(purchase, window) {
            due.push(MsiDue {
                purchase_id: purchase.id,
                description: purchase.description.clone(),
                account_id: account.id,
                account_name: account.name.clone(),
                is_msi: true,
                installment_number: payment.number,
                installment_count: purchase.installment_count,
                amount: payment.amount,
                due_date: payment.due_date,
                is_last_installment: payment.is_last,
                total_amount: purchase.total_amount,
                paid_amount: purchase.paid_amount,
            });
        }
    }
    due.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    due
}

fn classify_budget(
    expenses: &[ExpectedItem],
    categories: &HashMap<Uuid, &Category>,
    total_income: f64,
) -> BudgetAnalysis {
    let mut needs = 0.0;
    let mut wants = 0.0;
    let mut savings = 0.0;

    for item in expenses {
        let bucket = item
            .category_id
            .and_then(|id| categories.get(&id))
            .and_then(|c| c.bucket);
        match bucket {
            Some(BudgetBucket::Need) => needs += item.amount,
            Some(BudgetBucket::Want) => wants += item.amount,
            Some(BudgetBucket::Savings) => savings += item.amount,
            // Unclassified stays out of the ratio chart.
            None => {}
        }
    }

    BudgetAnalysis {
        needs: BucketBreakdown {
            projected: round2(needs),
            ideal: round2(total_income * IDEAL_NEEDS_SHARE),
        },
        wants: BucketBreakdown {
            projected: round2(wants),
            ideal: round2(total_income * IDEAL_WANTS_SHARE),
        },
        savings: BucketBreakdown {
            projected: round2(savings),
            ideal: round2(total_income * IDEAL_SAVINGS_SHARE),
        },
    }
}

// Warnings are ordered but independent; every applicable one is emitted.
fn build_warnings(
    shortfall: Option<f64>,
    accounts: &[Account],
    expenses: &[ExpectedItem],
    installments: &[MsiDue],
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if let Some(shortfall) = shortfall {
        warnings.push(Warning::warning(format!(
            "Insufficient funds: projected commitments exceed available funds by {shortfall:.2}"
        )));
    }

    for account in accounts.iter().filter(|a| a.is_credit()) {
        let Some(terms) = account.credit else {
            continue;
        };
        if terms.limit > 0.0 && account.balance / terms.limit > HIGH_UTILIZATION_THRESHOLD {
            let used = account.balance / terms.limit * 100.0;
            warnings.push(Warning::warning(format!(
                "High debt utilization on {}: {used:.0}% of the credit limit",
                account.name
            )));
        }
    }

    for item in expenses.iter().filter(|i| i.overdue) {
        warnings.push(Warning::warning(format!(
            "Overdue payment: {} was due on {}",
            item.description, item.due_date
        )));
    }

    for payment in installments.iter().filter(|p| p.is_last_installment) {
        warnings.push(Warning::info(format!(
            "MSI plan ending: final installment of {} ({} of {}) is due on {}",
            payment.description,
            payment.installment_number,
            payment.installment_count,
            payment.due_date
        )));
    }

    warnings
}
