use chrono::NaiveDate;
use planner_core::domain::{
    Account, AccountKind, BudgetBucket, Category, CategoryKind, CreditTerms, FlowKind,
    InstallmentPurchase, RecurringTemplate,
};
use planner_core::projection::{
    project_period, PeriodType, ProjectionMode, Snapshot, WarningSeverity,
};
use planner_core::schedule::Frequency;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// A household plan: salary paid on the quincena grid, rent/streaming/savings
/// templates, an unclassified expense, and a 12-month MSI purchase on the
/// credit card.
fn household_snapshot() -> Snapshot {
    let checking = Account::new("Checking", AccountKind::Checking, 10000.0);
    let cash = Account::new("Cash", AccountKind::Cash, 500.0);
    let card = Account::new("Gold card", AccountKind::Credit, 3000.0)
        .with_credit_terms(CreditTerms::new(10000.0, 15, 5, 0.45));
    let brokerage = Account::new("Brokerage", AccountKind::Investment, 20000.0);

    let rent_cat = Category::new("Rent", CategoryKind::Expense).with_bucket(BudgetBucket::Need);
    let fun_cat =
        Category::new("Streaming", CategoryKind::Expense).with_bucket(BudgetBucket::Want);
    let save_cat =
        Category::new("Emergency fund", CategoryKind::Expense).with_bucket(BudgetBucket::Savings);
    let misc_cat = Category::new("Miscellaneous", CategoryKind::Expense);

    let salary = RecurringTemplate::new(
        "Salary",
        8000.0,
        FlowKind::Income,
        Frequency::SemimonthlyFifteenEom,
        checking.id,
        d(2024, 1, 15),
    )
    .with_next_due(d(2025, 3, 15));
    let rent = RecurringTemplate::new(
        "Rent",
        6000.0,
        FlowKind::Expense,
        Frequency::Monthly,
        checking.id,
        d(2024, 6, 1),
    )
    .with_category(rent_cat.id)
    .with_next_due(d(2025, 3, 1));
    let streaming = RecurringTemplate::new(
        "Streaming bundle",
        200.0,
        FlowKind::Expense,
        Frequency::Monthly,
        card.id,
        d(2024, 8, 20),
    )
    .with_category(fun_cat.id)
    .with_next_due(d(2025, 3, 20));
    let savings = RecurringTemplate::new(
        "Emergency fund deposit",
        1000.0,
        FlowKind::Expense,
        Frequency::Monthly,
        checking.id,
        d(2024, 5, 28),
    )
    .with_category(save_cat.id)
    .with_next_due(d(2025, 3, 28));
    let misc = RecurringTemplate::new(
        "Pet supplies",
        300.0,
        FlowKind::Expense,
        Frequency::Monthly,
        cash.id,
        d(2024, 9, 5),
    )
    .with_category(misc_cat.id)
    .with_next_due(d(2025, 3, 5));
    // Ended before the window; contributes nothing.
    let old_course = RecurringTemplate::new(
        "Online course",
        450.0,
        FlowKind::Expense,
        Frequency::Monthly,
        checking.id,
        d(2024, 1, 10),
    )
    .with_next_due(d(2025, 1, 10))
    .with_end_date(d(2025, 2, 1));

    let laptop = InstallmentPurchase::new("Laptop", 12000.0, 12, d(2024, 12, 10), card.id)
        .with_paid(2, 2000.0);

    Snapshot {
        accounts: vec![checking, cash, card, brokerage],
        templates: vec![salary, rent, streaming, savings, misc, old_course],
        purchases: vec![laptop],
        categories: vec![rent_cat, fun_cat, save_cat, misc_cat],
    }
}

#[test]
fn calendar_month_summary_aggregates_the_household_plan() {
    let snapshot = household_snapshot();
    let today = d(2025, 3, 10);
    let summary = project_period(
        PeriodType::Monthly,
        ProjectionMode::Calendar,
        today,
        &snapshot,
    );

    assert_eq!(summary.period_start, d(2025, 3, 1));
    assert_eq!(summary.period_end, d(2025, 4, 1));

    // Salary on the 15th and the 31st.
    assert_eq!(summary.expected_income.len(), 2);
    assert_eq!(summary.expected_income[0].due_date, d(2025, 3, 15));
    assert_eq!(summary.expected_income[1].due_date, d(2025, 3, 31));
    assert_eq!(summary.totals.expected_income, 16000.0);

    // Rent, pet supplies, streaming, savings; the ended course is absent.
    assert_eq!(summary.expected_expenses.len(), 4);
    assert_eq!(summary.totals.expected_expenses, 7500.0);

    // Installment 3 of 12, due Mar 10, one twelfth of the purchase.
    assert_eq!(summary.msi_payments_due.len(), 1);
    let msi = &summary.msi_payments_due[0];
    assert_eq!(msi.installment_number, 3);
    assert_eq!(msi.amount, 1000.0);
    assert_eq!(msi.due_date, d(2025, 3, 10));
    assert!(msi.is_msi);
    assert!(!msi.is_last_installment);
    assert_eq!(msi.account_name, "Gold card");

    // Liquid balance excludes the card and the brokerage.
    assert_eq!(summary.current_balance, 10500.0);
    assert_eq!(summary.current_debt, 3000.0);
    assert_eq!(summary.current_msi_debt, 10000.0);
    assert_eq!(summary.totals.commitments, 8500.0);
    assert_eq!(summary.totals.projected_balance, 18000.0);
    assert_eq!(summary.totals.disposable_income, 18000.0);
    assert_eq!(summary.totals.net_worth, -2500.0);
    assert!(summary.is_sufficient);
    assert!(summary.shortfall.is_none());
}

#[test]
fn projected_balance_invariant_rederives_from_emitted_fields() {
    let snapshot = household_snapshot();
    for (period, mode) in [
        (PeriodType::Weekly, ProjectionMode::Calendar),
        (PeriodType::Biweekly, ProjectionMode::Calendar),
        (PeriodType::Monthly, ProjectionMode::Projection),
        (PeriodType::Bimonthly, ProjectionMode::Projection),
        (PeriodType::Semiannual, ProjectionMode::Calendar),
        (PeriodType::Annual, ProjectionMode::Projection),
    ] {
        let summary = project_period(period, mode, d(2025, 3, 10), &snapshot);
        let rederived = summary.current_balance + summary.totals.expected_income
            - summary.totals.expected_expenses
            - summary.totals.msi_payments;
        assert!(
            (summary.totals.projected_balance - rederived).abs() <= 0.011,
            "{period:?}/{mode:?}: projected {} vs rederived {rederived}",
            summary.totals.projected_balance
        );
        assert_eq!(summary.is_sufficient, summary.totals.projected_balance >= 0.0);
        assert_eq!(summary.shortfall.is_some(), !summary.is_sufficient);
    }
}

#[test]
fn budget_analysis_splits_fifty_thirty_twenty() {
    let snapshot = household_snapshot();
    let summary = project_period(
        PeriodType::Monthly,
        ProjectionMode::Calendar,
        d(2025, 3, 10),
        &snapshot,
    );

    let budget = summary.budget_analysis;
    assert_eq!(budget.needs.projected, 6000.0);
    assert_eq!(budget.wants.projected, 200.0);
    assert_eq!(budget.savings.projected, 1000.0);
    // The unclassified 300.0 is in the totals but in no bucket.
    assert_eq!(budget.needs.ideal, 8000.0);
    assert_eq!(budget.wants.ideal, 4800.0);
    assert_eq!(budget.savings.ideal, 3200.0);
}

#[test]
fn overdue_expenses_are_flagged_and_warned() {
    let snapshot = household_snapshot();
    let summary = project_period(
        PeriodType::Monthly,
        ProjectionMode::Calendar,
        d(2025, 3, 10),
        &snapshot,
    );

    let overdue: Vec<_> = summary
        .expected_expenses
        .iter()
        .filter(|e| e.overdue)
        .collect();
    assert_eq!(overdue.len(), 2);
    assert_eq!(overdue[0].description, "Rent");
    assert_eq!(overdue[1].description, "Pet supplies");

    let overdue_warnings: Vec<_> = summary
        .warnings
        .iter()
        .filter(|w| w.message.starts_with("Overdue payment"))
        .collect();
    assert_eq!(overdue_warnings.len(), 2);
    assert!(overdue_warnings
        .iter()
        .all(|w| w.severity == WarningSeverity::Warning));

    // Income is never flagged overdue.
    assert!(summary.expected_income.iter().all(|i| !i.overdue));
}

#[test]
fn shortfall_reported_when_commitments_exceed_funds() {
    let mut snapshot = household_snapshot();
    for account in &mut snapshot.accounts {
        if account.is_liquid() {
            account.balance = 0.0;
        }
    }
    for template in &mut snapshot.templates {
        if template.is_income() {
            template.active = false;
        }
    }

    let summary = project_period(
        PeriodType::Monthly,
        ProjectionMode::Calendar,
        d(2025, 3, 10),
        &snapshot,
    );

    assert!(!summary.is_sufficient);
    assert_eq!(summary.shortfall, Some(8500.0));
    assert_eq!(summary.totals.projected_balance, -8500.0);
    let first = &summary.warnings[0];
    assert_eq!(first.severity, WarningSeverity::Warning);
    assert!(first.message.contains("Insufficient funds"));
    assert!(first.message.contains("8500.00"));
}

#[test]
fn final_installment_emits_an_info_notice() {
    let card = Account::new("Gold card", AccountKind::Credit, 500.0)
        .with_credit_terms(CreditTerms::new(10000.0, 15, 5, 0.45));
    let phone = InstallmentPurchase::new("Phone", 10000.0, 12, d(2024, 4, 20), card.id)
        .with_paid(11, 9166.63);
    let snapshot = Snapshot {
        accounts: vec![card],
        purchases: vec![phone],
        ..Snapshot::default()
    };

    let summary = project_period(
        PeriodType::Monthly,
        ProjectionMode::Calendar,
        d(2025, 4, 1),
        &snapshot,
    );

    assert_eq!(summary.msi_payments_due.len(), 1);
    let last = &summary.msi_payments_due[0];
    assert!(last.is_last_installment);
    assert_eq!(last.installment_number, 12);
    assert_eq!(last.due_date, d(2025, 4, 20));
    // The closing installment absorbs the rounding remainder.
    assert_eq!(last.amount, 833.37);

    let notice = summary
        .warnings
        .iter()
        .find(|w| w.message.contains("MSI plan ending"))
        .expect("expected an MSI ending notice");
    assert_eq!(notice.severity, WarningSeverity::Info);
}

#[test]
fn quincena_projection_window_is_rolling_not_calendar() {
    let snapshot = household_snapshot();
    let summary = project_period(
        PeriodType::Biweekly,
        ProjectionMode::Projection,
        d(2025, 3, 10),
        &snapshot,
    );
    assert_eq!(summary.period_start, d(2025, 3, 10));
    assert_eq!(summary.period_end, d(2025, 3, 24));
    // Only the mid-month salary falls inside the rolling window.
    assert_eq!(summary.expected_income.len(), 1);
    assert_eq!(summary.expected_income[0].due_date, d(2025, 3, 15));
}

#[test]
fn identical_inputs_yield_identical_summaries() {
    let snapshot = household_snapshot();
    let a = project_period(
        PeriodType::Semiannual,
        ProjectionMode::Projection,
        d(2025, 3, 10),
        &snapshot,
    );
    let b = project_period(
        PeriodType::Semiannual,
        ProjectionMode::Projection,
        d(2025, 3, 10),
        &snapshot,
    );
    assert_eq!(a, b);
}

#[test]
fn summary_serializes_as_plain_nested_records() {
    let snapshot = household_snapshot();
    let summary = project_period(
        PeriodType::Monthly,
        ProjectionMode::Calendar,
        d(2025, 3, 10),
        &snapshot,
    );

    let value = serde_json::to_value(&summary).expect("summary serializes");
    assert_eq!(value["period_start"], "2025-03-01");
    assert_eq!(value["totals"]["projected_balance"], 18000.0);
    assert_eq!(value["msi_payments_due"][0]["is_msi"], true);
    assert!(value["budget_analysis"]["needs"]["ideal"].is_number());
    assert!(value["warnings"].is_array());
}
