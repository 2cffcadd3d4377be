//! Tests for report generation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::aggregation::{DateRange, ReportSummary};
use crate::budget::{BudgetStanding, BudgetStatus};
use crate::seed::{demo_budget, demo_transactions};
use crate::transaction::{Category, Transaction};

fn may() -> DateRange {
    DateRange::month(2025, 5).unwrap()
}

fn request(kind: ReportKind) -> ReportRequest {
    ReportRequest { kind, range: may() }
}

fn generate(kind: ReportKind) -> Report {
    ReportService::generate(&demo_transactions(), &request(kind), &demo_budget().unwrap())
        .unwrap()
}

#[test]
fn test_transactions_report_shows_profit() {
    let report = generate(ReportKind::Transactions);

    assert_eq!(report.title, "Transaction Report");
    assert_eq!(report.transactions.len(), 9);
    assert_eq!(report.summary.net_amount, dec!(30350));

    let profit = report.profit_loss.unwrap();
    assert_eq!(profit.outcome, ProfitLossKind::Profit);
    assert_eq!(profit.amount, dec!(30350));
    let percent = profit.percent_of_expenses.unwrap();
    assert_eq!(percent.round_dp(1), dec!(113.9));
    assert!(report.chart.is_empty());
    assert!(report.budget.is_none());
}

#[test]
fn test_income_report_keeps_inflows_only() {
    let report = generate(ReportKind::Income);

    assert_eq!(report.title, "Income Analysis");
    assert!(report.transactions.iter().all(Transaction::is_income));
    assert_eq!(report.summary.total_income, dec!(57000));
    assert_eq!(report.summary.total_expenses, Decimal::ZERO);
    assert_eq!(report.summary.by_category[&Category::Income], dec!(57000));
}

#[test]
fn test_expense_report_chart() {
    let report = generate(ReportKind::Expenses);

    assert_eq!(report.title, "Expense Analysis");
    assert_eq!(report.transactions.len(), 7);
    assert_eq!(report.summary.total_expenses, dec!(26650));

    let chart: Vec<_> = report
        .chart
        .iter()
        .map(|s| (s.name.as_str(), s.value))
        .collect();
    assert_eq!(
        chart,
        vec![
            ("Food", dec!(3650)),
            ("Shopping", dec!(3500)),
            ("Housing", dec!(15000)),
            ("Transport", dec!(1500)),
            ("Entertainment", dec!(800)),
            ("Utilities", dec!(2200)),
        ]
    );
}

#[test]
fn test_budget_report_variance() {
    let report = generate(ReportKind::Budget);
    let budget = report.budget.unwrap();

    assert_eq!(report.title, "Budget vs Actual");
    assert_eq!(budget.lines.len(), 6);
    assert_eq!(budget.lines[1].category, Category::Food);
    assert_eq!(budget.lines[1].remaining, dec!(4350));
    assert_eq!(budget.lines[4].status, BudgetStatus::Unbudgeted);
    assert_eq!(budget.totals.standing, BudgetStanding::UnderBudget);
    assert_eq!(budget.totals.remaining, dec!(17050));
}

#[test]
fn test_loss_and_break_even() {
    let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
    let plan = demo_budget().unwrap();

    let loss = [
        Transaction::new(date, "Pay", dec!(100), Category::Salary),
        Transaction::new(date, "Rent", dec!(-400), Category::Housing),
    ];
    let report = ReportService::generate(&loss, &request(ReportKind::Transactions), &plan).unwrap();
    let pl = report.profit_loss.unwrap();
    assert_eq!(pl.outcome, ProfitLossKind::Loss);
    assert_eq!(pl.amount, dec!(300));
    assert_eq!(pl.percent_of_expenses, Some(dec!(75)));

    let empty: Vec<Transaction> = Vec::new();
    let report = ReportService::generate(&empty, &request(ReportKind::Transactions), &plan).unwrap();
    let pl = report.profit_loss.unwrap();
    assert_eq!(pl.outcome, ProfitLossKind::BreakEven);
    assert_eq!(pl.percent_of_expenses, None);
}

#[test]
fn test_profit_ratio_too_large_is_undefined() {
    let summary = ReportSummary {
        total_transactions: 2,
        total_income: dec!(1000),
        total_expenses: Decimal::new(1, 28),
        net_amount: dec!(1000),
        ..ReportSummary::default()
    };
    let pl = ProfitLoss::from_summary(&summary);

    assert_eq!(pl.outcome, ProfitLossKind::Profit);
    assert_eq!(pl.percent_of_expenses, None);
}

#[test]
fn test_invalid_range() {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    let request = ReportRequest {
        kind: ReportKind::Expenses,
        range: DateRange { start, end },
    };

    let result = ReportService::generate(&demo_transactions(), &request, &demo_budget().unwrap());
    assert_eq!(result, Err(ReportError::InvalidDateRange { start, end }));
}

#[test]
fn test_report_kind_parsing() {
    assert_eq!("Budget".parse::<ReportKind>(), Ok(ReportKind::Budget));
    assert_eq!(
        "pdf".parse::<ReportKind>(),
        Err(ReportError::UnknownKind("pdf".to_string()))
    );
}

#[test]
fn test_report_json_shape() {
    let json = serde_json::to_value(generate(ReportKind::Expenses)).unwrap();

    assert_eq!(json["type"], "expenses");
    assert_eq!(json["summary"]["totalExpenses"], "26650");
    assert_eq!(json["chart"][0]["name"], "Food");
    assert!(json.get("profitLoss").is_none());
    assert!(json.get("budget").is_none());
}

proptest! {
    #[test]
    fn prop_income_and_expense_reports_partition_rows(
        amounts in prop::collection::vec(-100_000i64..100_000, 0..40),
    ) {
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let data: Vec<Transaction> = amounts
            .iter()
            .map(|&a| Transaction::new(date, "row", Decimal::from(a), Category::Other))
            .collect();
        let plan = demo_budget().unwrap();

        let all = ReportService::generate(&data, &request(ReportKind::Transactions), &plan).unwrap();
        let income = ReportService::generate(&data, &request(ReportKind::Income), &plan).unwrap();
        let expenses = ReportService::generate(&data, &request(ReportKind::Expenses), &plan).unwrap();

        let zeros = amounts.iter().filter(|a| **a == 0).count();
        prop_assert_eq!(
            income.transactions.len() + expenses.transactions.len() + zeros,
            all.transactions.len()
        );
        prop_assert_eq!(income.summary.total_income, all.summary.total_income);
        prop_assert_eq!(expenses.summary.total_expenses, all.summary.total_expenses);
    }
}
