//! Report generation service.

use super::error::ReportError;
use super::types::{BudgetReport, ChartSlice, ProfitLoss, Report, ReportKind, ReportRequest};
use crate::aggregation::{CategoryBasis, ReportSummary, filter_by_date_range, summarize_transactions};
use crate::budget::{BudgetPlan, summarize_variance};
use crate::transaction::Transaction;

/// Service for generating reports.
pub struct ReportService;

impl ReportService {
    /// Generates a report over the transactions dated inside the request
    /// range.
    ///
    /// Budget reports compare `budget` limits with outflows in the request
    /// range; other kinds ignore `budget`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` if the range start is after its end.
    pub fn generate<'a, I>(
        transactions: I,
        request: &ReportRequest,
        budget: &BudgetPlan,
    ) -> Result<Report, ReportError>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let range = request.range;
        let in_range = filter_by_date_range(transactions, &range).map_err(|_| {
            ReportError::InvalidDateRange {
                start: range.start,
                end: range.end,
            }
        })?;

        let (rows, basis): (Vec<&Transaction>, CategoryBasis) = match request.kind {
            ReportKind::Transactions => (in_range, CategoryBasis::Net),
            ReportKind::Income => (
                in_range.into_iter().filter(|t| t.is_income()).collect(),
                CategoryBasis::Income,
            ),
            ReportKind::Expenses | ReportKind::Budget => (
                in_range.into_iter().filter(|t| t.is_expense()).collect(),
                CategoryBasis::Expenses,
            ),
        };
        let summary = summarize_transactions(rows.iter().copied(), basis);

        let mut report = Report {
            kind: request.kind,
            title: request.kind.title().to_string(),
            range,
            transactions: rows.into_iter().cloned().collect(),
            summary,
            profit_loss: None,
            chart: Vec::new(),
            budget: None,
        };

        match request.kind {
            ReportKind::Transactions => {
                report.profit_loss = Some(ProfitLoss::from_summary(&report.summary));
            }
            ReportKind::Income => {}
            ReportKind::Expenses => report.chart = Self::chart(&report.summary),
            ReportKind::Budget => {
                let lines = budget.variance(&report.summary.by_category);
                let totals = summarize_variance(&lines);
                report.budget = Some(BudgetReport { lines, totals });
            }
        }

        Ok(report)
    }

    /// Chart slices from a category breakdown, in category order.
    #[must_use]
    pub fn chart(summary: &ReportSummary) -> Vec<ChartSlice> {
        summary
            .by_category
            .iter()
            .map(|(category, value)| ChartSlice {
                name: category.display_name().to_string(),
                value: *value,
            })
            .collect()
    }
}
