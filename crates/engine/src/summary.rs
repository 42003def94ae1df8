//! Filtering and aggregation over the ledger.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::{Category, Expense};

/// Filter criteria for a summary query. All fields are optional; an empty
/// filter matches every record.
#[derive(Clone, Debug, Default)]
pub struct SummaryFilter {
    /// Exact match against the stored category name. An unknown name
    /// matches nothing rather than erroring.
    pub category: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SummaryFilter {
    /// The window [start, end], inclusive on both bounds. A record with
    /// only one bound set is checked only against that bound.
    fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category
            && expense.category.as_str() != category.as_str()
        {
            return false;
        }
        if let Some(start) = self.start
            && expense.date < start
        {
            return false;
        }
        if let Some(end) = self.end
            && expense.date > end
        {
            return false;
        }
        true
    }
}

/// The result of a filtered summary: the matching records in insertion
/// order and the sum of their amounts.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub expenses: Vec<Expense>,
}

/// Per-category running total, dates ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Categorical and temporal spending breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// One entry per predefined category, in canonical order, zero when
    /// the category has no records.
    pub total_by_category: Vec<CategoryTotal>,
    /// Keyed by "YYYY-MM"; only months with at least one record appear.
    pub monthly_totals: BTreeMap<String, f64>,
}

pub(crate) fn summarize(expenses: &[Expense], filter: &SummaryFilter) -> Summary {
    let expenses: Vec<Expense> = expenses
        .iter()
        .filter(|expense| filter.matches(expense))
        .cloned()
        .collect();
    let total = expenses.iter().map(|expense| expense.amount).sum();

    Summary { total, expenses }
}

pub(crate) fn analyze(expenses: &[Expense]) -> Analysis {
    let total_by_category = Category::ALL
        .into_iter()
        .map(|category| CategoryTotal {
            category,
            total: expenses
                .iter()
                .filter(|expense| expense.category == category)
                .map(|expense| expense.amount)
                .sum(),
        })
        .collect();

    let monthly_totals = expenses.iter().fold(BTreeMap::new(), |mut acc, expense| {
        *acc.entry(month_key(expense.date)).or_insert(0.0) += expense.amount;
        acc
    });

    Analysis {
        total_by_category,
        monthly_totals,
    }
}

fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_pads_single_digit_months() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(month_key(date), "2025-03");
    }

    #[test]
    fn empty_filter_matches_everything() {
        let expense = Expense {
            id: 1,
            category: Category::Travel,
            amount: 12.0,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        assert!(SummaryFilter::default().matches(&expense));
    }

    #[test]
    fn bounds_are_inclusive() {
        let expense = Expense {
            id: 1,
            category: Category::Travel,
            amount: 12.0,
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        };
        let filter = SummaryFilter {
            category: None,
            start: expense.date.into(),
            end: expense.date.into(),
        };
        assert!(filter.matches(&expense));
    }
}
