//! Append-only, in-memory expense storage.

use chrono::NaiveDate;

use crate::{Category, Expense};

/// Holds all accepted expenses in insertion order.
///
/// The ledger only ever grows; there is no update or delete. Ids are
/// sequential: the next id is always the current record count plus one.
#[derive(Debug, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Appends a validated expense and returns the stored record with its
    /// assigned id.
    pub fn add(&mut self, category: Category, amount: f64, date: NaiveDate) -> Expense {
        let expense = Expense {
            id: self.expenses.len() as u64 + 1,
            category,
            amount,
            date,
        };
        self.expenses.push(expense.clone());
        expense
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
