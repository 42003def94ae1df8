//! In-memory expense tracking engine.
//!
//! The engine owns the ledger and exposes the three operations the HTTP
//! layer and the report scheduler need: add a validated expense, compute a
//! filtered summary, compute the categorical/monthly analysis.

use std::sync::Arc;

use tokio::sync::RwLock;

pub use category::Category;
pub use error::EngineError;
pub use expense::{Expense, ExpenseCandidate};
pub use ledger::Ledger;
pub use summary::{Analysis, CategoryTotal, Summary, SummaryFilter};

mod category;
mod error;
mod expense;
mod ledger;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;

/// The engine shared between request handlers and the scheduler.
///
/// Writes only ever append, so readers never observe a partially applied
/// change.
pub type SharedEngine = Arc<RwLock<Engine>>;

#[derive(Debug, Default)]
pub struct Engine {
    ledger: Ledger,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the engine for shared use by the server and the scheduler.
    pub fn into_shared(self) -> SharedEngine {
        Arc::new(RwLock::new(self))
    }

    /// Validates a candidate and appends it to the ledger.
    ///
    /// On a validation error nothing is stored; the ledger is untouched.
    pub fn add_expense(&mut self, candidate: &ExpenseCandidate) -> ResultEngine<Expense> {
        let (category, amount, date) = candidate.validate()?;
        Ok(self.ledger.add(category, amount, date))
    }

    /// Filtered summary over the ledger, in insertion order.
    pub fn summary(&self, filter: &SummaryFilter) -> Summary {
        summary::summarize(self.ledger.all(), filter)
    }

    /// Per-category and per-month spending breakdown.
    pub fn analysis(&self) -> Analysis {
        summary::analyze(self.ledger.all())
    }

    /// Number of stored expenses.
    pub fn count(&self) -> usize {
        self.ledger.len()
    }
}
