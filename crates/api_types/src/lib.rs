use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// The uniform response envelope used by every endpoint.
///
/// Exactly one of `data`/`error` is non-null: `success` responses carry
/// `data`, `error` responses carry the message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}

pub mod expense {
    use chrono::NaiveDate;

    use super::*;

    /// Request body for creating an expense.
    ///
    /// Loosely typed: validation of the field contents (and of the amount
    /// type) happens in the engine so that a bad field yields the specific
    /// validation message rather than a deserialization rejection.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub category: Option<String>,
        pub amount: Option<serde_json::Value>,
        pub date: Option<String>,
    }

    /// A stored expense as returned on the wire.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: u64,
        pub category: String,
        pub amount: f64,
        /// Serialized as "YYYY-MM-DD".
        pub date: NaiveDate,
    }

    /// Query parameters of `GET /expenses`. All optional.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseQuery {
        pub category: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    /// `data` payload of `GET /expenses`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryData {
        pub total: f64,
        pub expenses: Vec<ExpenseView>,
    }
}

pub mod analysis {
    use std::collections::BTreeMap;

    use super::*;

    /// One row of the per-category breakdown.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryTotal {
        pub category: String,
        pub total: f64,
    }

    /// `data` payload of `GET /expenses/analysis`.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AnalysisData {
        /// One entry per predefined category, in the fixed category order.
        pub total_by_category: Vec<CategoryTotal>,
        /// Keyed by "YYYY-MM"; only months with at least one record.
        pub monthly_totals: BTreeMap<String, f64>,
    }
}
