//! Expense records and the validation of candidate records.

use chrono::NaiveDate;

use crate::{Category, EngineError, ResultEngine};

/// A stored expense record.
///
/// Records are immutable once created and are never deleted; the id is
/// assigned by the ledger at creation time.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub category: Category,
    pub amount: f64,
    pub date: NaiveDate,
}

/// An unvalidated candidate for a new expense.
///
/// Fields are loosely typed on purpose: a request with a missing, empty or
/// wrongly-typed field must fail validation with the matching engine error,
/// not fail JSON deserialization upstream.
#[derive(Clone, Debug, Default)]
pub struct ExpenseCandidate {
    pub category: Option<String>,
    pub amount: Option<serde_json::Value>,
    pub date: Option<String>,
}

impl ExpenseCandidate {
    /// Checks the candidate against the record rules, in order: category,
    /// amount, date. The first failing rule wins. No side effects.
    pub fn validate(&self) -> ResultEngine<(Category, f64, NaiveDate)> {
        let category = match self.category.as_deref() {
            Some(name) if !name.is_empty() => name.parse::<Category>()?,
            _ => return Err(EngineError::InvalidCategory),
        };

        let amount = self
            .amount
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .ok_or(EngineError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(EngineError::InvalidAmount);
        }

        let date = match self.date.as_deref() {
            Some(raw) => raw.parse::<NaiveDate>().map_err(|_| EngineError::InvalidDate)?,
            None => return Err(EngineError::InvalidDate),
        };

        Ok((category, amount, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(category: &str, amount: serde_json::Value, date: &str) -> ExpenseCandidate {
        ExpenseCandidate {
            category: Some(category.to_string()),
            amount: Some(amount),
            date: Some(date.to_string()),
        }
    }

    #[test]
    fn accepts_a_well_formed_candidate() {
        let (category, amount, date) = candidate("Food", 50.into(), "2024-12-03")
            .validate()
            .unwrap();
        assert_eq!(category, Category::Food);
        assert_eq!(amount, 50.0);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 3).unwrap());
    }

    #[test]
    fn missing_fields_fail_in_rule_order() {
        assert_eq!(
            ExpenseCandidate::default().validate(),
            Err(EngineError::InvalidCategory)
        );

        let no_amount = ExpenseCandidate {
            category: Some("Food".to_string()),
            amount: None,
            date: None,
        };
        assert_eq!(no_amount.validate(), Err(EngineError::InvalidAmount));

        let no_date = ExpenseCandidate {
            category: Some("Food".to_string()),
            amount: Some(10.into()),
            date: None,
        };
        assert_eq!(no_date.validate(), Err(EngineError::InvalidDate));
    }

    #[test]
    fn category_is_checked_before_amount() {
        let both_bad = candidate("Snacks", serde_json::Value::Null, "2024-12-03");
        assert_eq!(both_bad.validate(), Err(EngineError::InvalidCategory));
    }

    #[test]
    fn rejects_non_numeric_and_non_positive_amounts() {
        for amount in [
            serde_json::json!("50"),
            serde_json::json!(true),
            serde_json::json!(0),
            serde_json::json!(-12.5),
        ] {
            let candidate = candidate("Food", amount, "2024-12-03");
            assert_eq!(candidate.validate(), Err(EngineError::InvalidAmount));
        }
    }

    #[test]
    fn rejects_unparseable_dates() {
        for date in ["yesterday", "2024-13-01", "2024-02-30", ""] {
            let candidate = candidate("Food", 10.into(), date);
            assert_eq!(candidate.validate(), Err(EngineError::InvalidDate));
        }
    }
}
