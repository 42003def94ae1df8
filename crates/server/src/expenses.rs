//! Expenses API endpoints.

use api_types::{
    Envelope,
    analysis::{AnalysisData, CategoryTotal},
    expense::{ExpenseNew, ExpenseQuery, ExpenseView, SummaryData},
};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{ExpenseCandidate, SummaryFilter};

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        category: expense.category.as_str().to_string(),
        amount: expense.amount,
        date: expense.date,
    }
}

pub async fn add(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<ExpenseView>>), ServerError> {
    let Json(payload) = payload.map_err(|rejection| ServerError::Generic(rejection.body_text()))?;

    let candidate = ExpenseCandidate {
        category: payload.category,
        amount: payload.amount,
        date: payload.date,
    };
    let expense = state.engine.write().await.add_expense(&candidate)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(map_expense(expense))),
    ))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ExpenseQuery>,
) -> Json<Envelope<SummaryData>> {
    // Empty or unparseable bounds are ignored rather than rejected; the
    // listing always succeeds.
    let filter = SummaryFilter {
        category: query.category.filter(|category| !category.is_empty()),
        start: query.start_date.as_deref().and_then(|raw| raw.parse().ok()),
        end: query.end_date.as_deref().and_then(|raw| raw.parse().ok()),
    };

    let summary = state.engine.read().await.summary(&filter);

    Json(Envelope::success(SummaryData {
        total: summary.total,
        expenses: summary.expenses.into_iter().map(map_expense).collect(),
    }))
}

pub async fn analysis(State(state): State<ServerState>) -> Json<Envelope<AnalysisData>> {
    let analysis = state.engine.read().await.analysis();

    Json(Envelope::success(AnalysisData {
        total_by_category: analysis
            .total_by_category
            .into_iter()
            .map(|entry| CategoryTotal {
                category: entry.category.as_str().to_string(),
                total: entry.total,
            })
            .collect(),
        monthly_totals: analysis.monthly_totals,
    }))
}
