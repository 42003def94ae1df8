use axum::{Json, http::StatusCode, response::IntoResponse};

use api_types::Envelope;
use engine::EngineError;

pub use server::{run, router, run_with_listener, spawn_with_listener};

mod expenses;
mod server;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{ExpenseNew, ExpenseQuery, ExpenseView, SummaryData};
    }

    pub mod analysis {
        pub use api_types::analysis::{AnalysisData, CategoryTotal};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        // Every request-path error is a rejected input; all map to 400 with
        // the uniform envelope (data stays null).
        let error = match self {
            ServerError::Engine(err) => err.to_string(),
            ServerError::Generic(err) => err,
        };

        (StatusCode::BAD_REQUEST, Json(Envelope::<()>::failure(error))).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
