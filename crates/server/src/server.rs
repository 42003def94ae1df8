use axum::{
    Router,
    routing::{get, post},
};

use engine::SharedEngine;

use crate::expenses;

#[derive(Clone)]
pub struct ServerState {
    pub engine: SharedEngine,
}

pub fn router(engine: SharedEngine) -> Router {
    let state = ServerState { engine };

    Router::new()
        .route("/expenses", post(expenses::add).get(expenses::list))
        .route("/expenses/analysis", get(expenses::analysis))
        .with_state(state)
}

pub async fn run(engine: SharedEngine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: SharedEngine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

pub fn spawn_with_listener(
    engine: SharedEngine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
