use anyhow::Result;
use voyage_http::create_router;

use crate::open_state;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let state = open_state().await?;
    let backend = state.backend;

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!(backend, "Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
