pub mod routes;
pub mod state;
pub mod twiml;

use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use record_core::store::RowStore;

/// Build the axum Router for the SMS webhook.
/// Used by `serve()` and available for integration testing.
pub fn build_router(store: Arc<dyn RowStore>) -> Router {
    let app_state = state::AppState::new(store);

    Router::new()
        .route("/sms", post(routes::sms::sms_reply))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the webhook server on `bind:port`.
pub async fn serve(store: Arc<dyn RowStore>, bind: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}")).await?;
    serve_on(store, listener).await
}

/// Start the webhook server on a pre-bound listener.
///
/// Lets the caller read the actual port before starting (useful when
/// `port = 0` and the OS picks a free port).
pub async fn serve_on(
    store: Arc<dyn RowStore>,
    listener: tokio::net::TcpListener,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = build_router(store);

    tracing::info!("RecordRecord webhook listening on http://{addr}/sms");

    axum::serve(listener, app).await?;
    Ok(())
}
