use std::sync::Arc;

use anyhow::Context;
use axum::extract::{RawQuery, State};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::engine::Aggregator;
use crate::model::{Config, NumbersPayload};

pub fn router(aggregator: Arc<Aggregator>) -> Router {
    Router::new()
        .route("/numbers", get(numbers))
        .with_state(aggregator)
}

pub async fn serve(cfg: Config, aggregator: Arc<Aggregator>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen)
        .await
        .with_context(|| format!("cannot bind {}", cfg.listen))?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(aggregator))
        .await
        .context("server stopped")?;
    Ok(())
}

/// Always answers 200 with whatever was collected — per-source failures and
/// deadline truncation never show up in the response status. If the client
/// disconnects, dropping this future cancels the request's retrieval scope.
async fn numbers(
    State(aggregator): State<Arc<Aggregator>>,
    RawQuery(query): RawQuery,
) -> Json<NumbersPayload> {
    let urls = source_urls(query.as_deref().unwrap_or(""));
    let numbers = aggregator.handle(urls).await;
    Json(NumbersPayload { numbers })
}

// Repeated `u` keys; everything else in the query string is ignored.
fn source_urls(query: &str) -> Vec<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter_map(|(key, value)| (key == "u").then(|| value.into_owned()))
        .collect()
}
