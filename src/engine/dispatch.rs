use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::source::{FetchReply, NumbersSource};

/// Starts one retrieval task per url and returns the fan-in channel without
/// waiting for any of them. Capacity covers every producer, so together with
/// the cancel-aware send a straggler can never block after the collector has
/// stopped draining.
pub(super) fn dispatch(
    scope: &CancellationToken,
    source: Arc<dyn NumbersSource>,
    urls: Vec<String>,
) -> mpsc::Receiver<Vec<i64>> {
    let (tx, rx) = mpsc::channel(urls.len().max(1));
    for url in urls {
        let scope = scope.clone();
        let source = Arc::clone(&source);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = fetch_outcome(&scope, source.as_ref(), &url).await;
            tokio::select! {
                _ = scope.cancelled() => {} // collector is gone; drop the result
                _ = tx.send(outcome) => {}
            }
        });
    }
    rx
}

// Any failure degrades to an empty outcome so the collector still gets to
// decrement its remaining count for this url.
async fn fetch_outcome(
    scope: &CancellationToken,
    source: &dyn NumbersSource,
    url: &str,
) -> Vec<i64> {
    match source.fetch(scope, url).await {
        Ok(FetchReply::Numbers(numbers)) => numbers,
        Ok(FetchReply::BadStatus(status)) => {
            warn!(url, status, "source answered without numbers");
            Vec::new()
        }
        Err(err) => {
            warn!(url, error = %err, "source fetch failed");
            Vec::new()
        }
    }
}
