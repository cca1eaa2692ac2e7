mod collect;
mod dispatch;
mod merge;

pub use collect::CollectEnd;
pub use merge::finalize;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::source::NumbersSource;

pub struct Aggregator {
    source: Arc<dyn NumbersSource>,
    budget: Duration,
}

impl Aggregator {
    pub fn new(source: Arc<dyn NumbersSource>, budget: Duration) -> Self {
        Self { source, budget }
    }

    /// Fan out one retrieval per url, collect whatever arrives within the
    /// budget, and merge it into an ascending deduplicated sequence. Sources
    /// that fail or outlive the budget contribute nothing; the sequence is
    /// never an error, only possibly empty.
    pub async fn handle(&self, urls: Vec<String>) -> Vec<i64> {
        let start = Instant::now();

        // One scope per request. The guard cancels it if this future is
        // dropped mid-flight (client disconnect), the watchdog cancels it
        // when the budget runs out, and the explicit cancel below reaches
        // stragglers on natural completion.
        let scope = CancellationToken::new();
        let _guard = scope.clone().drop_guard();

        let budget = self.budget;
        let watchdog = scope.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(budget) => watchdog.cancel(),
                _ = watchdog.cancelled() => {}
            }
        });

        let expected = urls.len();
        let outcomes = dispatch::dispatch(&scope, Arc::clone(&self.source), urls);
        let (collected, end) = collect::collect(&scope, expected, outcomes).await;
        scope.cancel();

        let numbers = merge::finalize(collected);
        info!(
            sources = expected,
            collected = numbers.len(),
            end = ?end,
            ms = start.elapsed().as_millis() as u64,
            "request processed"
        );
        numbers
    }
}
