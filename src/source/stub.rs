use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{FetchReply, NumbersSource};

/// In-memory stand-in for real numbers endpoints: each known url answers with
/// canned numbers after a fixed delay, unknown urls answer 404.
#[derive(Default)]
pub struct StubSource {
    canned: HashMap<String, Canned>,
    in_flight: Arc<AtomicUsize>,
}

#[derive(Debug, Clone)]
struct Canned {
    numbers: Vec<i64>,
    delay: Duration,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(mut self, url: &str, numbers: Vec<i64>, delay: Duration) -> Self {
        self.canned.insert(url.to_string(), Canned { numbers, delay });
        self
    }

    /// Fetches currently parked inside this stub. Drains to zero once
    /// cancellation has reached every straggler.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NumbersSource for StubSource {
    async fn fetch(&self, scope: &CancellationToken, url: &str) -> anyhow::Result<FetchReply> {
        let Some(canned) = self.canned.get(url) else {
            return Ok(FetchReply::BadStatus(404));
        };

        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let outcome = tokio::select! {
            _ = scope.cancelled() => Err(anyhow::anyhow!("cancelled while waiting on {url}")),
            _ = tokio::time::sleep(canned.delay) => Ok(FetchReply::Numbers(canned.numbers.clone())),
        };
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}
