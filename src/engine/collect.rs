use std::collections::HashSet;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// How a collection run finished. `DeadlineExceeded` only notes that some
/// sources never produced an outcome; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectEnd {
    Complete,
    DeadlineExceeded,
}

/// Drains the fan-in channel until every dispatched url is accounted for or
/// the scope cancels first. Outcomes received after cancellation are never
/// merged; whatever was merged before it stays in — partial results are the
/// documented behavior, not a fault.
pub(super) async fn collect(
    scope: &CancellationToken,
    expected: usize,
    mut outcomes: mpsc::Receiver<Vec<i64>>,
) -> (HashSet<i64>, CollectEnd) {
    let mut seen = HashSet::new();
    let mut remaining = expected;
    while remaining > 0 {
        tokio::select! {
            outcome = outcomes.recv() => match outcome {
                Some(numbers) => {
                    debug!(merged = numbers.len(), remaining, "outcome received");
                    remaining -= 1;
                    seen.extend(numbers);
                }
                None => break,
            },
            _ = scope.cancelled() => {
                warn!(unaccounted = remaining, "collection stopped before every source answered");
                break;
            }
        }
    }
    let end = if remaining == 0 {
        CollectEnd::Complete
    } else {
        CollectEnd::DeadlineExceeded
    };
    (seen, end)
}
