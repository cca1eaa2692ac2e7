mod http;
mod stub;

pub use http::HttpSource;
pub use stub::StubSource;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchReply {
    /// Decoded numbers from a successful response.
    Numbers(Vec<i64>),
    /// The source was reachable but answered without a usable payload.
    BadStatus(u16),
}

#[async_trait]
pub trait NumbersSource: Send + Sync {
    /// One bounded retrieval against one source url. Blocks until the source
    /// answers, fails, or `scope` is cancelled, whichever comes first; a
    /// cancelled fetch must return promptly without leaking its connection.
    async fn fetch(&self, scope: &CancellationToken, url: &str) -> anyhow::Result<FetchReply>;
}
