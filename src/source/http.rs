use anyhow::Context;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::model::NumbersPayload;

use super::{FetchReply, NumbersSource};

pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("cannot build http client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl NumbersSource for HttpSource {
    async fn fetch(&self, scope: &CancellationToken, url: &str) -> anyhow::Result<FetchReply> {
        // Dropping the in-flight future on cancellation releases the
        // underlying connection.
        let response = tokio::select! {
            _ = scope.cancelled() => anyhow::bail!("cancelled while requesting {url}"),
            result = self.client.get(url).send() => {
                result.with_context(|| format!("request to {url} failed"))?
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Ok(FetchReply::BadStatus(status.as_u16()));
        }

        let payload = tokio::select! {
            _ = scope.cancelled() => anyhow::bail!("cancelled while reading body from {url}"),
            result = response.json::<NumbersPayload>() => {
                result.with_context(|| format!("cannot decode payload from {url}"))?
            }
        };
        Ok(FetchReply::Numbers(payload.numbers))
    }
}
