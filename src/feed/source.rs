//! Feed fetching boundary

#[cfg(test)]
use mockall::automock;

use crate::feed::document::Appcast;
use crate::feed::error::FeedError;
use crate::feed::parser::parse_appcast;
use tracing::warn;

/// Trait for obtaining a parsed appcast document
///
/// The selector itself is pure; this is the one collaborator that touches the
/// network, kept behind a trait so callers can be tested without it.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the appcast.
    ///
    /// One best-effort attempt: no retries, no backoff. Document-level
    /// failures (transport, bad status, malformed XML) are errors; per-item
    /// defects are not.
    async fn fetch(&self) -> Result<Appcast, FeedError>;
}

/// Fetches the appcast over HTTP with a single GET.
pub struct HttpFeedSource {
    client: reqwest::Client,
    feed_url: String,
}

impl HttpFeedSource {
    pub fn new(feed_url: &str, user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .expect("Failed to create HTTP client"),
            feed_url: feed_url.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<Appcast, FeedError> {
        let response = self.client.get(&self.feed_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("appcast fetch returned status {}: {}", status, self.feed_url);
            return Err(FeedError::Status(status));
        }

        let body = response.text().await?;
        parse_appcast(&body)
    }
}
