//! # sdf-fetch
//!
//! Downloads SDFormat specification pages.
//!
//! The element pages live at `{base_url}{element}`; the index page at
//! `base_url` links them all. Extraction never sees a partial page: any
//! transport or status failure surfaces as a [`FetchError`] instead.

mod error;
mod http;

pub use error::FetchError;
pub use http::check_response;

use std::sync::Arc;
use std::time::Duration;

use sdf_config::SourceConfig;
use tokio::sync::Semaphore;

/// Result of fetching one element page.
#[derive(Debug)]
pub struct ElementPage {
    pub element: String,
    pub url: String,
    pub html: Result<String, FetchError>,
}

/// HTTP client bound to one specification source.
#[derive(Debug, Clone)]
pub struct PageClient {
    http: reqwest::Client,
    source: SourceConfig,
}

impl PageClient {
    /// Build a client with the source's user agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the underlying `reqwest::Client`
    /// cannot be built (for example, no TLS backend).
    pub fn new(source: SourceConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(source.user_agent.clone())
            .timeout(Duration::from_secs(source.timeout_secs))
            .build()?;
        Ok(Self { http, source })
    }

    #[must_use]
    pub const fn source(&self) -> &SourceConfig {
        &self.source
    }

    /// URL of the page documenting `element`.
    #[must_use]
    pub fn element_url(&self, element: &str) -> String {
        self.source.element_url(element)
    }

    /// Download `url` and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails or the server answers
    /// with a non-success status.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "fetching page");
        let resp = check_response(self.http.get(url).send().await?).await?;
        let body = resp.text().await?;
        tracing::debug!(url, bytes = body.len(), "page fetched");
        Ok(body)
    }

    /// Download the page documenting `element`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch`].
    pub async fn fetch_element(&self, element: &str) -> Result<String, FetchError> {
        self.fetch(&self.element_url(element)).await
    }

    /// Download the specification index page.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch`].
    pub async fn fetch_index(&self) -> Result<String, FetchError> {
        self.fetch(&self.source.base_url).await
    }

    /// Download several element pages, at most `source.concurrency` at once.
    ///
    /// Failures are returned per page rather than aborting the batch; results
    /// keep the order of `elements`.
    pub async fn fetch_elements<I, S>(&self, elements: I) -> Vec<ElementPage>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements: Vec<String> = elements.into_iter().map(Into::into).collect();
        let permits = Arc::new(Semaphore::new(self.source.concurrency.max(1)));
        let mut set = tokio::task::JoinSet::new();

        for (idx, element) in elements.iter().enumerate() {
            let client = self.clone();
            let permits = Arc::clone(&permits);
            let url = self.element_url(element);
            set.spawn(async move {
                let _permit = permits.acquire_owned().await.ok();
                (idx, client.fetch(&url).await)
            });
        }

        let mut bodies: Vec<Option<Result<String, FetchError>>> =
            elements.iter().map(|_| None).collect();
        while let Some(res) = set.join_next().await {
            match res {
                Ok((idx, html)) => bodies[idx] = Some(html),
                Err(e) => tracing::warn!(%e, "page fetch task failed"),
            }
        }

        elements
            .into_iter()
            .zip(bodies)
            .map(|(element, html)| ElementPage {
                url: self.element_url(&element),
                element,
                html: html.unwrap_or(Err(FetchError::Aborted)),
            })
            .collect()
    }
}
