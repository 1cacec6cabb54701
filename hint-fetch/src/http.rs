//! HTTP(S) fetcher backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::{ContentFetcher, FetchResponse, Url};

/// Fetches `http`/`https` URLs and reports the final status code.
///
/// Redirects are followed up to `max_redirects`; the status of the last
/// response is what gets reported. With `max_redirects == 0` redirects are
/// not followed and the redirect status itself is reported.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the TLS backend or the user agent
    /// cannot be initialised.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let redirect = if config.max_redirects == 0 {
            reqwest::redirect::Policy::none()
        } else {
            reqwest::redirect::Policy::limited(config.max_redirects)
        };
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .redirect(redirect)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    #[instrument(name = "hint_fetch_http", skip_all, fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme {
                scheme: url.scheme().to_owned(),
                url: url.to_string(),
            });
        }

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url.as_str(), &e))?;

        let status = response.status().as_u16();
        debug!(status, "response received");
        Ok(FetchResponse::with_status(status))
    }
}
