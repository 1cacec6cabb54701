//! Scheme-dispatching fetcher.

use async_trait::async_trait;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::http::HttpFetcher;
use crate::local::LocalFileFetcher;
use crate::{ContentFetcher, FetchResponse, Url};

/// Routes `http`/`https` to [`HttpFetcher`] and `file` to [`LocalFileFetcher`].
///
/// This is the fetcher a host normally hands to a hint. `file` support is
/// governed by [`FetchConfig::allow_file_scheme`].
#[derive(Debug, Clone)]
pub struct SchemeFetcher {
    http: HttpFetcher,
    local: Option<LocalFileFetcher>,
}

impl SchemeFetcher {
    /// Build the HTTP client and local reader from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
            local: config
                .allow_file_scheme
                .then(|| LocalFileFetcher::new(config)),
        })
    }
}

#[async_trait]
impl ContentFetcher for SchemeFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        match (url.scheme(), &self.local) {
            ("http" | "https", _) => self.http.fetch(url).await,
            ("file", Some(local)) => local.fetch(url).await,
            (scheme, _) => Err(FetchError::UnsupportedScheme {
                scheme: scheme.to_owned(),
                url: url.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_scheme_dispatches_to_local() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join("site.webmanifest");
        fs::write(&manifest, "{}").unwrap();

        let fetcher = SchemeFetcher::new(&FetchConfig::default()).unwrap();
        let url = Url::from_file_path(&manifest).unwrap();
        assert_eq!(fetcher.fetch(&url).await.unwrap().status_code, None);
    }

    #[tokio::test]
    async fn test_file_scheme_disabled() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join("site.webmanifest");
        fs::write(&manifest, "{}").unwrap();

        let mut config = FetchConfig::default();
        config.allow_file_scheme = false;
        let fetcher = SchemeFetcher::new(&config).unwrap();
        let url = Url::from_file_path(&manifest).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(
            matches!(err, FetchError::UnsupportedScheme { ref scheme, .. } if scheme == "file"),
            "got: {err}"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fifo_settles_within_timeout() {
        let tmp = TempDir::new().unwrap();
        let fifo = tmp.path().join("manifest.json");
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .unwrap();
        assert!(status.success());

        let mut config = FetchConfig::default();
        config.timeout_secs = 1;
        let fetcher = SchemeFetcher::new(&config).unwrap();
        let url = Url::from_file_path(&fifo).unwrap();
        let result = tokio::time::timeout(std::time::Duration::from_secs(3), fetcher.fetch(&url))
            .await
            .expect("fetch of a FIFO must settle");
        assert!(result.is_err(), "got: {result:?}");
    }

    #[tokio::test]
    async fn test_data_scheme_unsupported() {
        let fetcher = SchemeFetcher::new(&FetchConfig::default()).unwrap();
        let url = Url::parse("data:application/json,{}").unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme { .. }), "got: {err}");
    }
}
