//! Local filesystem fetcher for `file://` URLs.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::{ContentFetcher, FetchResponse, Url};

/// Checks that `file://` URLs name a readable regular file.
///
/// A readable file yields [`FetchResponse::local`]: there is no status code
/// for local access, so callers skip status interpretation. The content is
/// never read; devices, pipes and directories are rejected from their
/// metadata before anything is opened.
#[derive(Debug, Clone, Copy)]
pub struct LocalFileFetcher {
    timeout: Duration,
}

impl LocalFileFetcher {
    /// Build a fetcher bounded by `config.timeout_secs`.
    #[must_use]
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl Default for LocalFileFetcher {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

async fn check_readable(path: &Path) -> Result<(), FetchError> {
    let io_error = |source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(io_error)?;
    if !metadata.is_file() {
        return Err(FetchError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    tokio::fs::File::open(path).await.map_err(io_error)?;
    Ok(())
}

#[async_trait]
impl ContentFetcher for LocalFileFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        if url.scheme() != "file" {
            return Err(FetchError::UnsupportedScheme {
                scheme: url.scheme().to_owned(),
                url: url.to_string(),
            });
        }

        let path = url.to_file_path().map_err(|()| FetchError::InvalidFileUrl {
            url: url.to_string(),
        })?;

        tokio::time::timeout(self.timeout, check_readable(&path))
            .await
            .map_err(|_| FetchError::Timeout {
                url: url.to_string(),
            })??;

        debug!(path = %path.display(), "local resource readable");
        Ok(FetchResponse::local())
    }
}
