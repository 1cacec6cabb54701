//! Error types for content fetching.

use std::path::PathBuf;

use thiserror::Error;

/// Why a fetch produced no response.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The fetcher does not handle this URL scheme.
    #[error("unsupported URL scheme '{scheme}' for {url}")]
    UnsupportedScheme {
        /// The offending scheme (without `:`).
        scheme: String,
        /// The full URL that was requested.
        url: String,
    },

    /// A `file://` URL that does not map to a local path.
    #[error("URL does not name a local file: {url}")]
    InvalidFileUrl {
        /// The full URL that was requested.
        url: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// The full URL that was requested.
        url: String,
    },

    /// Connection, TLS, redirect or protocol failure.
    #[error("request to {url} failed: {cause}")]
    Network {
        /// The full URL that was requested.
        url: String,
        /// Description reported by the HTTP client.
        cause: String,
    },

    /// A local file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Path derived from the `file://` URL.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A `file://` URL that names a directory, device, pipe or socket.
    #[error("not a regular file: {}", .path.display())]
    NotAFile {
        /// Path derived from the `file://` URL.
        path: PathBuf,
    },

    /// The fetch was aborted or its task did not run to completion.
    #[error("request to {url} did not complete: {cause}")]
    Cancelled {
        /// The full URL that was requested.
        url: String,
        /// Why the request stopped.
        cause: String,
    },

    /// The HTTP client could not be constructed from the configuration.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Classify a `reqwest` error raised while requesting `url`.
    pub(crate) fn from_reqwest(url: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_owned(),
            }
        } else {
            Self::Network {
                url: url.to_owned(),
                cause: err.to_string(),
            }
        }
    }
}
