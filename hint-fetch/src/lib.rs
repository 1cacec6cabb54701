//! # hint-fetch
//!
//! Content fetchers used by hints to check that a linked resource is reachable.
//!
//! A hint only needs to know *whether* a resource could be retrieved and, for
//! HTTP resources, which status code came back. Fetchers therefore return a
//! [`FetchResponse`] carrying an optional status code: `None` means the resource
//! was read through a non-HTTP channel (a local file) where no status applies.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hint_fetch::{ContentFetcher, FetchConfig, SchemeFetcher, Url};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = SchemeFetcher::new(&FetchConfig::default())?;
//! let url = Url::parse("https://example.com/manifest.webmanifest")?;
//! let response = fetcher.fetch(&url).await?;
//! println!("status: {:?}", response.status_code);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod http;
mod local;
mod scheme;

pub use config::FetchConfig;
pub use error::FetchError;
pub use http::HttpFetcher;
pub use local::LocalFileFetcher;
pub use reqwest::Url;
pub use scheme::SchemeFetcher;

use async_trait::async_trait;

/// Outcome of a successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code, or `None` for non-HTTP (local) access.
    pub status_code: Option<u16>,
}

impl FetchResponse {
    /// A response received over HTTP with the given status code.
    #[must_use]
    pub const fn with_status(status_code: u16) -> Self {
        Self {
            status_code: Some(status_code),
        }
    }

    /// A resource read without HTTP semantics (e.g. `file://`).
    #[must_use]
    pub const fn local() -> Self {
        Self { status_code: None }
    }
}

/// Retrieves the content behind a URL.
///
/// Implementations own their timeout policy. Any failure to obtain a response
/// (transport, I/O, timeout) is an `Err`; a response with an unexpected status
/// code is still `Ok`, interpretation is left to the caller.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when no response could be obtained.
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError>;
}
