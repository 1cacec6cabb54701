//! Configuration for the bundled fetchers.

use serde::Deserialize;

/// Default user agent sent by [`crate::HttpFetcher`].
pub const DEFAULT_USER_AGENT: &str = concat!("hint-fetch/", env!("CARGO_PKG_VERSION"));

/// Fetcher options.
///
/// Deserializes from a partial JSON/TOML object; missing keys take their
/// default values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct FetchConfig {
    /// Total request timeout in seconds (default: 30).
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds (default: 10).
    pub connect_timeout_secs: u64,
    /// Maximum number of redirects followed before failing (default: 10).
    /// `0` disables following; the redirect status is reported as is.
    pub max_redirects: usize,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Whether `file://` URLs may be read from disk (default: `true`).
    ///
    /// Disable when evaluating untrusted documents whose manifest link could
    /// point at arbitrary local paths.
    pub allow_file_scheme: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            allow_file_scheme: true,
        }
    }
}
