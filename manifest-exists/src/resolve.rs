//! Manifest URL resolution.

use hint_fetch::Url;
use thiserror::Error;

/// Why a manifest `href` could not be turned into an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The `href` has a scheme but is not a valid URL.
    #[error("manifest href '{href}' is not a valid URL: {cause}")]
    InvalidAbsolute { href: String, cause: String },

    /// The `href` is relative and the document URL cannot serve as a base.
    #[error("cannot resolve manifest href '{href}' against '{resource}': {cause}")]
    InvalidBase {
        href: String,
        resource: String,
        cause: String,
    },
}

/// Whether `reference` starts with a URL scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`).
fn has_scheme(reference: &str) -> bool {
    let Some((scheme, _)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolve a manifest `href` to the absolute URL that should be fetched.
///
/// An `href` with its own scheme is used as is. Anything else (scheme-relative
/// `//host/path`, absolute-path `/path`, or relative-path `path`) is resolved
/// against `resource`, the URL of the document that declared it.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidAbsolute`] for a malformed absolute `href`, and
/// [`ResolveError::InvalidBase`] when `resource` is not a URL that relative
/// references can be resolved against.
pub fn resolve_manifest_url(resource: &str, href: &str) -> Result<Url, ResolveError> {
    let candidate = href.trim_matches(|c: char| c.is_ascii_control() || c == ' ');

    if has_scheme(candidate) {
        return Url::parse(candidate).map_err(|e| ResolveError::InvalidAbsolute {
            href: href.to_owned(),
            cause: e.to_string(),
        });
    }

    let invalid_base = |cause: String| ResolveError::InvalidBase {
        href: href.to_owned(),
        resource: resource.to_owned(),
        cause,
    };
    let base = Url::parse(resource).map_err(|e| invalid_base(e.to_string()))?;
    base.join(candidate).map_err(|e| invalid_base(e.to_string()))
}
