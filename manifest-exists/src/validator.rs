//! The manifest state machine.
//!
//! A [`ManifestValidator`] lives for one document traversal. It tracks whether a
//! `<link rel="manifest">` has been declared and decides, per link, whether the
//! declaration is a duplicate, malformed, or needs a reachability check.
//!
//! Handling a link is split in two:
//! 1. [`ManifestValidator::on_element`] runs synchronously, in event-arrival
//!    order, and is the only place state changes. Duplicate detection therefore
//!    never depends on when fetches complete.
//! 2. The returned [`ManifestCheck`] owns everything needed to verify the
//!    manifest and can be awaited (or spawned) independently.

use hint_fetch::{ContentFetcher, FetchError, FetchResponse, Url};
use tracing::{debug, trace, warn};

use crate::element::{Element, ElementEvent};
use crate::finding::{Finding, Reporter};
use crate::resolve::resolve_manifest_url;

/// `rel` value that declares a web app manifest. Compared case-sensitively.
pub const MANIFEST_REL: &str = "manifest";

/// Whether a manifest link has been seen in the current traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestState {
    #[default]
    NoManifestSeen,
    /// Entered on the first manifest link, valid or not. Never left.
    ManifestSeen,
}

/// Per-document manifest hint state.
#[derive(Debug, Default)]
pub struct ManifestValidator {
    state: ManifestState,
}

impl ManifestValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ManifestState {
        self.state
    }

    /// Whether any manifest link has been declared so far.
    #[must_use]
    pub fn manifest_declared(&self) -> bool {
        self.state == ManifestState::ManifestSeen
    }

    /// Handle an "element encountered" event.
    ///
    /// Reports duplicate declarations and missing/empty `href`s immediately.
    /// Returns a [`ManifestCheck`] when the link still has to be fetched.
    pub fn on_element(
        &mut self,
        event: &ElementEvent<'_>,
        reporter: &mut dyn Reporter,
    ) -> Option<ManifestCheck> {
        let element = event.element;
        if element.get_attribute("rel") != Some(MANIFEST_REL) {
            trace!(tag = %element.tag_name, "not a manifest link");
            return None;
        }

        if self.manifest_declared() {
            debug!(resource = event.resource, "duplicate manifest link");
            reporter.report(Finding::already_specified(event.resource, element));
            return None;
        }

        self.state = ManifestState::ManifestSeen;
        debug!(resource = event.resource, "manifest link declared");

        let href = match element.get_attribute("href") {
            Some(href) if !href.is_empty() => href,
            _ => {
                reporter.report(Finding::invalid_href(event.resource, element));
                return None;
            }
        };

        let url = match resolve_manifest_url(event.resource, href) {
            Ok(url) => url,
            Err(e) => {
                warn!(resource = event.resource, href, error = %e, "manifest URL not resolvable");
                reporter.report(Finding::request_failed(event.resource, element));
                return None;
            }
        };

        debug!(resource = event.resource, url = %url, "manifest URL resolved");
        Some(ManifestCheck {
            resource: event.resource.to_owned(),
            element: element.clone(),
            url,
        })
    }

    /// Handle the "traversal ended" event.
    ///
    /// Must only be called once every [`ManifestCheck`] produced for this
    /// document has been settled.
    pub fn on_traverse_end(&self, reporter: &mut dyn Reporter) {
        if !self.manifest_declared() {
            reporter.report(Finding::not_specified());
        }
    }
}

/// A pending reachability check for one declared manifest.
#[derive(Debug, Clone)]
pub struct ManifestCheck {
    resource: String,
    element: Element,
    url: Url,
}

impl ManifestCheck {
    /// The absolute manifest URL to fetch.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// URL of the document that declared the manifest.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Fetch the manifest and turn the outcome into at most one finding.
    pub async fn verify(&self, fetcher: &dyn ContentFetcher) -> Option<Finding> {
        let outcome = fetcher.fetch(&self.url).await;
        self.interpret(&outcome)
    }

    /// Map a fetch outcome to a finding.
    ///
    /// `None` and `200` status codes are accepted; any other status is
    /// reported with its code; every error becomes "request failed".
    #[must_use]
    pub fn interpret(&self, outcome: &Result<FetchResponse, FetchError>) -> Option<Finding> {
        match outcome {
            Ok(FetchResponse {
                status_code: None | Some(200),
            }) => None,
            Ok(FetchResponse {
                status_code: Some(code),
            }) => {
                debug!(url = %self.url, status = code, "manifest not fetched");
                Some(Finding::unexpected_status(
                    &self.resource,
                    &self.element,
                    *code,
                ))
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "manifest request failed");
                Some(Finding::request_failed(&self.resource, &self.element))
            }
        }
    }
}
