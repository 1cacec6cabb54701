//! # manifest-exists
//!
//! Hint that requires a document to declare exactly one web app manifest,
//! with a well-formed `href` that can actually be fetched.
//!
//! The hint reacts to two scanner events, `element::link` and
//! `traverse::end`, and reports problems to a [`Reporter`]:
//!
//! | Situation                            | Message                                                         |
//! |--------------------------------------|-----------------------------------------------------------------|
//! | no `<link rel="manifest">`           | `Web app manifest not specified`                                |
//! | second manifest link                 | `Web app manifest already specified`                            |
//! | missing or empty `href`              | `Web app manifest specified with invalid 'href'`                |
//! | manifest answered with status != 200 | `Web app manifest file could not be fetched (status code: <n>)` |
//! | manifest request failed              | `Web app manifest file request failed`                          |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use hint_fetch::{FetchConfig, SchemeFetcher};
//! use manifest_exists::{Element, Finding, evaluate_document};
//!
//! # async fn run() -> Result<(), hint_fetch::FetchError> {
//! let fetcher = Arc::new(SchemeFetcher::new(&FetchConfig::default())?);
//! let elements = vec![
//!     Element::new("link")
//!         .with_attribute("rel", "manifest")
//!         .with_attribute("href", "/site.webmanifest"),
//! ];
//!
//! let mut findings: Vec<Finding> = Vec::new();
//! evaluate_document("https://example.com/", &elements, fetcher, &mut findings).await;
//! for finding in &findings {
//!     println!("{}", finding.message);
//! }
//! # Ok(())
//! # }
//! ```

mod element;
mod evaluation;
mod finding;
mod metadata;
mod resolve;
mod validator;

pub use element::{Element, ElementEvent, SourceLocation};
pub use evaluation::{DocumentEvaluation, evaluate_document};
pub use finding::{
    Finding, FindingKind, MSG_ALREADY_SPECIFIED, MSG_INVALID_HREF, MSG_NOT_SPECIFIED,
    MSG_REQUEST_FAILED, Reporter,
};
pub use metadata::{Category, Channel, HintMetadata, METADATA};
pub use resolve::{ResolveError, resolve_manifest_url};
pub use validator::{MANIFEST_REL, ManifestCheck, ManifestState, ManifestValidator};
