//! Findings and the reporter contract.

use serde::Serialize;

use crate::element::Element;

pub const MSG_NOT_SPECIFIED: &str = "Web app manifest not specified";
pub const MSG_ALREADY_SPECIFIED: &str = "Web app manifest already specified";
pub const MSG_INVALID_HREF: &str = "Web app manifest specified with invalid 'href'";
pub const MSG_REQUEST_FAILED: &str = "Web app manifest file request failed";

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FindingKind {
    /// No manifest link, or more than one.
    StructuralViolation,
    /// A manifest link with a missing or empty `href`.
    MalformedReference,
    /// The manifest answered with a status other than 200.
    UnreachableResource,
    /// The manifest could not be requested at all.
    FetchFailure,
}

/// A single reported problem.
///
/// `resource` and `element` are `None` for document-level findings (a missing
/// manifest has no element to point at).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Finding {
    pub resource: Option<String>,
    pub element: Option<Element>,
    pub message: String,
    pub kind: FindingKind,
}

impl Finding {
    fn at(resource: &str, element: &Element, message: String, kind: FindingKind) -> Self {
        Self {
            resource: Some(resource.to_owned()),
            element: Some(element.clone()),
            message,
            kind,
        }
    }

    /// The document ended without any manifest link.
    #[must_use]
    pub fn not_specified() -> Self {
        Self {
            resource: None,
            element: None,
            message: MSG_NOT_SPECIFIED.to_owned(),
            kind: FindingKind::StructuralViolation,
        }
    }

    /// A second (or later) manifest link.
    #[must_use]
    pub fn already_specified(resource: &str, element: &Element) -> Self {
        Self::at(
            resource,
            element,
            MSG_ALREADY_SPECIFIED.to_owned(),
            FindingKind::StructuralViolation,
        )
    }

    /// A manifest link whose `href` is missing or empty.
    #[must_use]
    pub fn invalid_href(resource: &str, element: &Element) -> Self {
        Self::at(
            resource,
            element,
            MSG_INVALID_HREF.to_owned(),
            FindingKind::MalformedReference,
        )
    }

    /// The manifest responded with `status_code`.
    #[must_use]
    pub fn unexpected_status(resource: &str, element: &Element, status_code: u16) -> Self {
        Self::at(
            resource,
            element,
            format!("Web app manifest file could not be fetched (status code: {status_code})"),
            FindingKind::UnreachableResource,
        )
    }

    /// The manifest request produced no response.
    #[must_use]
    pub fn request_failed(resource: &str, element: &Element) -> Self {
        Self::at(
            resource,
            element,
            MSG_REQUEST_FAILED.to_owned(),
            FindingKind::FetchFailure,
        )
    }
}

/// Sink for findings. Fire-and-forget.
pub trait Reporter {
    fn report(&mut self, finding: Finding);
}

impl Reporter for Vec<Finding> {
    fn report(&mut self, finding: Finding) {
        self.push(finding);
    }
}
