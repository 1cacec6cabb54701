//! Per-document driver with an explicit completion barrier.
//!
//! [`DocumentEvaluation`] owns a fresh [`ManifestValidator`] and spawns each
//! manifest fetch on the Tokio runtime, so several checks can be in flight
//! while the scanner keeps delivering elements. [`DocumentEvaluation::finish`]
//! waits for every pending check before the end-of-traversal logic runs.

use std::fmt;
use std::sync::Arc;

use hint_fetch::{ContentFetcher, FetchError};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::element::{Element, ElementEvent};
use crate::finding::{Finding, Reporter};
use crate::validator::{ManifestCheck, ManifestValidator};

struct PendingCheck {
    check: ManifestCheck,
    handle: JoinHandle<Option<Finding>>,
}

/// Evaluation of a single document.
pub struct DocumentEvaluation {
    validator: ManifestValidator,
    fetcher: Arc<dyn ContentFetcher>,
    pending: Vec<PendingCheck>,
}

impl fmt::Debug for DocumentEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentEvaluation")
            .field("validator", &self.validator)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl DocumentEvaluation {
    #[must_use]
    pub fn new(fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self {
            validator: ManifestValidator::new(),
            fetcher,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn validator(&self) -> &ManifestValidator {
        &self.validator
    }

    /// Number of manifest checks not yet collected by [`Self::finish`].
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Deliver an `element::link` event.
    ///
    /// Findings that need no fetch are reported before this returns.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime and the element needs a fetch.
    pub fn on_element(&mut self, event: &ElementEvent<'_>, reporter: &mut dyn Reporter) {
        let Some(check) = self.validator.on_element(event, reporter) else {
            return;
        };

        let fetcher = Arc::clone(&self.fetcher);
        let task_check = check.clone();
        let handle = tokio::spawn(async move { task_check.verify(fetcher.as_ref()).await });
        self.pending.push(PendingCheck { check, handle });
    }

    /// Cancel outstanding checks. Each one is reported as a failed request
    /// when [`Self::finish`] collects it.
    pub fn abort(&mut self) {
        for pending in &self.pending {
            pending.handle.abort();
        }
    }

    /// Wait for every pending check, report its outcome, then run the
    /// end-of-traversal logic.
    pub async fn finish(self, reporter: &mut dyn Reporter) {
        debug!(pending = self.pending.len(), "settling manifest checks");
        for PendingCheck { check, handle } in self.pending {
            let finding = match handle.await {
                Ok(finding) => finding,
                Err(e) => check.interpret(&Err(FetchError::Cancelled {
                    url: check.url().to_string(),
                    cause: e.to_string(),
                })),
            };
            if let Some(finding) = finding {
                reporter.report(finding);
            }
        }
        self.validator.on_traverse_end(reporter);
    }
}

/// Evaluate one document given its elements in traversal order.
///
/// Only `<link>` elements are delivered to the hint, mirroring the
/// `element::link` subscription.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub async fn evaluate_document<'a, I>(
    resource: &str,
    elements: I,
    fetcher: Arc<dyn ContentFetcher>,
    reporter: &mut dyn Reporter,
) where
    I: IntoIterator<Item = &'a Element>,
{
    let mut evaluation = DocumentEvaluation::new(fetcher);
    for element in elements.into_iter().filter(|e| e.is_link()) {
        evaluation.on_element(&ElementEvent::new(element, resource), reporter);
    }
    evaluation.finish(reporter).await;
}
