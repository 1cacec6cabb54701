//! Declarative hint metadata consumed by a host's hint registry.

use std::fmt;

use serde::Serialize;

/// Hint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Category {
    /// Progressive Web App checks.
    Pwa,
}

/// Events a hint subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Channel {
    /// A `<link>` element was encountered.
    #[serde(rename = "element::link")]
    ElementLink,
    /// The document traversal finished.
    #[serde(rename = "traverse::end")]
    TraverseEnd,
}

impl Channel {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ElementLink => "element::link",
            Self::TraverseEnd => "traverse::end",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "element::link" => Some(Self::ElementLink),
            "traverse::end" => Some(Self::TraverseEnd),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct HintMetadata {
    pub id: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Whether findings may be fixed automatically.
    pub fixable: bool,
    /// JSON schemas for user options. Empty: the hint takes none.
    pub schema: &'static [&'static str],
    pub channels: &'static [Channel],
}

/// Metadata for the `manifest-exists` hint.
pub const METADATA: HintMetadata = HintMetadata {
    id: "manifest-exists",
    category: Category::Pwa,
    description: "Require a web app manifest",
    fixable: true,
    schema: &[],
    channels: &[Channel::ElementLink, Channel::TraverseEnd],
};
