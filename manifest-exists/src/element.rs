//! Element snapshots delivered by the document scanner.

use serde::Serialize;

/// Position of an element in the document source (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

/// An HTML element as seen by a hint.
///
/// The scanner builds one per discovered element. Attribute names are matched
/// ASCII case-insensitively, as in HTML; attribute values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Element {
    /// Tag name, e.g. `link`.
    pub tag_name: String,
    /// Attributes in source order.
    pub attributes: Vec<(String, String)>,
    /// Where the element starts, when the scanner tracks positions.
    pub location: Option<SourceLocation>,
}

impl Element {
    /// Create an element with no attributes.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Vec::new(),
            location: None,
        }
    }

    /// Append an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Record the element's source position.
    #[must_use]
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(SourceLocation { line, column });
        self
    }

    /// Value of the first attribute called `name`, if present.
    ///
    /// Duplicate attributes follow HTML parsing rules: the first one wins.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether this is a `<link>` element.
    #[must_use]
    pub fn is_link(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("link")
    }
}

/// One "element encountered" notification.
///
/// Borrowed for the duration of a single handler call; handlers copy out
/// whatever they need to keep.
#[derive(Debug, Clone, Copy)]
pub struct ElementEvent<'a> {
    pub element: &'a Element,
    /// Base URL of the document the element belongs to.
    pub resource: &'a str,
}

impl<'a> ElementEvent<'a> {
    #[must_use]
    pub fn new(element: &'a Element, resource: &'a str) -> Self {
        Self { element, resource }
    }
}
