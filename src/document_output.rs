use crate::{element::Element, metrics::Metrics};

/// An outcome of one sanitization pass over a document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocumentOutput {
    element: Option<Element>,
    metrics: Metrics,
}

impl DocumentOutput {
    /// Creates a document output.
    pub const fn new(element: Option<Element>, metrics: Metrics) -> Self {
        Self { element, metrics }
    }

    /// Returns a sanitized document tree, or `None` when the root element
    /// itself was removed. An empty result is valid output, not an error.
    pub const fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    /// Converts an output into its document tree.
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_element(self) -> Option<Element> {
        self.element
    }

    /// Returns removal metrics of the pass.
    pub const fn metrics(&self) -> Metrics {
        self.metrics
    }
}
