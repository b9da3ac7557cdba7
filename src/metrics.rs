use serde::Serialize;

/// Removal metrics of a sanitization pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Metrics {
    elements: usize,
    attributes: usize,
}

impl Metrics {
    /// Creates metrics.
    pub const fn new(elements: usize, attributes: usize) -> Self {
        Self {
            elements,
            attributes,
        }
    }

    /// Returns a number of removed elements.
    pub const fn elements(&self) -> usize {
        self.elements
    }

    /// Returns a number of removed attributes.
    pub const fn attributes(&self) -> usize {
        self.attributes
    }

    /// Returns a total number of removals.
    pub const fn total(&self) -> usize {
        self.elements + self.attributes
    }

    /// Counts a removed element.
    pub const fn count_element(&mut self) {
        self.elements += 1;
    }

    /// Counts a removed attribute.
    pub const fn count_attribute(&mut self) {
        self.attributes += 1;
    }

    /// Merges metrics of another pass.
    pub const fn merge(&mut self, other: &Self) {
        self.elements += other.elements;
        self.attributes += other.attributes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_removals() {
        let mut metrics = Metrics::default();

        metrics.count_element();
        metrics.count_attribute();
        metrics.count_attribute();

        assert_eq!(metrics.elements(), 1);
        assert_eq!(metrics.attributes(), 2);
        assert_eq!(metrics.total(), 3);
    }

    #[test]
    fn merge_metrics() {
        let mut metrics = Metrics::new(1, 2);

        metrics.merge(&Metrics::new(3, 4));

        assert_eq!(metrics, Metrics::new(4, 6));
    }
}
