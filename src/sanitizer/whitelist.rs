use super::{SCRIPT_VALUE_PATTERN, Sanitizer, normalize_character_data};
use crate::{
    allow_list::AllowList,
    document_output::DocumentOutput,
    element::Element,
    metrics::Metrics,
    walk::{Decision, walk},
};
use log::debug;

/// A sanitizer keeping only tags and attributes on an allow list.
///
/// An element whose tag is not allowed is removed together with its whole
/// subtree, which is not inspected any further; trust is anchored at the
/// tag level. On surviving elements, attributes are kept only when their
/// name is allowed and their value does not contain `javascript`.
/// Character data is normalized and namespace prefixes are folded away as
/// in the blacklist policy.
#[derive(Clone, Debug)]
pub struct WhitelistSanitizer {
    allow_list: AllowList,
}

impl WhitelistSanitizer {
    /// Creates a whitelist sanitizer.
    pub const fn new(allow_list: AllowList) -> Self {
        Self { allow_list }
    }

    fn visit(&self, element: &mut Element, metrics: &mut Metrics) -> Decision {
        if !self.allow_list.is_allowed_tag(element.name().local()) {
            debug!("removing disallowed <{}> element", element.name().local());
            metrics.count_element();

            return Decision::Remove;
        }

        if element
            .href()
            .is_some_and(|href| href.contains(SCRIPT_VALUE_PATTERN))
        {
            debug!("removing href attribute with possible javascript");
            metrics.count_attribute();
            element.take_href();
        }

        element.retain_attributes(|attribute| {
            let name = attribute.name().local();

            if !self.allow_list.is_allowed_attribute(name) {
                debug!("removing disallowed attribute \"{name}\"");
                metrics.count_attribute();

                return false;
            }

            if attribute.value().contains(SCRIPT_VALUE_PATTERN) {
                debug!("removing attribute \"{name}\" with possible javascript");
                metrics.count_attribute();

                return false;
            }

            true
        });

        normalize_character_data(element);
        element.fold_namespace();

        Decision::Descend
    }
}

impl Default for WhitelistSanitizer {
    fn default() -> Self {
        Self::new(AllowList::new())
    }
}

impl Sanitizer for WhitelistSanitizer {
    fn sanitize(&self, mut element: Element) -> DocumentOutput {
        let mut metrics = Metrics::default();
        let kept = walk(&mut element, &mut |element| self.visit(element, &mut metrics));

        DocumentOutput::new(kept.then_some(element), metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Attribute;
    use pretty_assertions::assert_eq;

    fn sanitize(element: Element) -> DocumentOutput {
        WhitelistSanitizer::default().sanitize(element)
    }

    #[test]
    fn keep_allowed_tree() {
        let mut root = Element::new("svg");
        let mut group = Element::new("g");

        group.push_child(Element::new("rect"));
        root.push_child(group);

        let output = sanitize(root.clone());

        assert_eq!(output.element(), Some(&root));
        assert_eq!(output.metrics(), Metrics::default());
    }

    #[test]
    fn remove_disallowed_element_with_subtree() {
        let mut root = Element::new("svg");
        let mut foreign = Element::new("foreignObject");

        foreign.push_child(Element::new("rect"));
        root.push_child(foreign);
        root.push_child(Element::new("circle"));

        let output = sanitize(root);
        let names = output
            .element()
            .unwrap()
            .children()
            .iter()
            .map(|child| child.name().local())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["circle"]);
        assert_eq!(output.metrics().elements(), 1);
    }

    #[test]
    fn remove_deeply_nested_disallowed_subtree() {
        let mut root = Element::new("svg");
        let mut level = Element::new("script");

        for _ in 0..10 {
            let mut parent = Element::new("script");
            parent.push_child(level);
            level = parent;
        }

        root.push_child(level);

        let output = sanitize(root);

        assert!(output.element().unwrap().children().is_empty());
        // The subtree is pruned at its root without per-node inspection.
        assert_eq!(output.metrics().elements(), 1);
    }

    #[test]
    fn remove_disallowed_root() {
        let output = sanitize(Element::new("badtag"));

        assert_eq!(output.element(), None);
        assert_eq!(output.metrics().elements(), 1);
    }

    #[test]
    fn filter_attributes_preserving_order() {
        let mut element = Element::new("polygon");

        for (name, value) in [
            ("id", "triangle"),
            ("onclick", "har"),
            ("points", "0,0 0,50 50,0"),
            ("poison", "javascript:alert(1)"),
            ("fill", "#009900"),
        ] {
            element.push_attribute(Attribute::new(name, value));
        }

        let output = sanitize(element);
        let names = output
            .element()
            .unwrap()
            .attributes()
            .iter()
            .map(|attribute| attribute.name().local())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["id", "points", "fill"]);
        assert_eq!(output.metrics().attributes(), 2);
    }

    #[test]
    fn remove_allowed_attribute_with_javascript_value() {
        let mut element = Element::new("rect");

        element.push_attribute(Attribute::new("style", "background:url(javascript:x)"));

        let output = sanitize(element);

        assert!(output.element().unwrap().attributes().is_empty());
    }

    #[test]
    fn keep_clean_href() {
        let mut element = Element::new("image");

        element.set_href("sprite.svg#icon".into());

        let output = sanitize(element);

        assert_eq!(output.element().unwrap().href(), Some("sprite.svg#icon"));
    }

    #[test]
    fn remove_javascript_href() {
        let mut element = Element::new("image");

        element.set_href("javascript:alert(1)".into());

        let output = sanitize(element);

        assert_eq!(output.element().unwrap().href(), None);
        assert_eq!(output.metrics().attributes(), 1);
    }

    #[test]
    fn strip_line_breaks_in_character_data() {
        let mut element = Element::new("text");

        element.append_text("\n  chunky\n  bacon\n");

        let output = sanitize(element);

        assert_eq!(output.element().unwrap().text(), "chunky  bacon");
    }

    #[test]
    fn fold_namespace_prefixes() {
        let output = sanitize(Element::new("svg:svg"));

        assert_eq!(output.element().unwrap().name().prefix(), None);
    }

    #[test]
    fn sanitize_idempotently() {
        let mut root = Element::new("svg");
        let mut polygon = Element::new("polygon");

        polygon.push_attribute(Attribute::new("onclick", "har"));
        polygon.push_attribute(Attribute::new("fill", "red"));
        root.push_child(polygon);
        root.push_child(Element::new("badtag"));

        let first = sanitize(root).into_element().unwrap();
        let second = sanitize(first.clone());

        assert_eq!(second.element(), Some(&first));
        assert_eq!(second.metrics(), Metrics::default());
    }
}
