use super::{SCRIPT_VALUE_PATTERN, Sanitizer, normalize_character_data};
use crate::{
    document_output::DocumentOutput,
    element::Element,
    metrics::Metrics,
    walk::{Decision, walk},
};
use log::debug;

/// Tags removed with their whole subtrees wherever they occur.
const BLOCKED_TAGS: &[&str] = &["a", "script"];

/// A prefix marking an event handler attribute.
const EVENT_ATTRIBUTE_PREFIX: &str = "on";

/// A sanitizer removing known-dangerous constructs and passing everything
/// else through.
///
/// Hyperlink and script elements are removed with their subtrees. On every
/// surviving element, a stray `href` attribute, `on*` event handler
/// attributes, and attributes whose value contains `javascript` are
/// removed, character data is normalized, and the namespace prefix is
/// folded away. Every surviving element is descended into.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlacklistSanitizer;

impl BlacklistSanitizer {
    /// Creates a blacklist sanitizer.
    pub const fn new() -> Self {
        Self
    }
}

impl Sanitizer for BlacklistSanitizer {
    fn sanitize(&self, mut element: Element) -> DocumentOutput {
        let mut metrics = Metrics::default();
        let kept = walk(&mut element, &mut |element| visit(element, &mut metrics));

        DocumentOutput::new(kept.then_some(element), metrics)
    }
}

fn visit(element: &mut Element, metrics: &mut Metrics) -> Decision {
    if BLOCKED_TAGS.contains(&element.name().local()) {
        debug!("removing <{}> element", element.name().local());
        metrics.count_element();

        return Decision::Remove;
    }

    if let Some(href) = element.take_href() {
        debug!("removing stray href attribute \"{href}\"");
        metrics.count_attribute();
    }

    element.retain_attributes(|attribute| {
        let name = attribute.name().local();

        if name.starts_with(EVENT_ATTRIBUTE_PREFIX) {
            debug!("removing event handler attribute \"{name}\"");
            metrics.count_attribute();

            false
        } else if attribute.value().contains(SCRIPT_VALUE_PATTERN) {
            debug!("removing attribute \"{name}\" with possible javascript");
            metrics.count_attribute();

            false
        } else {
            true
        }
    });

    normalize_character_data(element);
    element.fold_namespace();

    Decision::Descend
}
