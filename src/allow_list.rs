mod vocabulary;

use self::vocabulary::{
    HTML_ATTRIBUTES, HTML_TAGS, MATHML_ATTRIBUTES, MATHML_TAGS, SVG_ATTRIBUTES, SVG_TAGS,
    XML_ATTRIBUTES,
};
use std::collections::HashSet;

/// Reference lists of allowed tag and attribute names.
///
/// The lists are assembled once from the HTML, SVG, MathML, and generic XML
/// vocabularies and are immutable afterwards, so one value can back any
/// number of concurrent sanitization passes. Membership tests are
/// case-sensitive exact matches on local names, and unknown names simply
/// test false.
#[derive(Clone, Debug)]
pub struct AllowList {
    tags: HashSet<&'static str>,
    attributes: HashSet<&'static str>,
}

impl AllowList {
    /// Creates an allow list from the built-in vocabularies.
    pub fn new() -> Self {
        Self {
            tags: HTML_TAGS
                .iter()
                .chain(SVG_TAGS)
                .chain(MATHML_TAGS)
                .copied()
                .collect(),
            attributes: HTML_ATTRIBUTES
                .iter()
                .chain(SVG_ATTRIBUTES)
                .chain(MATHML_ATTRIBUTES)
                .chain(XML_ATTRIBUTES)
                .copied()
                .collect(),
        }
    }

    /// Returns whether a tag name is allowed.
    pub fn is_allowed_tag(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    /// Returns whether an attribute name is allowed.
    pub fn is_allowed_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_known_tags() {
        let list = AllowList::new();

        for tag in ["svg", "polygon", "div", "math"] {
            assert!(list.is_allowed_tag(tag), "{tag} should be allowed");
        }
    }

    #[test]
    fn reject_unknown_tag() {
        assert!(!AllowList::new().is_allowed_tag("badtag"));
    }

    #[test]
    fn reject_script_and_hyperlink_tags() {
        let list = AllowList::new();

        assert!(!list.is_allowed_tag("script"));
        assert!(!list.is_allowed_tag("a"));
    }

    #[test]
    fn allow_known_attributes() {
        let list = AllowList::new();

        for attribute in ["points", "fill", "href", "xmlns", "viewBox"] {
            assert!(
                list.is_allowed_attribute(attribute),
                "{attribute} should be allowed"
            );
        }
    }

    #[test]
    fn reject_unknown_attribute() {
        assert!(!AllowList::new().is_allowed_attribute("badattr"));
    }

    #[test]
    fn reject_event_handler_attribute() {
        assert!(!AllowList::new().is_allowed_attribute("onclick"));
    }

    // Tag names must not leak into the attribute list.
    #[test]
    fn reject_tag_names_as_attributes() {
        let list = AllowList::new();

        for tag in ["polygon", "svg", "blockquote", "mtable"] {
            assert!(
                !list.is_allowed_attribute(tag),
                "{tag} is a tag, not an attribute"
            );
        }
    }
}
