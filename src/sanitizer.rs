mod blacklist;
mod whitelist;

pub use self::{blacklist::BlacklistSanitizer, whitelist::WhitelistSanitizer};
use crate::{document_output::DocumentOutput, element::Element};

/// Tags whose character data keeps significant whitespace.
const TEXT_EXEMPT_TAGS: &[&str] = &["p", "span", "div"];

/// A substring marking an attribute value as a possible script vector.
const SCRIPT_VALUE_PATTERN: &str = "javascript";

/// A sanitization policy applied to a document tree.
///
/// Sanitization is total: it mutates or prunes the tree but never fails,
/// and a document with nothing left in it is valid output.
pub trait Sanitizer {
    /// Sanitizes a document tree.
    fn sanitize(&self, element: Element) -> DocumentOutput;
}

/// Strips CR/LF characters from character data and trims the rest, except
/// inside the tags where whitespace is presumed significant.
fn normalize_character_data(element: &mut Element) {
    if TEXT_EXEMPT_TAGS.contains(&element.name().local()) {
        return;
    }

    let text = element.text().replace(['\n', '\r'], "");

    element.set_text(text.trim().into());
}
