use core::fmt::{self, Display, Formatter};

/// A qualified tag or attribute name with an optional namespace prefix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QualifiedName {
    prefix: Option<String>,
    local: String,
}

impl QualifiedName {
    /// Creates a qualified name, splitting a prefix off at the first colon.
    pub fn new(name: &str) -> Self {
        match name.split_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix.into()),
                local: local.into(),
            },
            None => Self {
                prefix: None,
                local: name.into(),
            },
        }
    }

    /// Returns a local name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Returns a namespace prefix.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Discards a namespace prefix.
    pub fn clear_prefix(&mut self) {
        self.prefix = None;
    }
}

impl Display for QualifiedName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(formatter, "{prefix}:{}", self.local)
        } else {
            write!(formatter, "{}", self.local)
        }
    }
}

/// An attribute name/value pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribute {
    name: QualifiedName,
    value: String,
}

impl Attribute {
    /// Creates an attribute.
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: QualifiedName::new(name),
            value: value.into(),
        }
    }

    /// Returns a name.
    pub const fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns a value.
    #[allow(clippy::missing_const_for_fn)]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Converts an attribute into its value.
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_value(self) -> String {
        self.value
    }
}

/// An element of a document tree.
///
/// An element owns its children exclusively. Dropping an element, or
/// detaching it from its parent, drops the whole subtree underneath it.
/// Attributes and children keep the order in which they were inserted.
///
/// An `href` attribute is captured separately from the ordinary attribute
/// list so that it can be removed independently of the owning tag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    name: QualifiedName,
    attributes: Vec<Attribute>,
    href: Option<String>,
    comment: Option<String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Creates an element with no attributes, text, comment, or children.
    pub fn new(name: &str) -> Self {
        Self {
            name: QualifiedName::new(name),
            attributes: vec![],
            href: None,
            comment: None,
            text: String::new(),
            children: vec![],
        }
    }

    /// Returns a tag name.
    pub const fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns attributes in insertion order.
    #[allow(clippy::missing_const_for_fn)]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns an `href` attribute value.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Returns comment text.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns character data directly inside this element.
    #[allow(clippy::missing_const_for_fn)]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns child elements in insertion order.
    #[allow(clippy::missing_const_for_fn)]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Adds an attribute. Duplicate names are tolerated.
    pub fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Adds a child element.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Appends character data.
    pub fn append_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Appends comment text.
    pub fn append_comment(&mut self, comment: &str) {
        if let Some(existing) = &mut self.comment {
            existing.push_str(comment);
        } else {
            self.comment = Some(comment.into());
        }
    }

    /// Sets an `href` attribute value.
    pub fn set_href(&mut self, href: String) {
        self.href = Some(href);
    }

    /// Removes and returns an `href` attribute value.
    #[allow(clippy::missing_const_for_fn)]
    pub fn take_href(&mut self) -> Option<String> {
        self.href.take()
    }

    /// Replaces character data.
    #[allow(clippy::missing_const_for_fn)]
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Discards the namespace prefix of the tag name.
    pub fn fold_namespace(&mut self) {
        self.name.clear_prefix();
    }

    /// Keeps only the attributes matching a predicate, preserving order.
    pub fn retain_attributes(&mut self, keep: impl FnMut(&Attribute) -> bool) {
        self.attributes.retain(keep);
    }

    /// Keeps only the children matching a predicate, preserving order.
    pub fn retain_children(&mut self, keep: impl FnMut(&mut Self) -> bool) {
        self.children.retain_mut(keep);
    }
}
