use crate::element::Element;
use alloc::string::FromUtf8Error;
use core::error;
use core::fmt::{self, Display, Formatter};
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io;

const INDENT_CHARACTER: u8 = b' ';
const INDENT_SIZE: usize = 2;

/// Serializes an element tree into an indented document.
///
/// Comments are re-emitted verbatim before character data and children.
/// Elements with no content are written self-closing. Attributes are
/// written in insertion order with a captured `href` attribute last, and
/// no namespace declaration is emitted beyond what the attribute lists
/// already contain.
pub fn serialize_document(element: &Element) -> Result<String, SerializeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), INDENT_CHARACTER, INDENT_SIZE);

    serialize_element(&mut writer, element)?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn serialize_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
) -> Result<(), SerializeError> {
    let name = element.name().to_string();
    let mut start = BytesStart::new(name.as_str());

    for attribute in element.attributes() {
        start.push_attribute((attribute.name().to_string().as_str(), attribute.value()));
    }

    if let Some(href) = element.href() {
        start.push_attribute(("href", href));
    }

    if element.comment().is_none() && element.text().is_empty() && element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;

        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    if let Some(comment) = element.comment() {
        writer.write_event(Event::Comment(BytesText::from_escaped(comment)))?;
    }

    if !element.text().is_empty() {
        writer.write_event(Event::Text(BytesText::new(element.text())))?;
    }

    for child in element.children() {
        serialize_element(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(name)))?;

    Ok(())
}

/// A document serialization error.
///
/// This should not occur for a tree built by parsing and sanitizing a
/// document with this crate; treat it as an internal invariant violation.
#[derive(Debug)]
pub enum SerializeError {
    /// An I/O error.
    Io(io::Error),
    /// Output not valid UTF-8.
    Utf8(FromUtf8Error),
    /// An encoder error.
    Xml(quick_xml::Error),
}

impl error::Error for SerializeError {}

impl Display for SerializeError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "{error}"),
            Self::Utf8(error) => write!(formatter, "{error}"),
            Self::Xml(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<io::Error> for SerializeError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<FromUtf8Error> for SerializeError {
    fn from(error: FromUtf8Error) -> Self {
        Self::Utf8(error)
    }
}

impl From<quick_xml::Error> for SerializeError {
    fn from(error: quick_xml::Error) -> Self {
        Self::Xml(error)
    }
}
