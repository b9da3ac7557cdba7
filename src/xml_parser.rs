use crate::element::{Attribute, Element};
use core::error;
use core::fmt::{self, Display, Formatter};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

/// Untrusted input must not control recursion depth, so nesting beyond
/// this limit is a parse error.
const MAX_DEPTH: usize = 64;

/// Parses a document into an element tree.
///
/// The first top-level element becomes the root; anything after it closes
/// is ignored. Prolog events and CDATA sections are skipped. Parse failure
/// is fatal for the document and no partial tree is returned.
pub fn parse_document(text: &str) -> Result<Element, ParseError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = vec![];

    loop {
        match reader.read_event() {
            Ok(Event::Start(event)) => {
                if stack.len() == MAX_DEPTH {
                    return Err(ParseError::DepthLimit(MAX_DEPTH));
                }

                stack.push(decode_element(&event, reader.buffer_position())?);
            }
            Ok(Event::Empty(event)) => {
                let element = decode_element(&event, reader.buffer_position())?;

                if let Some(parent) = stack.last_mut() {
                    parent.push_child(element);
                } else {
                    return Ok(element);
                }
            }
            Ok(Event::End(_)) => {
                if let Some(element) = stack.pop() {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_child(element);
                    } else {
                        return Ok(element);
                    }
                }
            }
            Ok(Event::Text(event)) => {
                if let Some(parent) = stack.last_mut() {
                    let position = reader.buffer_position();

                    parent.append_text(&event.unescape().map_err(|source| ParseError::Markup {
                        position,
                        source,
                    })?);
                }
            }
            Ok(Event::Comment(event)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.append_comment(&String::from_utf8_lossy(&event));
                }
            }
            Ok(Event::CData(_) | Event::Decl(_) | Event::DocType(_) | Event::PI(_)) => {}
            Ok(Event::Eof) => return Err(ParseError::MissingRoot),
            Err(source) => {
                return Err(ParseError::Markup {
                    position: reader.buffer_position(),
                    source,
                });
            }
        }
    }
}

fn decode_element(event: &BytesStart<'_>, position: usize) -> Result<Element, ParseError> {
    let mut element = Element::new(&String::from_utf8_lossy(event.name().as_ref()));

    for attribute in event.attributes().flatten() {
        let attribute = Attribute::new(
            &String::from_utf8_lossy(attribute.key.as_ref()),
            &attribute
                .unescape_value()
                .map_err(|source| ParseError::Markup { position, source })?,
        );

        if attribute.name().local() == "href" && element.href().is_none() {
            element.set_href(attribute.into_value());
        } else {
            element.push_attribute(attribute);
        }
    }

    Ok(element)
}

/// A document parse error, fatal for the document being parsed.
#[derive(Debug)]
pub enum ParseError {
    /// Elements nested deeper than the supported limit.
    DepthLimit(usize),
    /// Malformed markup.
    Markup {
        /// A byte offset at which decoding failed.
        position: usize,
        /// An underlying decoder error.
        source: quick_xml::Error,
    },
    /// No root element.
    MissingRoot,
}

impl error::Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthLimit(limit) => {
                write!(formatter, "elements nested deeper than {limit} levels")
            }
            Self::Markup { position, source } => {
                write!(formatter, "malformed document at byte {position}: {source}")
            }
            Self::MissingRoot => write!(formatter, "no root element"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_minimal_document() {
        let element = parse_document("<svg/>").unwrap();

        assert_eq!(element.name().local(), "svg");
        assert!(element.attributes().is_empty());
        assert!(element.children().is_empty());
    }

    #[test]
    fn parse_attributes_in_order() {
        let element =
            parse_document(r#"<svg version="1.1" baseProfile="full" xmlns="x"/>"#).unwrap();

        assert_eq!(
            element
                .attributes()
                .iter()
                .map(|attribute| attribute.name().local())
                .collect::<Vec<_>>(),
            vec!["version", "baseProfile", "xmlns"]
        );
    }

    #[test]
    fn parse_children_in_order() {
        let element = parse_document(indoc!(
            r#"
            <svg>
              <rect/>
              <circle/>
              <path/>
            </svg>
            "#
        ))
        .unwrap();

        assert_eq!(
            element
                .children()
                .iter()
                .map(|child| child.name().local())
                .collect::<Vec<_>>(),
            vec!["rect", "circle", "path"]
        );
    }

    #[test]
    fn parse_character_data() {
        let element = parse_document("<text>chunky bacon</text>").unwrap();

        assert_eq!(element.text(), "chunky bacon");
    }

    #[test]
    fn unescape_character_data() {
        let element = parse_document("<text>a &lt; b &amp; c</text>").unwrap();

        assert_eq!(element.text(), "a < b & c");
    }

    #[test]
    fn parse_comment() {
        let element = parse_document("<svg><!--blah--></svg>").unwrap();

        assert_eq!(element.comment(), Some("blah"));
    }

    #[test]
    fn capture_href_attribute() {
        let element = parse_document(r##"<a href="#shape" fill="red"/>"##).unwrap();

        assert_eq!(element.href(), Some("#shape"));
        assert_eq!(element.attributes().len(), 1);
    }

    #[test]
    fn capture_prefixed_href_attribute() {
        let element = parse_document(r##"<use xlink:href="#shape"/>"##).unwrap();

        assert_eq!(element.href(), Some("#shape"));
    }

    #[test]
    fn tolerate_duplicate_href_attributes() {
        let element = parse_document(r##"<a href="#one" xlink:href="#two"/>"##).unwrap();

        assert_eq!(element.href(), Some("#one"));
        assert_eq!(element.attributes()[0].name().to_string(), "xlink:href");
    }

    #[test]
    fn split_namespace_prefixes() {
        let element = parse_document(r#"<svg:rect svg:fill="red"/>"#).unwrap();

        assert_eq!(element.name().prefix(), Some("svg"));
        assert_eq!(element.name().local(), "rect");
        assert_eq!(element.attributes()[0].name().prefix(), Some("svg"));
    }

    #[test]
    fn skip_prolog_and_cdata() {
        let element = parse_document(indoc!(
            r#"
            <?xml version="1.0" standalone="no"?>
            <!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
            <svg><![CDATA[alert(1)]]></svg>
            "#
        ))
        .unwrap();

        assert_eq!(element.name().local(), "svg");
        assert_eq!(element.text(), "");
    }

    #[test]
    fn ignore_content_after_root() {
        let element = parse_document("<svg/><junk>").unwrap();

        assert_eq!(element.name().local(), "svg");
    }

    #[test]
    fn fail_on_missing_root() {
        assert!(matches!(
            parse_document("  "),
            Err(ParseError::MissingRoot)
        ));
    }

    #[test]
    fn fail_on_malformed_markup() {
        assert!(matches!(
            parse_document("<svg><rect></svg>"),
            Err(ParseError::Markup { .. })
        ));
    }

    #[test]
    fn fail_on_excessive_nesting() {
        let mut document = String::new();

        for _ in 0..=MAX_DEPTH {
            document.push_str("<g>");
        }

        assert!(matches!(
            parse_document(&document),
            Err(ParseError::DepthLimit(_))
        ));
    }
}
