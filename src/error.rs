use crate::{xml_parser::ParseError, xml_serializer::SerializeError};
use core::error;
use core::fmt::{self, Display, Formatter};
use std::io;

/// A sanitization pipeline error.
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),
    /// A report serialization error.
    Json(serde_json::Error),
    /// A document parse error.
    Parse(ParseError),
    /// A document serialization error.
    Serialize(SerializeError),
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "{error}"),
            Self::Json(error) => write!(formatter, "{error}"),
            Self::Parse(error) => write!(formatter, "{error}"),
            Self::Serialize(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<SerializeError> for Error {
    fn from(error: SerializeError) -> Self {
        Self::Serialize(error)
    }
}
