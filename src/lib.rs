#![doc = include_str!("../README.md")]

extern crate alloc;

mod allow_list;
mod document_output;
mod element;
mod error;
mod metrics;
mod render;
mod sanitizer;
mod walk;
mod xml_parser;
mod xml_serializer;

pub use self::{
    allow_list::AllowList,
    document_output::DocumentOutput,
    element::{Attribute, Element, QualifiedName},
    error::Error,
    metrics::Metrics,
    render::{RenderFormat, render_metrics},
    sanitizer::{BlacklistSanitizer, Sanitizer, WhitelistSanitizer},
    walk::{Decision, walk},
    xml_parser::{ParseError, parse_document},
    xml_serializer::{SerializeError, serialize_document},
};
