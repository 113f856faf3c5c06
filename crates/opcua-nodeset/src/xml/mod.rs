// crates/opcua-nodeset/src/xml/mod.rs

//! XML plumbing for Variant values.
//!
//! A node set stores each value as an already-parsed element tree. Turning it
//! into a `Variant` is a two step affair: an `ElementSerializer` renders the tree
//! back to canonical text, then a `VariantDecoder` reads that text following the
//! OPC UA XML Variant encoding.

mod decoder;
mod element;

pub use decoder::XmlStreamDecoder;
pub use element::{MAX_DEPTH, XmlElement};

use crate::error::{DecodingError, SerializeError};
use crate::variant::Variant;

/// Renders a parsed element back into an XML text fragment.
pub trait ElementSerializer {
    fn serialize(&self, element: &XmlElement) -> Result<String, SerializeError>;
}

/// Reads a single tagged value from an XML source.
pub trait VariantDecoder {
    /// Interprets the source as one `<Value>` wrapper holding a single body.
    fn read_variant_value(&mut self) -> Result<Variant, DecodingError>;
}

/// The default serializer, backed by the `quick-xml` writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalSerializer;

impl ElementSerializer for CanonicalSerializer {
    fn serialize(&self, element: &XmlElement) -> Result<String, SerializeError> {
        element.to_xml_string()
    }
}
