// crates/opcua-nodeset/src/error.rs

//! Errors raised while rendering XML fragments and decoding Variant values.

use crate::types::NodeIdError;
use crate::variant::BuiltinType;
use core::fmt;
use quick_xml::errors::serialize::DeError;

/// Errors that can occur while decoding an XML encoded Variant.
#[derive(Debug)]
pub enum DecodingError {
    /// The fragment is not well-formed XML (reported by the `quick-xml` deserializer).
    XmlParsing(DeError),

    /// The fragment could not be tokenized (reported by the `quick-xml` reader).
    XmlReading(String),

    /// The element tag does not name a supported builtin type.
    UnsupportedTag(String),

    /// The text of an element is not a valid value for its type.
    InvalidValue { tag: String, value: String },

    /// A mandatory child element is missing.
    MissingElement {
        parent: String,
        element: &'static str,
    },

    /// An array element has a different type than the array.
    MixedArray {
        expected: BuiltinType,
        found: String,
    },

    /// A matrix declares dimensions whose product differs from its element count.
    DimensionMismatch {
        dimensions: Vec<u32>,
        elements: usize,
    },

    /// The value wrapper holds more than one body element.
    MultipleBodies(usize),

    /// The value wrapper holds text instead of a typed body element.
    UnexpectedText(String),

    /// An embedded identifier literal is invalid.
    NodeId(NodeIdError),

    /// A ByteString payload is not valid base64.
    Base64(base64::DecodeError),

    /// An embedded XmlElement could not be rendered back to text.
    Serialize(SerializeError),

    /// The fragment nests elements deeper than the given limit.
    NestingTooDeep(usize),
}

impl From<DeError> for DecodingError {
    fn from(e: DeError) -> Self {
        DecodingError::XmlParsing(e)
    }
}

impl From<NodeIdError> for DecodingError {
    fn from(e: NodeIdError) -> Self {
        DecodingError::NodeId(e)
    }
}

impl From<base64::DecodeError> for DecodingError {
    fn from(e: base64::DecodeError) -> Self {
        DecodingError::Base64(e)
    }
}

impl From<SerializeError> for DecodingError {
    fn from(e: SerializeError) -> Self {
        DecodingError::Serialize(e)
    }
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodingError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            DecodingError::XmlReading(e) => write!(f, "XML reading error: {}", e),
            DecodingError::UnsupportedTag(tag) => write!(f, "Unsupported value tag: {}", tag),
            DecodingError::InvalidValue { tag, value } => {
                write!(f, "Invalid {} value: '{}'", tag, value)
            }
            DecodingError::MissingElement { parent, element } => {
                write!(f, "Missing <{}> inside <{}>", element, parent)
            }
            DecodingError::MixedArray { expected, found } => write!(
                f,
                "Array of {} contains a <{}> element",
                expected.name(),
                found
            ),
            DecodingError::DimensionMismatch {
                dimensions,
                elements,
            } => write!(
                f,
                "Matrix dimensions {:?} do not match {} elements",
                dimensions, elements
            ),
            DecodingError::MultipleBodies(n) => {
                write!(f, "Value wrapper holds {} elements, expected one", n)
            }
            DecodingError::UnexpectedText(text) => {
                write!(f, "Value wrapper holds bare text: '{}'", text)
            }
            DecodingError::NodeId(e) => write!(f, "Invalid identifier: {}", e),
            DecodingError::Base64(e) => write!(f, "Invalid base64 payload: {}", e),
            DecodingError::Serialize(e) => write!(f, "{}", e),
            DecodingError::NestingTooDeep(limit) => {
                write!(f, "Elements nest deeper than {} levels", limit)
            }
        }
    }
}

impl std::error::Error for DecodingError {}

/// Errors that can occur while rendering an `XmlElement` back to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// The element (or one of its descendants) has no tag name.
    MissingName,

    /// The `quick-xml` writer rejected an event.
    XmlWriting(String),

    /// The rendered bytes are not valid UTF-8.
    Encoding(String),

    /// The element nests deeper than the given limit, or lost its deepest
    /// descendants while being read.
    NestingTooDeep(usize),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::MissingName => write!(f, "XML serializing error: element has no name"),
            SerializeError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            SerializeError::Encoding(e) => write!(f, "XML encoding error: {}", e),
            SerializeError::NestingTooDeep(limit) => {
                write!(f, "XML serializing error: elements nest deeper than {} levels", limit)
            }
        }
    }
}

impl std::error::Error for SerializeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Required {
        #[allow(dead_code)]
        field: u32,
    }

    #[test]
    fn test_from_de_error() {
        // The required child is absent.
        let xml_err = quick_xml::de::from_str::<Required>("<a></a>").unwrap_err();
        let err: DecodingError = xml_err.into();
        assert!(matches!(err, DecodingError::XmlParsing(_)));
    }

    #[test]
    fn test_from_node_id_error() {
        let err: DecodingError = NodeIdError::InvalidNumeric("x".to_string()).into();
        assert!(matches!(err, DecodingError::NodeId(NodeIdError::InvalidNumeric(_))));
    }

    #[test]
    fn test_from_base64_error() {
        use base64::Engine as _;
        let b64_err = base64::engine::general_purpose::STANDARD
            .decode("@@")
            .unwrap_err();
        let err: DecodingError = b64_err.into();
        assert!(matches!(err, DecodingError::Base64(_)));
    }

    #[test]
    fn test_display_mentions_context() {
        let err = DecodingError::MissingElement {
            parent: "Guid".to_string(),
            element: "String",
        };
        assert_eq!(err.to_string(), "Missing <String> inside <Guid>");

        let err = DecodingError::DimensionMismatch {
            dimensions: vec![2, 2],
            elements: 3,
        };
        assert_eq!(err.to_string(), "Matrix dimensions [2, 2] do not match 3 elements");
    }
}
