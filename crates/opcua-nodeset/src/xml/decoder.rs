// crates/opcua-nodeset/src/xml/decoder.rs

//! Reads values written in the OPC UA XML Variant encoding (Part 6, 5.3).
//!
//! The decoder accepts a `<Value>` wrapper holding exactly one body:
//! - a scalar, tagged with the builtin type name (`<Int32>42</Int32>`),
//! - a one-dimensional array, tagged `ListOf<Type>`,
//! - a multi-dimensional array, tagged `Matrix` with `Dimensions` and `Elements`.

use super::{VariantDecoder, XmlElement};
use crate::error::DecodingError;
use crate::types::{ExpandedNodeId, Guid, LocalizedText, NodeId, QualifiedName, StatusCode};
use crate::variant::{Array, BuiltinType, ExtensionObject, Variant};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, NaiveDateTime, Utc};
use core::str::FromStr;
use log::trace;

/// Decodes one canonical XML fragment into a `Variant`.
#[derive(Debug, Clone)]
pub struct XmlStreamDecoder {
    source: String,
}

impl XmlStreamDecoder {
    pub fn new(xml: &str) -> Self {
        XmlStreamDecoder {
            source: xml.to_string(),
        }
    }
}

impl VariantDecoder for XmlStreamDecoder {
    fn read_variant_value(&mut self) -> Result<Variant, DecodingError> {
        let wrapper = XmlElement::parse(&self.source)?;
        read_wrapped(&wrapper)
    }
}

/// Interprets the content of a `<Value>` wrapper.
fn read_wrapped(wrapper: &XmlElement) -> Result<Variant, DecodingError> {
    match wrapper.children.as_slice() {
        [] => {
            let text = wrapper.text().trim();
            if text.is_empty() {
                Ok(Variant::Empty)
            } else {
                Err(DecodingError::UnexpectedText(text.to_string()))
            }
        }
        [body] => read_body(body),
        bodies => Err(DecodingError::MultipleBodies(bodies.len())),
    }
}

fn read_body(body: &XmlElement) -> Result<Variant, DecodingError> {
    let tag = body.local_name();
    trace!("Decoding <{}> value body", tag);

    if tag == "Matrix" {
        return read_matrix(body);
    }
    if let Some(item) = tag.strip_prefix("ListOf") {
        let value_type = builtin_type(item)?;
        let values = read_items(&body.children, value_type)?;
        return Ok(Array::new(value_type, values).into());
    }
    read_scalar(body, builtin_type(tag)?)
}

fn builtin_type(tag: &str) -> Result<BuiltinType, DecodingError> {
    BuiltinType::from_name(tag).ok_or_else(|| DecodingError::UnsupportedTag(tag.to_string()))
}

fn read_items(
    items: &[XmlElement],
    value_type: BuiltinType,
) -> Result<Vec<Variant>, DecodingError> {
    items
        .iter()
        .map(|item| {
            if item.local_name() != value_type.name() {
                return Err(DecodingError::MixedArray {
                    expected: value_type,
                    found: item.local_name().to_string(),
                });
            }
            read_scalar(item, value_type)
        })
        .collect()
}

fn read_matrix(body: &XmlElement) -> Result<Variant, DecodingError> {
    let dimensions = required_child(body, "Dimensions")?
        .children
        .iter()
        .map(|d| parse_text::<u32>(d))
        .collect::<Result<Vec<_>, _>>()?;

    let elements = required_child(body, "Elements")?;
    // An empty matrix carries no element tags to infer the type from.
    let value_type = match elements.children.first() {
        Some(first) => builtin_type(first.local_name())?,
        None => BuiltinType::Variant,
    };
    let values = read_items(&elements.children, value_type)?;

    Ok(Array::with_dimensions(value_type, values, dimensions)?.into())
}

fn read_scalar(el: &XmlElement, value_type: BuiltinType) -> Result<Variant, DecodingError> {
    let value = match value_type {
        BuiltinType::Boolean => match el.text().trim() {
            "true" | "1" => Variant::Boolean(true),
            "false" | "0" => Variant::Boolean(false),
            _ => return Err(invalid(el)),
        },
        BuiltinType::SByte => Variant::SByte(parse_text(el)?),
        BuiltinType::Byte => Variant::Byte(parse_text(el)?),
        BuiltinType::Int16 => Variant::Int16(parse_text(el)?),
        BuiltinType::UInt16 => Variant::UInt16(parse_text(el)?),
        BuiltinType::Int32 => Variant::Int32(parse_text(el)?),
        BuiltinType::UInt32 => Variant::UInt32(parse_text(el)?),
        BuiltinType::Int64 => Variant::Int64(parse_text(el)?),
        BuiltinType::UInt64 => Variant::UInt64(parse_text(el)?),
        // Rust float parsing already accepts the INF, -INF and NaN spellings.
        BuiltinType::Float => Variant::Float(parse_text(el)?),
        BuiltinType::Double => Variant::Double(parse_text(el)?),
        // quick-xml drops whitespace-only text, so `<String> </String>` reads as "".
        BuiltinType::String => Variant::String(el.text().to_string()),
        BuiltinType::DateTime => Variant::DateTime(parse_date_time(el)?),
        BuiltinType::Guid => {
            let text = required_child(el, "String")?.text();
            Variant::Guid(Guid::from_str(text.trim())?)
        }
        BuiltinType::ByteString => {
            let compact: String = el.text().split_ascii_whitespace().collect();
            Variant::ByteString(STANDARD.decode(compact)?)
        }
        BuiltinType::XmlElement => match el.children.first() {
            Some(fragment) => Variant::XmlElement(fragment.to_xml_string()?),
            None => Variant::XmlElement(el.text().to_string()),
        },
        BuiltinType::NodeId => Variant::NodeId(Box::new(read_node_id(el)?)),
        BuiltinType::ExpandedNodeId => {
            let text = identifier_text(el);
            let id = if text.is_empty() {
                ExpandedNodeId::from(NodeId::NULL)
            } else {
                ExpandedNodeId::from_str(text)?
            };
            Variant::ExpandedNodeId(Box::new(id))
        }
        BuiltinType::StatusCode => {
            let code = match el.child("Code") {
                Some(code) => parse_text::<u32>(code)?,
                None => 0,
            };
            Variant::StatusCode(StatusCode(code))
        }
        BuiltinType::QualifiedName => {
            let namespace_index = match el.child("NamespaceIndex") {
                Some(ns) => parse_text::<u16>(ns)?,
                None => 0,
            };
            let name = el.child("Name").map(|n| n.text()).unwrap_or_default();
            Variant::QualifiedName(Box::new(QualifiedName::new(namespace_index, name)))
        }
        BuiltinType::LocalizedText => {
            let locale = el.child("Locale").map(|l| l.text()).filter(|l| !l.is_empty());
            let text = el.child("Text").map(|t| t.text()).unwrap_or_default();
            Variant::LocalizedText(Box::new(LocalizedText::new(locale, text)))
        }
        BuiltinType::ExtensionObject => {
            let type_id = read_node_id(required_child(el, "TypeId")?)?;
            let body = el
                .child("Body")
                .and_then(|b| b.children.first())
                .cloned();
            Variant::ExtensionObject(Box::new(ExtensionObject { type_id, body }))
        }
        BuiltinType::Variant => {
            let inner = read_wrapped(required_child(el, "Value")?)?;
            Variant::Variant(Box::new(inner))
        }
        BuiltinType::DataValue | BuiltinType::DiagnosticInfo => {
            return Err(DecodingError::UnsupportedTag(value_type.name().to_string()));
        }
    };
    Ok(value)
}

/// Reads a `<NodeId>`-shaped element. An empty `<Identifier>` is the null id.
fn read_node_id(el: &XmlElement) -> Result<NodeId, DecodingError> {
    let text = identifier_text(el);
    if text.is_empty() {
        return Ok(NodeId::NULL);
    }
    Ok(NodeId::from_str(text)?)
}

fn identifier_text(el: &XmlElement) -> &str {
    el.child("Identifier").map(|i| i.text().trim()).unwrap_or("")
}

fn required_child<'a>(
    parent: &'a XmlElement,
    element: &'static str,
) -> Result<&'a XmlElement, DecodingError> {
    parent.child(element).ok_or_else(|| DecodingError::MissingElement {
        parent: parent.local_name().to_string(),
        element,
    })
}

fn parse_text<T: FromStr>(el: &XmlElement) -> Result<T, DecodingError> {
    el.text().trim().parse::<T>().map_err(|_| invalid(el))
}

fn parse_date_time(el: &XmlElement) -> Result<DateTime<Utc>, DecodingError> {
    let text = el.text().trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    // xs:dateTime allows omitting the offset; treat such values as UTC.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| invalid(el))
}

fn invalid(el: &XmlElement) -> DecodingError {
    DecodingError::InvalidValue {
        tag: el.local_name().to_string(),
        value: el.text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn decode(xml: &str) -> Result<Variant, DecodingError> {
        XmlStreamDecoder::new(xml).read_variant_value()
    }

    #[test]
    fn test_decode_string_keeps_padding_but_not_blank_text() {
        assert_eq!(
            decode("<Value><String> padded </String></Value>").unwrap(),
            Variant::String(" padded ".to_string())
        );
        assert_eq!(
            decode("<Value><String>   </String></Value>").unwrap(),
            Variant::String(String::new())
        );
    }

    #[test]
    fn test_decode_scalar_int32() {
        assert_eq!(decode("<Value><Int32>42</Int32></Value>").unwrap(), Variant::Int32(42));
    }

    #[test]
    fn test_decode_list_of_int32() {
        let value = decode(
            "<Value><ListOfInt32><Int32>1</Int32><Int32>2</Int32><Int32>3</Int32></ListOfInt32></Value>",
        )
        .unwrap();
        let array = value.as_array().expect("should be an array");
        assert_eq!(array.value_type, BuiltinType::Int32);
        assert_eq!(array.dimensions, vec![3]);
        assert_eq!(
            array.values,
            vec![Variant::Int32(1), Variant::Int32(2), Variant::Int32(3)]
        );
    }

    #[test]
    fn test_decode_empty_list() {
        let value = decode("<Value><ListOfString/></Value>").unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.value_type, BuiltinType::String);
        assert!(array.values.is_empty());
        assert_eq!(array.dimensions, vec![0]);
    }

    #[test]
    fn test_decode_matrix() {
        let xml = "<Value><Matrix>\
            <Dimensions><Int32>2</Int32><Int32>2</Int32></Dimensions>\
            <Elements><Byte>1</Byte><Byte>2</Byte><Byte>3</Byte><Byte>4</Byte></Elements>\
            </Matrix></Value>";
        let value = decode(xml).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.value_type, BuiltinType::Byte);
        assert_eq!(array.dimensions, vec![2, 2]);
        assert_eq!(array.values[3], Variant::Byte(4));
    }

    #[test]
    fn test_decode_matrix_dimension_mismatch() {
        let xml = "<Value><Matrix>\
            <Dimensions><Int32>2</Int32><Int32>2</Int32></Dimensions>\
            <Elements><Byte>1</Byte></Elements>\
            </Matrix></Value>";
        assert!(matches!(
            decode(xml),
            Err(DecodingError::DimensionMismatch { elements: 1, .. })
        ));
    }

    #[test]
    fn test_decode_namespace_prefixed_tags() {
        let xml = r#"<Value xmlns:uax="http://opcfoundation.org/UA/2008/02/Types.xsd"><uax:Double>-INF</uax:Double></Value>"#;
        assert_eq!(decode(xml).unwrap(), Variant::Double(f64::NEG_INFINITY));
    }

    #[test]
    fn test_decode_boolean_spellings() {
        assert_eq!(
            decode("<Value><Boolean>true</Boolean></Value>").unwrap(),
            Variant::Boolean(true)
        );
        assert_eq!(decode("<Value><Boolean>0</Boolean></Value>").unwrap(), Variant::Boolean(false));
        assert!(matches!(
            decode("<Value><Boolean>yes</Boolean></Value>"),
            Err(DecodingError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_decode_out_of_range_number_fails() {
        let result = decode("<Value><Byte>256</Byte></Value>");
        assert!(
            matches!(result, Err(DecodingError::InvalidValue { ref tag, .. }) if tag == "Byte"),
            "Expected InvalidValue, got {:?}",
            result
        );
    }

    #[test]
    fn test_decode_string_and_localized_text() {
        assert_eq!(
            decode("<Value><String>Hello</String></Value>").unwrap(),
            Variant::from("Hello")
        );
        let value = decode(
            "<Value><LocalizedText><Locale>de</Locale><Text>Hallo</Text></LocalizedText></Value>",
        )
        .unwrap();
        assert_eq!(value, Variant::from(LocalizedText::new(Some("de"), "Hallo")));
    }

    #[test]
    fn test_decode_date_time() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();
        assert_eq!(
            decode("<Value><DateTime>2024-05-17T12:30:00Z</DateTime></Value>").unwrap(),
            Variant::DateTime(expected)
        );
        assert_eq!(
            decode("<Value><DateTime>2024-05-17T12:30:00</DateTime></Value>").unwrap(),
            Variant::DateTime(expected)
        );
    }

    #[test]
    fn test_decode_guid_and_byte_string() {
        let value =
            decode("<Value><Guid><String>72962B91-FA75-4AE6-8D28-B404DC7DAF63</String></Guid></Value>")
                .unwrap();
        assert!(matches!(value, Variant::Guid(_)));

        assert_eq!(
            decode("<Value><ByteString>AQID\n BA==</ByteString></Value>").unwrap(),
            Variant::ByteString(vec![1, 2, 3, 4])
        );
        assert!(matches!(
            decode("<Value><Guid/></Value>"),
            Err(DecodingError::MissingElement { element: "String", .. })
        ));
    }

    #[test]
    fn test_decode_identifiers() {
        assert_eq!(
            decode("<Value><NodeId><Identifier>ns=2;s=Pump</Identifier></NodeId></Value>").unwrap(),
            Variant::from(NodeId::string(2, "Pump"))
        );
        assert_eq!(
            decode("<Value><NodeId><Identifier/></NodeId></Value>").unwrap(),
            Variant::from(NodeId::NULL)
        );
        assert!(matches!(
            decode("<Value><NodeId><Identifier>ns=x;i=1</Identifier></NodeId></Value>"),
            Err(DecodingError::NodeId(_))
        ));
    }

    #[test]
    fn test_decode_qualified_name_and_status() {
        assert_eq!(
            decode("<Value><QualifiedName><NamespaceIndex>3</NamespaceIndex><Name>Speed</Name></QualifiedName></Value>")
                .unwrap(),
            Variant::QualifiedName(Box::new(QualifiedName::new(3, "Speed")))
        );
        assert_eq!(
            decode("<Value><StatusCode><Code>2147483648</Code></StatusCode></Value>").unwrap(),
            Variant::StatusCode(StatusCode(0x8000_0000))
        );
    }

    #[test]
    fn test_decode_extension_object_keeps_body() {
        let xml = "<Value><ExtensionObject>\
            <TypeId><Identifier>i=297</Identifier></TypeId>\
            <Body><Argument><Name>Speed</Name><ValueRank>-1</ValueRank></Argument></Body>\
            </ExtensionObject></Value>";
        let Variant::ExtensionObject(obj) = decode(xml).unwrap() else {
            panic!("Expected an ExtensionObject");
        };
        assert_eq!(obj.type_id, NodeId::numeric(0, 297));
        let body = obj.body.expect("body should be kept");
        assert_eq!(body.name, "Argument");
        assert_eq!(body.child("Name").map(|n| n.text()), Some("Speed"));
    }

    #[test]
    fn test_decode_nested_variant_list() {
        let xml = "<Value><ListOfVariant>\
            <Variant><Value><Int16>-3</Int16></Value></Variant>\
            <Variant><Value><String>x</String></Value></Variant>\
            </ListOfVariant></Value>";
        let value = decode(xml).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.value_type, BuiltinType::Variant);
        assert_eq!(array.values[0], Variant::Variant(Box::new(Variant::Int16(-3))));
    }

    #[test]
    fn test_decode_empty_wrapper_is_null() {
        assert_eq!(decode("<Value/>").unwrap(), Variant::Empty);
        assert_eq!(decode("<Value></Value>").unwrap(), Variant::Empty);
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        assert!(matches!(
            decode("<Value><Int128>1</Int128></Value>"),
            Err(DecodingError::UnsupportedTag(ref t)) if t == "Int128"
        ));
        assert!(matches!(
            decode("<Value><ListOfInt32><Int32>1</Int32><String>x</String></ListOfInt32></Value>"),
            Err(DecodingError::MixedArray { expected: BuiltinType::Int32, .. })
        ));
        assert!(matches!(
            decode("<Value><Int32>1</Int32><Int32>2</Int32></Value>"),
            Err(DecodingError::MultipleBodies(2))
        ));
        assert!(matches!(
            decode("<Value>42</Value>"),
            Err(DecodingError::UnexpectedText(_))
        ));
        assert!(decode("<Value><Int32>1</Value>").is_err());
    }
}
