// crates/opcua-nodeset/src/variant.rs

//! The self-describing value model: `Variant` (type tag + payload) and the
//! `DataValue` wrapper stored as a node's current value.

use crate::error::DecodingError;
use crate::types::{ExpandedNodeId, Guid, LocalizedText, NodeId, QualifiedName, StatusCode};
use crate::xml::XmlElement;
use chrono::{DateTime, Utc};

/// The 25 builtin types of OPC UA Part 6, tagged with their numeric type id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BuiltinType {
    Boolean = 1,
    SByte = 2,
    Byte = 3,
    Int16 = 4,
    UInt16 = 5,
    Int32 = 6,
    UInt32 = 7,
    Int64 = 8,
    UInt64 = 9,
    Float = 10,
    Double = 11,
    String = 12,
    DateTime = 13,
    Guid = 14,
    ByteString = 15,
    XmlElement = 16,
    NodeId = 17,
    ExpandedNodeId = 18,
    StatusCode = 19,
    QualifiedName = 20,
    LocalizedText = 21,
    ExtensionObject = 22,
    DataValue = 23,
    Variant = 24,
    DiagnosticInfo = 25,
}

impl BuiltinType {
    const ALL: [BuiltinType; 25] = [
        BuiltinType::Boolean,
        BuiltinType::SByte,
        BuiltinType::Byte,
        BuiltinType::Int16,
        BuiltinType::UInt16,
        BuiltinType::Int32,
        BuiltinType::UInt32,
        BuiltinType::Int64,
        BuiltinType::UInt64,
        BuiltinType::Float,
        BuiltinType::Double,
        BuiltinType::String,
        BuiltinType::DateTime,
        BuiltinType::Guid,
        BuiltinType::ByteString,
        BuiltinType::XmlElement,
        BuiltinType::NodeId,
        BuiltinType::ExpandedNodeId,
        BuiltinType::StatusCode,
        BuiltinType::QualifiedName,
        BuiltinType::LocalizedText,
        BuiltinType::ExtensionObject,
        BuiltinType::DataValue,
        BuiltinType::Variant,
        BuiltinType::DiagnosticInfo,
    ];

    /// The XML tag name of the type (e.g. `Int32`).
    pub fn name(self) -> &'static str {
        match self {
            BuiltinType::Boolean => "Boolean",
            BuiltinType::SByte => "SByte",
            BuiltinType::Byte => "Byte",
            BuiltinType::Int16 => "Int16",
            BuiltinType::UInt16 => "UInt16",
            BuiltinType::Int32 => "Int32",
            BuiltinType::UInt32 => "UInt32",
            BuiltinType::Int64 => "Int64",
            BuiltinType::UInt64 => "UInt64",
            BuiltinType::Float => "Float",
            BuiltinType::Double => "Double",
            BuiltinType::String => "String",
            BuiltinType::DateTime => "DateTime",
            BuiltinType::Guid => "Guid",
            BuiltinType::ByteString => "ByteString",
            BuiltinType::XmlElement => "XmlElement",
            BuiltinType::NodeId => "NodeId",
            BuiltinType::ExpandedNodeId => "ExpandedNodeId",
            BuiltinType::StatusCode => "StatusCode",
            BuiltinType::QualifiedName => "QualifiedName",
            BuiltinType::LocalizedText => "LocalizedText",
            BuiltinType::ExtensionObject => "ExtensionObject",
            BuiltinType::DataValue => "DataValue",
            BuiltinType::Variant => "Variant",
            BuiltinType::DiagnosticInfo => "DiagnosticInfo",
        }
    }

    /// Maps an XML tag name back to its type.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    pub fn type_id(self) -> u8 {
        self as u8
    }

    /// The data type node describing this builtin type (`i=1` .. `i=25`).
    pub fn data_type_id(self) -> NodeId {
        NodeId::numeric(0, self as u32)
    }
}

/// A structured value, identified by its encoding or data type id.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionObject {
    pub type_id: NodeId,
    /// The XML body, kept as a parsed element tree.
    pub body: Option<XmlElement>,
}

/// An array of one builtin type with explicit bounds for every dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub value_type: BuiltinType,
    /// Elements in row-major order.
    pub values: Vec<Variant>,
    pub dimensions: Vec<u32>,
}

impl Array {
    /// Creates a one-dimensional array.
    pub fn new(value_type: BuiltinType, values: Vec<Variant>) -> Self {
        let dimensions = vec![values.len() as u32];
        Array {
            value_type,
            values,
            dimensions,
        }
    }

    /// Creates a multi-dimensional array. The product of `dimensions` must equal
    /// the number of values.
    pub fn with_dimensions(
        value_type: BuiltinType,
        values: Vec<Variant>,
        dimensions: Vec<u32>,
    ) -> Result<Self, DecodingError> {
        let expected = dimensions
            .iter()
            .try_fold(1usize, |acc, d| acc.checked_mul(*d as usize));
        if dimensions.is_empty() || expected != Some(values.len()) {
            return Err(DecodingError::DimensionMismatch {
                dimensions,
                elements: values.len(),
            });
        }
        Ok(Array {
            value_type,
            values,
            dimensions,
        })
    }

    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }
}

/// Represents any value a node's `Value` attribute can hold.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Variant {
    /// The null value.
    #[default]
    Empty,
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
    DateTime(DateTime<Utc>),
    Guid(Guid),
    ByteString(Vec<u8>),
    /// An embedded XML fragment, kept as text.
    XmlElement(String),
    NodeId(Box<NodeId>),
    ExpandedNodeId(Box<ExpandedNodeId>),
    StatusCode(StatusCode),
    QualifiedName(Box<QualifiedName>),
    LocalizedText(Box<LocalizedText>),
    ExtensionObject(Box<ExtensionObject>),
    /// A Variant nested inside a Variant.
    Variant(Box<Variant>),
    Array(Box<Array>),
}

impl Variant {
    /// Returns the runtime type tag, or `None` for the null value.
    /// Arrays report the type of their elements.
    pub fn builtin_type(&self) -> Option<BuiltinType> {
        let t = match self {
            Variant::Empty => return None,
            Variant::Boolean(_) => BuiltinType::Boolean,
            Variant::SByte(_) => BuiltinType::SByte,
            Variant::Byte(_) => BuiltinType::Byte,
            Variant::Int16(_) => BuiltinType::Int16,
            Variant::UInt16(_) => BuiltinType::UInt16,
            Variant::Int32(_) => BuiltinType::Int32,
            Variant::UInt32(_) => BuiltinType::UInt32,
            Variant::Int64(_) => BuiltinType::Int64,
            Variant::UInt64(_) => BuiltinType::UInt64,
            Variant::Float(_) => BuiltinType::Float,
            Variant::Double(_) => BuiltinType::Double,
            Variant::String(_) => BuiltinType::String,
            Variant::DateTime(_) => BuiltinType::DateTime,
            Variant::Guid(_) => BuiltinType::Guid,
            Variant::ByteString(_) => BuiltinType::ByteString,
            Variant::XmlElement(_) => BuiltinType::XmlElement,
            Variant::NodeId(_) => BuiltinType::NodeId,
            Variant::ExpandedNodeId(_) => BuiltinType::ExpandedNodeId,
            Variant::StatusCode(_) => BuiltinType::StatusCode,
            Variant::QualifiedName(_) => BuiltinType::QualifiedName,
            Variant::LocalizedText(_) => BuiltinType::LocalizedText,
            Variant::ExtensionObject(_) => BuiltinType::ExtensionObject,
            Variant::Variant(_) => BuiltinType::Variant,
            Variant::Array(a) => a.value_type,
        };
        Some(t)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Variant::Array(_))
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Variant::Array(a) => Some(a),
            _ => None,
        }
    }
}

// Helper macro for the primitive `From` conversions
macro_rules! variant_from {
    ($($type:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$type> for Variant {
                fn from(v: $type) -> Self {
                    Variant::$variant(v)
                }
            }
        )+
    };
}

variant_from! {
    bool => Boolean,
    i8 => SByte,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
    String => String,
    Guid => Guid,
    StatusCode => StatusCode,
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Variant::String(v.to_string())
    }
}

impl From<NodeId> for Variant {
    fn from(v: NodeId) -> Self {
        Variant::NodeId(Box::new(v))
    }
}

impl From<LocalizedText> for Variant {
    fn from(v: LocalizedText) -> Self {
        Variant::LocalizedText(Box::new(v))
    }
}

impl From<Array> for Variant {
    fn from(v: Array) -> Self {
        Variant::Array(Box::new(v))
    }
}

/// The current value of a node: a `Variant` plus its status.
///
/// Node sets carry no timestamps, so none are modelled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataValue {
    pub value: Variant,
    pub status: StatusCode,
}

impl DataValue {
    pub fn new(value: impl Into<Variant>) -> Self {
        DataValue {
            value: value.into(),
            status: StatusCode::GOOD,
        }
    }

    /// The null sentinel returned when a value cannot be decoded.
    pub fn null() -> Self {
        DataValue {
            value: Variant::Empty,
            status: StatusCode::GOOD,
        }
    }

    pub fn is_null(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_type_names_roundtrip() {
        for t in BuiltinType::ALL {
            assert_eq!(BuiltinType::from_name(t.name()), Some(t));
        }
        assert_eq!(BuiltinType::from_name("Int128"), None);
        assert_eq!(BuiltinType::from_name("int32"), None);
    }

    #[test]
    fn test_builtin_type_ids_match_data_types() {
        assert_eq!(BuiltinType::Int32.type_id(), 6);
        assert_eq!(BuiltinType::Int32.data_type_id(), NodeId::numeric(0, 6));
        assert_eq!(
            Some(BuiltinType::Double.data_type_id()),
            crate::identifiers::lookup("Double")
        );
    }

    #[test]
    fn test_variant_type_tags() {
        assert_eq!(Variant::Empty.builtin_type(), None);
        assert_eq!(Variant::from(42i32).builtin_type(), Some(BuiltinType::Int32));
        assert_eq!(Variant::from("x").builtin_type(), Some(BuiltinType::String));

        let array = Array::new(BuiltinType::UInt16, vec![Variant::UInt16(1), Variant::UInt16(2)]);
        let v = Variant::from(array);
        assert!(v.is_array());
        assert_eq!(v.builtin_type(), Some(BuiltinType::UInt16));
        assert_eq!(v.as_array().map(|a| a.dimensions.clone()), Some(vec![2]));
    }

    #[test]
    fn test_array_with_dimensions() {
        let values: Vec<Variant> = (0..6).map(Variant::Int32).collect();
        let matrix =
            Array::with_dimensions(BuiltinType::Int32, values.clone(), vec![2, 3]).unwrap();
        assert_eq!(matrix.rank(), 2);

        let err = Array::with_dimensions(BuiltinType::Int32, values.clone(), vec![4, 2]);
        assert!(matches!(
            err,
            Err(DecodingError::DimensionMismatch { elements: 6, .. })
        ));

        // Zero rank is never valid.
        assert!(Array::with_dimensions(BuiltinType::Int32, values, vec![]).is_err());

        // An empty matrix is fine as long as one dimension is zero.
        assert!(Array::with_dimensions(BuiltinType::Int32, vec![], vec![0, 5]).is_ok());
    }

    #[test]
    fn test_data_value_null_sentinel() {
        let null = DataValue::null();
        assert!(null.is_null());
        assert_eq!(null.status, StatusCode::GOOD);
        assert_eq!(null, DataValue::default());
        assert!(!DataValue::new(7u32).is_null());
    }
}
