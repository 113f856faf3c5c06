// crates/opcua-nodeset/src/lib.rs

//! Core OPC UA value and identifier model used when loading node sets.

// --- Foundation Modules ---
pub mod identifiers;
pub mod types;

// --- Values ---
mod error;
pub mod variant;
pub mod xml;

// --- Top-level Exports ---
pub use error::{DecodingError, SerializeError};
pub use types::{
    ExpandedNodeId, Guid, Identifier, LocalizedText, NodeId, NodeIdError, QualifiedName,
    StatusCode,
};
pub use variant::{Array, BuiltinType, DataValue, ExtensionObject, Variant};
pub use xml::{CanonicalSerializer, ElementSerializer, VariantDecoder, XmlElement, XmlStreamDecoder};
