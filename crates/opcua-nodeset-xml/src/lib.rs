// crates/opcua-nodeset-xml/src/lib.rs

#![doc = "Loads OPC UA XML node sets (`UANodeSet`) into resolved, typed nodes."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_nodeset_from_str`: Parsing a node set and resolving every node."]
#![doc = "- `resolve_data_type` / `resolve_reference_type`: Literal, alias and standard name resolution."]
#![doc = "- `decode_value`: Turning a `<Value>` element into a `DataValue`, never failing."]
#![doc = "- `parse_array_dimensions`: Reading `ArrayDimensions` lists."]

// --- Crate Modules ---

mod config;
mod error;
mod log;
pub mod model;
mod parser;
mod resolver;
mod types;

// --- Public API Re-exports ---

pub use config::{FailurePolicy, LoadOptions};
pub use error::{NodeSetError, ResolutionStage};
pub use parser::{load_nodeset_from_str, load_nodeset_with_options};
pub use resolver::{
    decode_value, parse_array_dimensions, resolve_data_type, resolve_node_id,
    resolve_reference_type,
};
pub use types::{
    AliasTable, DataTypeDefinition, DataTypeField, ModelInfo, Node, NodeAttributes, NodeClass,
    NodeSet, Reference, SkippedNode, VariableAttributes,
};
