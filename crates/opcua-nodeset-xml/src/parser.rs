// crates/opcua-nodeset-xml/src/parser.rs

use crate::config::LoadOptions;
use crate::error::NodeSetError;
use crate::model;
use crate::resolver;
use crate::types::NodeSet;

/// Parses a `UANodeSet` XML string and resolves every node declaration.
///
/// Uses the default `LoadOptions`: the first node with an unresolvable identifier
/// or malformed `ArrayDimensions` aborts the load.
///
/// # Arguments
/// * `xml_content` - A string slice containing the full node-set file.
///
/// # Errors
/// Returns a `NodeSetError` if the XML is malformed, an alias is invalid, or a
/// node cannot be resolved.
pub fn load_nodeset_from_str(xml_content: &str) -> Result<NodeSet, NodeSetError> {
    load_nodeset_with_options(xml_content, &LoadOptions::default())
}

/// Parses a `UANodeSet` XML string with explicit failure policies.
///
/// # Errors
/// Returns a `NodeSetError` if the XML is malformed, an alias is invalid, or a
/// node fails under `FailurePolicy::Abort`.
pub fn load_nodeset_with_options(
    xml_content: &str,
    options: &LoadOptions,
) -> Result<NodeSet, NodeSetError> {
    // 1. Deserialize the raw XML string into our internal model.
    let raw: model::UANodeSet = quick_xml::de::from_str(xml_content)?;

    // 2. Pass the raw model to the resolver to build the public types.
    resolver::resolve_nodeset(&raw, options)
}
