// crates/opcua-nodeset-xml/src/resolver/identifier.rs

//! Alias-aware resolution of identifier strings.

use crate::error::{NodeSetError, ResolutionStage};
use crate::model;
use crate::types::AliasTable;
use opcua_nodeset::{NodeId, identifiers};

/// Resolves the identifier string chosen by `select` from `input`.
///
/// The stages run in a fixed order and the first hit wins:
/// 1. the string is parsed as a `NodeId` literal,
/// 2. it is looked up verbatim in `aliases`,
/// 3. it is looked up as a standard name (`Int32`, `HasComponent`, ...).
///
/// A document may shadow a standard name with an alias, but never a literal.
pub fn resolve_node_id<T: ?Sized>(
    input: &T,
    select: impl Fn(&T) -> &str,
    aliases: &AliasTable,
) -> Result<NodeId, NodeSetError> {
    let identifier = select(input);

    let literal_error = match identifier.parse::<NodeId>() {
        Ok(node_id) => return Ok(node_id),
        Err(e) => e,
    };

    if let Some(node_id) = aliases.get(identifier) {
        return Ok(node_id.clone());
    }

    if let Some(node_id) = identifiers::lookup(identifier) {
        return Ok(node_id);
    }

    Err(NodeSetError::IdentifierResolution {
        identifier: identifier.to_string(),
        literal_error,
        attempted: ResolutionStage::ALL,
    })
}

/// Resolves a `DataType` attribute.
pub fn resolve_data_type(data_type: &str, aliases: &AliasTable) -> Result<NodeId, NodeSetError> {
    resolve_node_id(data_type, |s| s, aliases)
}

/// Resolves the `ReferenceType` attribute of a `<Reference>`.
pub fn resolve_reference_type(
    reference: &model::Reference,
    aliases: &AliasTable,
) -> Result<NodeId, NodeSetError> {
    resolve_node_id(reference, |r| r.reference_type.as_str(), aliases)
}
