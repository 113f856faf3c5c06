// crates/opcua-nodeset-xml/src/resolver/mod.rs

//! Handles the business logic of resolving values from a deserialized node set.
//!
//! This module contains the main `resolve_nodeset` orchestrator and the four
//! attribute operations it applies to every declaration.

use crate::config::{FailurePolicy, LoadOptions};
use crate::error::NodeSetError;
use crate::log::{NodeContext, my_debug, my_info, my_warn};
use crate::model::{self, UANodeSet};
use crate::types::{self, AliasTable};
use opcua_nodeset::NodeId;

// --- Sub-modules ---

mod dimensions;
mod identifier;
mod nodes;
mod value;

pub use dimensions::parse_array_dimensions;
pub use identifier::{resolve_data_type, resolve_node_id, resolve_reference_type};
pub use value::decode_value;

/// Resolves the final `NodeSet` from the raw deserialized document.
pub(crate) fn resolve_nodeset(
    raw: &UANodeSet,
    options: &LoadOptions,
) -> Result<types::NodeSet, NodeSetError> {
    // --- Pass 1: Build the alias table ---
    // Must be complete before any node is resolved.
    let aliases = build_alias_table(raw.aliases.as_ref())?;
    my_debug!("Built alias table with {} entries", aliases.len());

    // --- Pass 2: Resolve every node declaration ---
    let mut nodes = Vec::with_capacity(raw.nodes.len());
    let mut skipped = Vec::new();

    for node in &raw.nodes {
        match nodes::resolve_node(node, &aliases) {
            Ok(resolved) => nodes.push(resolved),
            Err(e) => match options.policy_for(&e) {
                FailurePolicy::SkipNode => {
                    let decl = node.decl();
                    let ctx = NodeContext {
                        element: decl.element(),
                        node_id: decl.node_id(),
                        browse_name: decl.browse_name(),
                    };
                    my_warn!(ctx, "Skipping node: {}", e);
                    skipped.push(types::SkippedNode {
                        node_id: decl.node_id().to_string(),
                        reason: e.to_string(),
                    });
                }
                FailurePolicy::Abort => return Err(e),
            },
        }
    }

    my_info!(
        "Loaded {} nodes ({} skipped, {} aliases)",
        nodes.len(),
        skipped.len(),
        aliases.len()
    );

    Ok(types::NodeSet {
        namespace_uris: uris(raw.namespace_uris.as_ref()),
        server_uris: uris(raw.server_uris.as_ref()),
        models: raw
            .models
            .as_ref()
            .map(|m| m.model.iter().map(model_info).collect())
            .unwrap_or_default(),
        aliases,
        nodes,
        skipped,
        last_modified: raw.last_modified.clone(),
    })
}

/// Builds the document's alias table. Targets must be identifier literals.
pub(crate) fn build_alias_table(
    aliases: Option<&model::Aliases>,
) -> Result<AliasTable, NodeSetError> {
    let mut table = AliasTable::new();
    let Some(aliases) = aliases else {
        return Ok(table);
    };

    for alias in &aliases.alias {
        let node_id: NodeId = alias
            .node_id
            .trim()
            .parse()
            .map_err(|error| NodeSetError::InvalidAlias {
                alias: alias.alias.clone(),
                error,
            })?;

        match table.get(&alias.alias) {
            Some(existing) if existing != &node_id => {
                return Err(NodeSetError::DuplicateAlias(alias.alias.clone()));
            }
            Some(_) => my_debug!("Alias {} declared twice", alias.alias),
            None => {
                table.insert(alias.alias.clone(), node_id);
            }
        }
    }
    Ok(table)
}

fn uris(table: Option<&model::UriTable>) -> Vec<String> {
    table.map(|t| t.uri.clone()).unwrap_or_default()
}

fn model_info(entry: &model::common::ModelTableEntry) -> types::ModelInfo {
    types::ModelInfo {
        model_uri: entry.model_uri.clone(),
        version: entry.version.clone(),
        publication_date: entry.publication_date.clone(),
        required_models: entry.required_model.iter().map(model_info).collect(),
    }
}
