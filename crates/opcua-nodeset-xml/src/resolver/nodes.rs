// crates/opcua-nodeset-xml/src/resolver/nodes.rs

//! Resolves one raw node declaration into a public `types::Node`.

use super::dimensions::{dimension_entries, parse_array_dimensions};
use super::identifier::{resolve_data_type, resolve_node_id, resolve_reference_type};
use super::value::decode_value;
use crate::error::NodeSetError;
use crate::log::{NodeContext, my_debug};
use crate::model::{self, UANode};
use crate::types::{self, AliasTable, NodeAttributes, VariableAttributes};
use opcua_nodeset::{
    CanonicalSerializer, DataValue, LocalizedText, NodeId, QualifiedName, XmlElement,
    XmlStreamDecoder,
};

pub(super) fn resolve_node(
    node: &UANode,
    aliases: &AliasTable,
) -> Result<types::Node, NodeSetError> {
    let decl = node.decl();
    let ctx = NodeContext {
        element: decl.element(),
        node_id: decl.node_id(),
        browse_name: decl.browse_name(),
    };

    let node_id = resolve_node_id(decl, |d| d.node_id(), aliases)?;
    let browse_name: QualifiedName = decl
        .browse_name()
        .parse()
        .map_err(|error| NodeSetError::InvalidBrowseName {
            browse_name: decl.browse_name().to_string(),
            error,
        })?;

    let references = decl
        .references()
        .iter()
        .map(|r| resolve_reference(r, aliases))
        .collect::<Result<Vec<_>, _>>()?;

    let (parent_node_id, attributes) = match node {
        UANode::UAObject(n) => (
            resolve_parent(n.parent_node_id.as_deref(), aliases)?,
            NodeAttributes::Object {
                event_notifier: n.event_notifier,
            },
        ),
        UANode::UAVariable(n) => (
            resolve_parent(n.parent_node_id.as_deref(), aliases)?,
            NodeAttributes::Variable(VariableAttributes {
                data_type: resolve_data_type(&n.data_type, aliases)?,
                value: n.value.as_ref().map(decode),
                value_rank: n.value_rank,
                array_dimensions: array_dimensions(&n.array_dimensions)?,
                access_level: n.access_level,
                user_access_level: n.user_access_level,
                minimum_sampling_interval: n.minimum_sampling_interval,
                historizing: n.historizing,
                is_abstract: false,
            }),
        ),
        UANode::UAMethod(n) => (
            resolve_parent(n.parent_node_id.as_deref(), aliases)?,
            NodeAttributes::Method {
                executable: n.executable,
                user_executable: n.user_executable,
                method_declaration_id: resolve_parent(n.method_declaration_id.as_deref(), aliases)?,
            },
        ),
        UANode::UAView(n) => (
            None,
            NodeAttributes::View {
                contains_no_loops: n.contains_no_loops,
                event_notifier: n.event_notifier,
            },
        ),
        UANode::UAObjectType(n) => (
            None,
            NodeAttributes::ObjectType {
                is_abstract: n.is_abstract,
            },
        ),
        UANode::UAVariableType(n) => (
            None,
            NodeAttributes::VariableType(VariableAttributes {
                data_type: resolve_data_type(&n.data_type, aliases)?,
                value: n.value.as_ref().map(decode),
                value_rank: n.value_rank,
                array_dimensions: array_dimensions(&n.array_dimensions)?,
                access_level: 1,
                user_access_level: 1,
                minimum_sampling_interval: 0.0,
                historizing: false,
                is_abstract: n.is_abstract,
            }),
        ),
        UANode::UADataType(n) => (
            None,
            NodeAttributes::DataType {
                is_abstract: n.is_abstract,
                definition: n
                    .definition
                    .as_ref()
                    .map(|d| resolve_definition(d, aliases))
                    .transpose()?,
            },
        ),
        UANode::UAReferenceType(n) => (
            None,
            NodeAttributes::ReferenceType {
                is_abstract: n.is_abstract,
                symmetric: n.symmetric,
                inverse_name: localized(&n.inverse_name),
            },
        ),
    };

    my_debug!(ctx, "Resolved node with {} references", references.len());

    Ok(types::Node {
        node_id,
        browse_name,
        symbolic_name: decl.symbolic_name().map(str::to_string),
        display_name: localized(decl.display_name()),
        description: localized(decl.description()),
        write_mask: decl.write_mask(),
        user_write_mask: decl.user_write_mask(),
        parent_node_id,
        references,
        attributes,
    })
}

fn decode(element: &XmlElement) -> DataValue {
    decode_value(element, &CanonicalSerializer, XmlStreamDecoder::new)
}

fn resolve_reference(
    reference: &model::Reference,
    aliases: &AliasTable,
) -> Result<types::Reference, NodeSetError> {
    Ok(types::Reference {
        reference_type: resolve_reference_type(reference, aliases)?,
        target: resolve_node_id(reference, |r| r.target.trim(), aliases)?,
        is_forward: reference.is_forward,
    })
}

/// Resolves an optional identifier attribute such as `ParentNodeId`.
fn resolve_parent(id: Option<&str>, aliases: &AliasTable) -> Result<Option<NodeId>, NodeSetError> {
    id.map(|id| resolve_node_id(id, |s| s, aliases)).transpose()
}

fn resolve_definition(
    definition: &model::nodes::DataTypeDefinition,
    aliases: &AliasTable,
) -> Result<types::DataTypeDefinition, NodeSetError> {
    let name: QualifiedName = definition
        .name
        .parse()
        .map_err(|error| NodeSetError::InvalidBrowseName {
            browse_name: definition.name.clone(),
            error,
        })?;

    let fields = definition
        .field
        .iter()
        .map(|field| -> Result<types::DataTypeField, NodeSetError> {
            Ok(types::DataTypeField {
                name: field.name.clone(),
                data_type: resolve_data_type(&field.data_type, aliases)?,
                value_rank: field.value_rank,
                array_dimensions: array_dimensions(&field.array_dimensions)?,
                value: field.value,
                is_optional: field.is_optional,
                description: localized(&field.description),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(types::DataTypeDefinition {
        name,
        is_union: definition.is_union,
        is_option_set: definition.is_option_set,
        fields,
    })
}

fn localized(elements: &[model::LocalizedTextElement]) -> Vec<LocalizedText> {
    elements
        .iter()
        .map(|e| LocalizedText::new(e.locale.as_deref(), e.text.as_str()))
        .collect()
}

fn array_dimensions(attribute: &str) -> Result<Vec<u32>, NodeSetError> {
    parse_array_dimensions(&dimension_entries(attribute))
}
