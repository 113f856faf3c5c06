// crates/opcua-nodeset-xml/src/types.rs

//! Public, ergonomic data structures for representing a loaded node set.

use opcua_nodeset::{DataValue, LocalizedText, NodeId, QualifiedName, identifiers};
use std::collections::BTreeMap;

/// Document-local alias names mapped to the identifiers they stand for.
pub type AliasTable = BTreeMap<String, NodeId>;

// --- Root Structure ---

/// Represents a fully parsed and resolved `<UANodeSet>` document.
#[derive(Debug, Default)]
pub struct NodeSet {
    /// `<NamespaceUris>`, in declaration order (index 0 is namespace 1).
    pub namespace_uris: Vec<String>,
    /// `<ServerUris>`
    pub server_uris: Vec<String>,
    /// `<Models>`
    pub models: Vec<ModelInfo>,
    /// `<Aliases>`
    pub aliases: AliasTable,
    /// Every node that resolved successfully, in document order.
    pub nodes: Vec<Node>,
    /// Nodes dropped under `FailurePolicy::SkipNode`.
    pub skipped: Vec<SkippedNode>,
    /// `@LastModified`
    pub last_modified: Option<String>,
}

impl NodeSet {
    /// Finds a node by its identifier.
    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.node_id == node_id)
    }

    pub fn nodes_of_class(&self, class: NodeClass) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.node_class() == class)
    }
}

/// Represents a `<Model>` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelInfo {
    pub model_uri: String,
    pub version: Option<String>,
    pub publication_date: Option<String>,
    pub required_models: Vec<ModelInfo>,
}

/// A node declaration that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNode {
    /// The `NodeId` attribute as written in the file.
    pub node_id: String,
    pub reason: String,
}

// --- Nodes ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    Object,
    Variable,
    Method,
    View,
    ObjectType,
    VariableType,
    DataType,
    ReferenceType,
}

/// A resolved node with its attributes and references.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub node_id: NodeId,
    pub browse_name: QualifiedName,
    pub symbolic_name: Option<String>,
    pub display_name: Vec<LocalizedText>,
    pub description: Vec<LocalizedText>,
    pub write_mask: u32,
    pub user_write_mask: u32,
    /// `@ParentNodeId`, present on instance declarations only.
    pub parent_node_id: Option<NodeId>,
    pub references: Vec<Reference>,
    pub attributes: NodeAttributes,
}

impl Node {
    pub fn node_class(&self) -> NodeClass {
        match &self.attributes {
            NodeAttributes::Object { .. } => NodeClass::Object,
            NodeAttributes::Variable(_) => NodeClass::Variable,
            NodeAttributes::Method { .. } => NodeClass::Method,
            NodeAttributes::View { .. } => NodeClass::View,
            NodeAttributes::ObjectType { .. } => NodeClass::ObjectType,
            NodeAttributes::VariableType(_) => NodeClass::VariableType,
            NodeAttributes::DataType { .. } => NodeClass::DataType,
            NodeAttributes::ReferenceType { .. } => NodeClass::ReferenceType,
        }
    }

    /// Returns the variable attributes of a `Variable` or `VariableType` node.
    pub fn variable(&self) -> Option<&VariableAttributes> {
        match &self.attributes {
            NodeAttributes::Variable(v) | NodeAttributes::VariableType(v) => Some(v),
            _ => None,
        }
    }

    /// The target of the first forward `HasTypeDefinition` reference.
    pub fn type_definition(&self) -> Option<&NodeId> {
        self.references
            .iter()
            .find(|r| r.is_forward && r.reference_type == identifiers::HAS_TYPE_DEFINITION)
            .map(|r| &r.target)
    }
}

/// The class specific attributes of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeAttributes {
    Object {
        event_notifier: u8,
    },
    Variable(VariableAttributes),
    Method {
        executable: bool,
        user_executable: bool,
        method_declaration_id: Option<NodeId>,
    },
    View {
        contains_no_loops: bool,
        event_notifier: u8,
    },
    ObjectType {
        is_abstract: bool,
    },
    VariableType(VariableAttributes),
    DataType {
        is_abstract: bool,
        definition: Option<DataTypeDefinition>,
    },
    ReferenceType {
        is_abstract: bool,
        symmetric: bool,
        inverse_name: Vec<LocalizedText>,
    },
}

/// Attributes shared by variables and variable types.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAttributes {
    pub data_type: NodeId,
    /// `None` when the declaration has no `<Value>`; a failed decode yields the
    /// null `DataValue` instead.
    pub value: Option<DataValue>,
    pub value_rank: i32,
    pub array_dimensions: Vec<u32>,
    pub access_level: u8,
    pub user_access_level: u8,
    pub minimum_sampling_interval: f64,
    pub historizing: bool,
    /// Only meaningful for variable types.
    pub is_abstract: bool,
}

/// A reference from the declaring node to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub reference_type: NodeId,
    pub target: NodeId,
    pub is_forward: bool,
}

/// Represents the `<Definition>` of a structure or enumeration data type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTypeDefinition {
    pub name: QualifiedName,
    pub is_union: bool,
    pub is_option_set: bool,
    pub fields: Vec<DataTypeField>,
}

/// Represents one `<Field>` of a data type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTypeField {
    pub name: String,
    pub data_type: NodeId,
    pub value_rank: i32,
    pub array_dimensions: Vec<u32>,
    pub value: Option<i64>,
    pub is_optional: bool,
    pub description: Vec<LocalizedText>,
}
