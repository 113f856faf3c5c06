// crates/opcua-nodeset-xml/src/model/nodes.rs

//! Node declarations from `UANodeSet.xsd` (`UAObject`, `UAVariable`, ...).
//!
//! The schema derives every node type from `UANode` (and `UAInstance` / `UAType`).
//! `quick-xml` cannot flatten typed attributes, so the inherited attributes are
//! repeated on each struct and exposed through the `NodeDecl` trait.

use super::common::{
    LocalizedTextElement, References, base_data_type, bool_true, current_read, scalar_rank,
    value_element,
};
use opcua_nodeset::XmlElement;
use serde::Deserialize;

/// Attributes inherited from `UANode`.
pub trait NodeDecl {
    /// The XML tag of the declaration, for diagnostics.
    fn element(&self) -> &'static str;
    fn node_id(&self) -> &str;
    fn browse_name(&self) -> &str;
    fn symbolic_name(&self) -> Option<&str>;
    fn write_mask(&self) -> u32;
    fn user_write_mask(&self) -> u32;
    fn display_name(&self) -> &[LocalizedTextElement];
    fn description(&self) -> &[LocalizedTextElement];
    fn references(&self) -> &[super::common::Reference];
}

macro_rules! node_decl {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl NodeDecl for $ty {
                fn element(&self) -> &'static str {
                    stringify!($ty)
                }
                fn node_id(&self) -> &str {
                    &self.node_id
                }
                fn browse_name(&self) -> &str {
                    &self.browse_name
                }
                fn symbolic_name(&self) -> Option<&str> {
                    self.symbolic_name.as_deref()
                }
                fn write_mask(&self) -> u32 {
                    self.write_mask
                }
                fn user_write_mask(&self) -> u32 {
                    self.user_write_mask
                }
                fn display_name(&self) -> &[LocalizedTextElement] {
                    &self.display_name
                }
                fn description(&self) -> &[LocalizedTextElement] {
                    &self.description
                }
                fn references(&self) -> &[super::common::Reference] {
                    self.references
                        .as_ref()
                        .map(|r| r.reference.as_slice())
                        .unwrap_or(&[])
                }
            }
        )+
    };
}

node_decl!(
    UAObject,
    UAVariable,
    UAMethod,
    UAView,
    UAObjectType,
    UAVariableType,
    UADataType,
    UAReferenceType,
);

/// One node declaration, in document order.
#[derive(Debug, Deserialize, Clone)]
pub enum UANode {
    UAObject(UAObject),
    UAVariable(UAVariable),
    UAMethod(UAMethod),
    UAView(UAView),
    UAObjectType(UAObjectType),
    UAVariableType(UAVariableType),
    UADataType(UADataType),
    UAReferenceType(UAReferenceType),
}

impl UANode {
    pub fn decl(&self) -> &dyn NodeDecl {
        match self {
            UANode::UAObject(n) => n,
            UANode::UAVariable(n) => n,
            UANode::UAMethod(n) => n,
            UANode::UAView(n) => n,
            UANode::UAObjectType(n) => n,
            UANode::UAVariableType(n) => n,
            UANode::UADataType(n) => n,
            UANode::UAReferenceType(n) => n,
        }
    }
}

/// Represents `<UAObject>`.
#[derive(Debug, Deserialize, Clone)]
pub struct UAObject {
    #[serde(rename = "@NodeId")]
    pub node_id: String,
    #[serde(rename = "@BrowseName")]
    pub browse_name: String,
    #[serde(rename = "@SymbolicName", default)]
    pub symbolic_name: Option<String>,
    #[serde(rename = "@WriteMask", default)]
    pub write_mask: u32,
    #[serde(rename = "@UserWriteMask", default)]
    pub user_write_mask: u32,
    #[serde(rename = "@ParentNodeId", default)]
    pub parent_node_id: Option<String>,
    #[serde(rename = "@EventNotifier", default)]
    pub event_notifier: u8,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Vec<LocalizedTextElement>,
    #[serde(rename = "Description", default)]
    pub description: Vec<LocalizedTextElement>,
    #[serde(rename = "References", default)]
    pub references: Option<References>,
}

/// Represents `<UAVariable>`.
#[derive(Debug, Deserialize, Clone)]
pub struct UAVariable {
    #[serde(rename = "@NodeId")]
    pub node_id: String,
    #[serde(rename = "@BrowseName")]
    pub browse_name: String,
    #[serde(rename = "@SymbolicName", default)]
    pub symbolic_name: Option<String>,
    #[serde(rename = "@WriteMask", default)]
    pub write_mask: u32,
    #[serde(rename = "@UserWriteMask", default)]
    pub user_write_mask: u32,
    #[serde(rename = "@ParentNodeId", default)]
    pub parent_node_id: Option<String>,
    #[serde(rename = "@DataType", default = "base_data_type")]
    pub data_type: String,
    #[serde(rename = "@ValueRank", default = "scalar_rank")]
    pub value_rank: i32,
    /// A whitespace separated list of comma separated dimension strings.
    #[serde(rename = "@ArrayDimensions", default)]
    pub array_dimensions: String,
    #[serde(rename = "@AccessLevel", default = "current_read")]
    pub access_level: u8,
    #[serde(rename = "@UserAccessLevel", default = "current_read")]
    pub user_access_level: u8,
    #[serde(rename = "@MinimumSamplingInterval", default)]
    pub minimum_sampling_interval: f64,
    #[serde(rename = "@Historizing", default)]
    pub historizing: bool,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Vec<LocalizedTextElement>,
    #[serde(rename = "Description", default)]
    pub description: Vec<LocalizedTextElement>,
    #[serde(rename = "References", default)]
    pub references: Option<References>,
    #[serde(rename = "Value", default, deserialize_with = "value_element")]
    pub value: Option<XmlElement>,
}

/// Represents `<UAMethod>`.
#[derive(Debug, Deserialize, Clone)]
pub struct UAMethod {
    #[serde(rename = "@NodeId")]
    pub node_id: String,
    #[serde(rename = "@BrowseName")]
    pub browse_name: String,
    #[serde(rename = "@SymbolicName", default)]
    pub symbolic_name: Option<String>,
    #[serde(rename = "@WriteMask", default)]
    pub write_mask: u32,
    #[serde(rename = "@UserWriteMask", default)]
    pub user_write_mask: u32,
    #[serde(rename = "@ParentNodeId", default)]
    pub parent_node_id: Option<String>,
    #[serde(rename = "@Executable", default = "bool_true")]
    pub executable: bool,
    #[serde(rename = "@UserExecutable", default = "bool_true")]
    pub user_executable: bool,
    #[serde(rename = "@MethodDeclarationId", default)]
    pub method_declaration_id: Option<String>,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Vec<LocalizedTextElement>,
    #[serde(rename = "Description", default)]
    pub description: Vec<LocalizedTextElement>,
    #[serde(rename = "References", default)]
    pub references: Option<References>,
}

/// Represents `<UAView>`.
#[derive(Debug, Deserialize, Clone)]
pub struct UAView {
    #[serde(rename = "@NodeId")]
    pub node_id: String,
    #[serde(rename = "@BrowseName")]
    pub browse_name: String,
    #[serde(rename = "@SymbolicName", default)]
    pub symbolic_name: Option<String>,
    #[serde(rename = "@WriteMask", default)]
    pub write_mask: u32,
    #[serde(rename = "@UserWriteMask", default)]
    pub user_write_mask: u32,
    #[serde(rename = "@ContainsNoLoops", default)]
    pub contains_no_loops: bool,
    #[serde(rename = "@EventNotifier", default)]
    pub event_notifier: u8,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Vec<LocalizedTextElement>,
    #[serde(rename = "Description", default)]
    pub description: Vec<LocalizedTextElement>,
    #[serde(rename = "References", default)]
    pub references: Option<References>,
}

/// Represents `<UAObjectType>`.
#[derive(Debug, Deserialize, Clone)]
pub struct UAObjectType {
    #[serde(rename = "@NodeId")]
    pub node_id: String,
    #[serde(rename = "@BrowseName")]
    pub browse_name: String,
    #[serde(rename = "@SymbolicName", default)]
    pub symbolic_name: Option<String>,
    #[serde(rename = "@WriteMask", default)]
    pub write_mask: u32,
    #[serde(rename = "@UserWriteMask", default)]
    pub user_write_mask: u32,
    #[serde(rename = "@IsAbstract", default)]
    pub is_abstract: bool,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Vec<LocalizedTextElement>,
    #[serde(rename = "Description", default)]
    pub description: Vec<LocalizedTextElement>,
    #[serde(rename = "References", default)]
    pub references: Option<References>,
}

/// Represents `<UAVariableType>`.
#[derive(Debug, Deserialize, Clone)]
pub struct UAVariableType {
    #[serde(rename = "@NodeId")]
    pub node_id: String,
    #[serde(rename = "@BrowseName")]
    pub browse_name: String,
    #[serde(rename = "@SymbolicName", default)]
    pub symbolic_name: Option<String>,
    #[serde(rename = "@WriteMask", default)]
    pub write_mask: u32,
    #[serde(rename = "@UserWriteMask", default)]
    pub user_write_mask: u32,
    #[serde(rename = "@IsAbstract", default)]
    pub is_abstract: bool,
    #[serde(rename = "@DataType", default = "base_data_type")]
    pub data_type: String,
    #[serde(rename = "@ValueRank", default = "scalar_rank")]
    pub value_rank: i32,
    #[serde(rename = "@ArrayDimensions", default)]
    pub array_dimensions: String,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Vec<LocalizedTextElement>,
    #[serde(rename = "Description", default)]
    pub description: Vec<LocalizedTextElement>,
    #[serde(rename = "References", default)]
    pub references: Option<References>,
    #[serde(rename = "Value", default, deserialize_with = "value_element")]
    pub value: Option<XmlElement>,
}

/// Represents `<UADataType>`.
#[derive(Debug, Deserialize, Clone)]
pub struct UADataType {
    #[serde(rename = "@NodeId")]
    pub node_id: String,
    #[serde(rename = "@BrowseName")]
    pub browse_name: String,
    #[serde(rename = "@SymbolicName", default)]
    pub symbolic_name: Option<String>,
    #[serde(rename = "@WriteMask", default)]
    pub write_mask: u32,
    #[serde(rename = "@UserWriteMask", default)]
    pub user_write_mask: u32,
    #[serde(rename = "@IsAbstract", default)]
    pub is_abstract: bool,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Vec<LocalizedTextElement>,
    #[serde(rename = "Description", default)]
    pub description: Vec<LocalizedTextElement>,
    #[serde(rename = "References", default)]
    pub references: Option<References>,
    #[serde(rename = "Definition", default)]
    pub definition: Option<DataTypeDefinition>,
}

/// Represents `<Definition>` inside `<UADataType>`.
#[derive(Debug, Deserialize, Clone)]
pub struct DataTypeDefinition {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@IsUnion", default)]
    pub is_union: bool,
    #[serde(rename = "@IsOptionSet", default)]
    pub is_option_set: bool,
    #[serde(rename = "Field", default)]
    pub field: Vec<DataTypeField>,
}

/// Represents `<Field>` inside `<Definition>`.
#[derive(Debug, Deserialize, Clone)]
pub struct DataTypeField {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@DataType", default = "base_data_type")]
    pub data_type: String,
    #[serde(rename = "@ValueRank", default = "scalar_rank")]
    pub value_rank: i32,
    #[serde(rename = "@ArrayDimensions", default)]
    pub array_dimensions: String,
    /// Set for enumeration and option set fields.
    #[serde(rename = "@Value", default)]
    pub value: Option<i64>,
    #[serde(rename = "@IsOptional", default)]
    pub is_optional: bool,
    #[serde(rename = "Description", default)]
    pub description: Vec<LocalizedTextElement>,
}

/// Represents `<UAReferenceType>`.
#[derive(Debug, Deserialize, Clone)]
pub struct UAReferenceType {
    #[serde(rename = "@NodeId")]
    pub node_id: String,
    #[serde(rename = "@BrowseName")]
    pub browse_name: String,
    #[serde(rename = "@SymbolicName", default)]
    pub symbolic_name: Option<String>,
    #[serde(rename = "@WriteMask", default)]
    pub write_mask: u32,
    #[serde(rename = "@UserWriteMask", default)]
    pub user_write_mask: u32,
    #[serde(rename = "@IsAbstract", default)]
    pub is_abstract: bool,
    #[serde(rename = "@Symmetric", default)]
    pub symmetric: bool,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Vec<LocalizedTextElement>,
    #[serde(rename = "Description", default)]
    pub description: Vec<LocalizedTextElement>,
    #[serde(rename = "References", default)]
    pub references: Option<References>,
    #[serde(rename = "InverseName", default)]
    pub inverse_name: Vec<LocalizedTextElement>,
}
