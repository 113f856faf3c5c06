// crates/opcua-nodeset-xml/src/model/common.rs

//! Small elements and attribute defaults shared by all node declarations.

use opcua_nodeset::XmlElement;
use serde::{Deserialize, Deserializer};

// --- Helper Functions for serde(default) ---

/// Helper function for `#[serde(default)]` on bool fields that should default to `true`.
pub(super) fn bool_true() -> bool {
    true
}

/// `BaseDataType`, the schema default for `DataType` attributes.
pub(super) fn base_data_type() -> String {
    "i=24".to_string()
}

/// `Scalar`, the schema default for `ValueRank` attributes.
pub(super) fn scalar_rank() -> i32 {
    -1
}

/// `CurrentRead`, the schema default for access levels.
pub(super) fn current_read() -> u8 {
    1
}

/// Captures a `<Value>` child and keeps its tag name, which serde itself does not report.
pub(super) fn value_element<'de, D>(deserializer: D) -> Result<Option<XmlElement>, D::Error>
where
    D: Deserializer<'de>,
{
    XmlElement::deserialize(deserializer).map(|element| Some(element.named("Value")))
}

/// Represents `<DisplayName Locale="en">Text</DisplayName>` (and any other `LocalizedText` element).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LocalizedTextElement {
    #[serde(rename = "@Locale", default)]
    pub locale: Option<String>,
    #[serde(rename = "$text", default)]
    pub text: String,
}

/// Represents `<References>`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct References {
    #[serde(rename = "Reference", default)]
    pub reference: Vec<Reference>,
}

/// Represents `<Reference ReferenceType="HasComponent" IsForward="false">ns=1;i=5</Reference>`.
#[derive(Debug, Deserialize, Clone)]
pub struct Reference {
    /// A NodeId literal, alias or standard reference type name.
    #[serde(rename = "@ReferenceType")]
    pub reference_type: String,
    #[serde(rename = "@IsForward", default = "bool_true")]
    pub is_forward: bool,
    /// The target node, as a NodeId literal or alias.
    #[serde(rename = "$text", default)]
    pub target: String,
}

/// Represents `<Alias Alias="Int32">i=6</Alias>`.
#[derive(Debug, Deserialize, Clone)]
pub struct Alias {
    #[serde(rename = "@Alias")]
    pub alias: String,
    #[serde(rename = "$text")]
    pub node_id: String,
}

/// Represents `<Aliases>`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Aliases {
    #[serde(rename = "Alias", default)]
    pub alias: Vec<Alias>,
}

/// Represents `<NamespaceUris>` and `<ServerUris>`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UriTable {
    #[serde(rename = "Uri", default)]
    pub uri: Vec<String>,
}

/// Represents `<Model>` and its `<RequiredModel>` children.
#[derive(Debug, Deserialize, Clone)]
pub struct ModelTableEntry {
    #[serde(rename = "@ModelUri")]
    pub model_uri: String,
    #[serde(rename = "@Version", default)]
    pub version: Option<String>,
    #[serde(rename = "@PublicationDate", default)]
    pub publication_date: Option<String>,
    #[serde(rename = "RequiredModel", default)]
    pub required_model: Vec<ModelTableEntry>,
}

/// Represents `<Models>`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ModelTable {
    #[serde(rename = "Model", default)]
    pub model: Vec<ModelTableEntry>,
}
