// crates/opcua-nodeset-xml/src/model/mod.rs

//! Raw `serde` data structures that map directly to the `UANodeSet.xsd` schema.
//!
//! These structs are annotated with `serde` attributes to facilitate parsing via
//! `quick-xml`. Identifier attributes are kept as the strings found in the file;
//! the resolver turns them into `NodeId`s.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

use serde::Deserialize;

pub mod common;
pub mod nodes;

pub use common::{Alias, Aliases, LocalizedTextElement, ModelTable, Reference, References, UriTable};
pub use nodes::{NodeDecl, UANode};

/// The root element of a node-set file.
///
/// Represents the `<UANodeSet>` element defined in `UANodeSet.xsd`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "UANodeSet")]
pub struct UANodeSet {
    #[serde(rename = "@LastModified", default)]
    pub last_modified: Option<String>,

    #[serde(rename = "NamespaceUris", default)]
    pub namespace_uris: Option<UriTable>,

    #[serde(rename = "ServerUris", default)]
    pub server_uris: Option<UriTable>,

    #[serde(rename = "Models", default)]
    pub models: Option<ModelTable>,

    #[serde(rename = "Aliases", default)]
    pub aliases: Option<Aliases>,

    /// Vendor specific content, not interpreted.
    #[serde(rename = "Extensions", default)]
    pub extensions: Option<opcua_nodeset::XmlElement>,

    /// Every node declaration, in document order.
    #[serde(rename = "$value", default)]
    pub nodes: Vec<UANode>,
}
