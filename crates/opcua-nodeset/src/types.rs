// crates/opcua-nodeset/src/types.rs

//! Identifier and naming primitives of the OPC UA address space.
//!
//! `NodeId` parsing follows the compact literal syntax used by node-set files
//! (`ns=<index>;<kind>=<value>`, where `<kind>` is one of `i`, `s`, `g` or `b`).

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use core::fmt;
use core::str::FromStr;

/// Lengths of the hyphen separated groups of a textual GUID.
const GUID_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// A 16 byte GUID, stored in the order it is written (`XXXXXXXX-XXXX-...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Guid(pub [u8; 16]);

impl Guid {
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Guid(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl FromStr for Guid {
    type Err = NodeIdError;

    /// Parses the canonical `8-4-4-4-12` hex form. Surrounding braces are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('{').trim_end_matches('}');
        let groups: Vec<&str> = trimmed.split('-').collect();
        if groups.len() != GUID_GROUPS.len()
            || groups.iter().zip(GUID_GROUPS).any(|(group, len)| group.len() != len)
        {
            return Err(NodeIdError::InvalidGuid(s.to_string()));
        }

        let bytes =
            hex::decode(groups.concat()).map_err(|_| NodeIdError::InvalidGuid(s.to_string()))?;
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| NodeIdError::InvalidGuid(s.to_string()))?;
        Ok(Guid(bytes))
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{}-{}-{}-{}-{}",
            hex::encode_upper(&b[0..4]),
            hex::encode_upper(&b[4..6]),
            hex::encode_upper(&b[6..8]),
            hex::encode_upper(&b[8..10]),
            hex::encode_upper(&b[10..16])
        )
    }
}

/// The value part of a `NodeId`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u32),
    String(String),
    Guid(Guid),
    Opaque(Vec<u8>),
}

/// Canonical identifier of a node or type within a namespace.
///
/// A `NodeId` is always fully populated; there is no partially parsed state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub namespace: u16,
    pub identifier: Identifier,
}

impl NodeId {
    /// The null identifier (`i=0`).
    pub const NULL: NodeId = NodeId::numeric(0, 0);

    pub const fn numeric(namespace: u16, value: u32) -> Self {
        NodeId {
            namespace,
            identifier: Identifier::Numeric(value),
        }
    }

    pub fn string(namespace: u16, value: impl Into<String>) -> Self {
        NodeId {
            namespace,
            identifier: Identifier::String(value.into()),
        }
    }

    pub fn guid(namespace: u16, value: Guid) -> Self {
        NodeId {
            namespace,
            identifier: Identifier::Guid(value),
        }
    }

    pub fn opaque(namespace: u16, value: Vec<u8>) -> Self {
        NodeId {
            namespace,
            identifier: Identifier::Opaque(value),
        }
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NULL
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    /// Parses a literal such as `i=13`, `ns=2;s=Pump.Speed` or `ns=1;g=...`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, rest) = match s.strip_prefix("ns=") {
            Some(tail) => {
                let (ns, rest) = tail
                    .split_once(';')
                    .ok_or_else(|| NodeIdError::MissingIdentifier(s.to_string()))?;
                let namespace = ns
                    .parse::<u16>()
                    .map_err(|_| NodeIdError::InvalidNamespace(ns.to_string()))?;
                (namespace, rest)
            }
            None => (0, s),
        };

        Ok(NodeId {
            namespace,
            identifier: parse_identifier(rest)?,
        })
    }
}

/// Parses the `<kind>=<value>` part of a literal.
fn parse_identifier(s: &str) -> Result<Identifier, NodeIdError> {
    let (kind, value) = s
        .split_once('=')
        .ok_or_else(|| NodeIdError::MissingIdentifier(s.to_string()))?;

    if !matches!(kind, "i" | "s" | "g" | "b") {
        return Err(NodeIdError::UnknownIdentifierKind(kind.to_string()));
    }
    if value.is_empty() {
        return Err(NodeIdError::EmptyIdentifier(kind.to_string()));
    }

    match kind {
        "i" => value
            .parse::<u32>()
            .map(Identifier::Numeric)
            .map_err(|_| NodeIdError::InvalidNumeric(value.to_string())),
        "s" => Ok(Identifier::String(value.to_string())),
        "g" => value.parse::<Guid>().map(Identifier::Guid),
        _ => BASE64
            .decode(value)
            .map(Identifier::Opaque)
            .map_err(|_| NodeIdError::InvalidOpaque(value.to_string())),
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(v) => write!(f, "i={}", v),
            Identifier::String(v) => write!(f, "s={}", v),
            Identifier::Guid(v) => write!(f, "g={}", v),
            Identifier::Opaque(v) => write!(f, "b={}", BASE64.encode(v)),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};", self.namespace)?;
        }
        write!(f, "{}", self.identifier)
    }
}

/// A `NodeId` that may point into another server or name its namespace by URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ExpandedNodeId {
    pub node_id: NodeId,
    /// When set, replaces `node_id.namespace`.
    pub namespace_uri: Option<String>,
    pub server_index: u32,
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self {
        ExpandedNodeId {
            node_id,
            namespace_uri: None,
            server_index: 0,
        }
    }
}

impl FromStr for ExpandedNodeId {
    type Err = NodeIdError;

    /// Parses `[svr=<index>;][nsu=<uri>;]<kind>=<value>` or a plain `NodeId` literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s;
        let mut server_index = 0;

        if let Some(tail) = rest.strip_prefix("svr=") {
            let (svr, tail) = tail
                .split_once(';')
                .ok_or_else(|| NodeIdError::MissingIdentifier(s.to_string()))?;
            server_index = svr
                .parse()
                .map_err(|_| NodeIdError::InvalidServerIndex(svr.to_string()))?;
            rest = tail;
        }

        if let Some(tail) = rest.strip_prefix("nsu=") {
            let (uri, tail) = tail
                .split_once(';')
                .ok_or_else(|| NodeIdError::MissingIdentifier(s.to_string()))?;
            return Ok(ExpandedNodeId {
                node_id: NodeId {
                    namespace: 0,
                    identifier: parse_identifier(tail)?,
                },
                namespace_uri: Some(uri.to_string()),
                server_index,
            });
        }

        Ok(ExpandedNodeId {
            node_id: rest.parse()?,
            namespace_uri: None,
            server_index,
        })
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.server_index != 0 {
            write!(f, "svr={};", self.server_index)?;
        }
        match &self.namespace_uri {
            Some(uri) => write!(f, "nsu={};{}", uri, self.node_id.identifier),
            None => write!(f, "{}", self.node_id),
        }
    }
}

/// A browse name: a namespace index plus a text name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        QualifiedName {
            namespace_index,
            name: name.into(),
        }
    }
}

impl FromStr for QualifiedName {
    type Err = NodeIdError;

    /// Parses the `<index>:<name>` form used by `BrowseName` attributes.
    /// Without a numeric prefix the name lives in namespace 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((prefix, name))
                if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let namespace_index = prefix
                    .parse()
                    .map_err(|_| NodeIdError::InvalidQualifiedName(s.to_string()))?;
                Ok(QualifiedName::new(namespace_index, name))
            }
            _ => Ok(QualifiedName::new(0, s)),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_index != 0 {
            write!(f, "{}:", self.namespace_index)?;
        }
        write!(f, "{}", self.name)
    }
}

/// Human readable text with an optional locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LocalizedText {
    pub locale: Option<String>,
    pub text: String,
}

impl LocalizedText {
    pub fn new(locale: Option<&str>, text: impl Into<String>) -> Self {
        LocalizedText {
            locale: locale.map(str::to_string),
            text: text.into(),
        }
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An OPC UA status code. The two top bits carry the severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StatusCode(pub u32);

impl StatusCode {
    pub const GOOD: StatusCode = StatusCode(0);

    pub fn is_good(self) -> bool {
        self.0 >> 30 == 0
    }

    pub fn is_bad(self) -> bool {
        self.0 >> 30 == 0b10
    }
}

/// Error type for invalid identifier literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    /// The literal has no `<kind>=<value>` part.
    MissingIdentifier(String),
    /// The identifier kind is not one of `i`, `s`, `g`, `b`.
    UnknownIdentifierKind(String),
    /// The identifier kind is valid but its value is empty.
    EmptyIdentifier(String),
    /// The `ns=` prefix is not a valid 16-bit namespace index.
    InvalidNamespace(String),
    /// The `i=` value is not a valid 32-bit unsigned integer.
    InvalidNumeric(String),
    /// The `g=` value is not a well-formed GUID.
    InvalidGuid(String),
    /// The `b=` value is not valid base64.
    InvalidOpaque(String),
    /// The `svr=` prefix is not a valid server index.
    InvalidServerIndex(String),
    /// The namespace prefix of a browse name does not fit in 16 bits.
    InvalidQualifiedName(String),
}

impl fmt::Display for NodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeIdError::MissingIdentifier(s) => {
                write!(f, "'{}' has no <kind>=<value> identifier", s)
            }
            NodeIdError::UnknownIdentifierKind(k) => write!(f, "Unknown identifier kind '{}'", k),
            NodeIdError::EmptyIdentifier(k) => write!(f, "Empty value for identifier kind '{}'", k),
            NodeIdError::InvalidNamespace(v) => write!(f, "Invalid namespace index: {}", v),
            NodeIdError::InvalidNumeric(v) => write!(f, "Invalid numeric identifier: {}", v),
            NodeIdError::InvalidGuid(v) => write!(f, "Invalid GUID: {}", v),
            NodeIdError::InvalidOpaque(v) => write!(f, "Invalid base64 opaque identifier: {}", v),
            NodeIdError::InvalidServerIndex(v) => write!(f, "Invalid server index: {}", v),
            NodeIdError::InvalidQualifiedName(v) => write!(f, "Invalid qualified name: {}", v),
        }
    }
}

impl std::error::Error for NodeIdError {}
