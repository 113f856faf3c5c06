// crates/opcua-nodeset-xml/src/error.rs

use core::fmt;
use opcua_nodeset::NodeIdError;
use quick_xml::errors::serialize::DeError;

/// The lookup stages tried, in order, when resolving an identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStage {
    /// Parsing the string as a `ns=<index>;<kind>=<value>` literal.
    Literal,
    /// Looking the string up in the document's `<Aliases>`.
    Alias,
    /// Looking the string up in the table of standard names.
    WellKnown,
}

impl ResolutionStage {
    pub const ALL: [ResolutionStage; 3] = [
        ResolutionStage::Literal,
        ResolutionStage::Alias,
        ResolutionStage::WellKnown,
    ];
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolutionStage::Literal => "literal",
            ResolutionStage::Alias => "alias",
            ResolutionStage::WellKnown => "well-known name",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while loading a node set.
#[derive(Debug)]
pub enum NodeSetError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An identifier string matched none of the resolution stages.
    IdentifierResolution {
        identifier: String,
        /// Why the string is not a valid literal.
        literal_error: NodeIdError,
        attempted: [ResolutionStage; 3],
    },

    /// An `ArrayDimensions` list holds a token that is not a non-negative integer.
    DimensionFormat { raw: String, token: String },

    /// An `<Alias>` does not map to a valid identifier literal.
    InvalidAlias { alias: String, error: NodeIdError },

    /// The same alias is declared twice with different targets.
    DuplicateAlias(String),

    /// A `BrowseName` attribute could not be parsed.
    InvalidBrowseName { browse_name: String, error: NodeIdError },
}

impl From<DeError> for NodeSetError {
    fn from(e: DeError) -> Self {
        NodeSetError::XmlParsing(e)
    }
}

impl fmt::Display for NodeSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeSetError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            NodeSetError::IdentifierResolution {
                identifier,
                literal_error,
                attempted,
            } => {
                write!(f, "Could not resolve identifier '{}' (tried ", identifier)?;
                for (i, stage) in attempted.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", stage)?;
                }
                write!(f, "; not a literal: {})", literal_error)
            }
            NodeSetError::DimensionFormat { raw, token } => write!(
                f,
                "Invalid array dimension '{}' in ArrayDimensions '{}'",
                token, raw
            ),
            NodeSetError::InvalidAlias { alias, error } => {
                write!(f, "Invalid target for alias '{}': {}", alias, error)
            }
            NodeSetError::DuplicateAlias(alias) => {
                write!(f, "Alias '{}' is declared with conflicting targets", alias)
            }
            NodeSetError::InvalidBrowseName { browse_name, error } => {
                write!(f, "Invalid browse name '{}': {}", browse_name, error)
            }
        }
    }
}

impl std::error::Error for NodeSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NodeSetError::XmlParsing(e) => Some(e),
            NodeSetError::IdentifierResolution { literal_error, .. } => Some(literal_error),
            NodeSetError::InvalidAlias { error, .. } => Some(error),
            NodeSetError::InvalidBrowseName { error, .. } => Some(error),
            _ => None,
        }
    }
}
