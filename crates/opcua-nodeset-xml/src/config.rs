// crates/opcua-nodeset-xml/src/config.rs

//! Options controlling how the loader reacts to broken node declarations.

use crate::error::NodeSetError;

/// What to do with a node whose declaration cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop loading and return the error.
    #[default]
    Abort,
    /// Log the error, record the node in `NodeSet::skipped` and continue.
    SkipNode,
}

/// Loader options.
///
/// Undecodable values never need a policy: they always load as the null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    /// Applies to data types, reference types, node ids and browse names.
    pub unresolved_identifier: FailurePolicy,
    /// Applies to malformed `ArrayDimensions` attributes.
    pub invalid_dimensions: FailurePolicy,
}

impl LoadOptions {
    /// Skips broken nodes instead of aborting the load.
    pub fn lenient() -> Self {
        LoadOptions {
            unresolved_identifier: FailurePolicy::SkipNode,
            invalid_dimensions: FailurePolicy::SkipNode,
        }
    }

    /// The policy for a node-level error. Document-level errors always abort.
    pub(crate) fn policy_for(&self, error: &NodeSetError) -> FailurePolicy {
        match error {
            NodeSetError::IdentifierResolution { .. } | NodeSetError::InvalidBrowseName { .. } => {
                self.unresolved_identifier
            }
            NodeSetError::DimensionFormat { .. } => self.invalid_dimensions,
            _ => FailurePolicy::Abort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aborts() {
        let options = LoadOptions::default();
        let err = NodeSetError::DimensionFormat {
            raw: "x".to_string(),
            token: "x".to_string(),
        };
        assert_eq!(options.policy_for(&err), FailurePolicy::Abort);
    }

    #[test]
    fn test_policies_are_independent() {
        let options = LoadOptions {
            invalid_dimensions: FailurePolicy::SkipNode,
            ..Default::default()
        };
        let dims = NodeSetError::DimensionFormat {
            raw: "x".to_string(),
            token: "x".to_string(),
        };
        let alias = NodeSetError::DuplicateAlias("A".to_string());
        assert_eq!(options.policy_for(&dims), FailurePolicy::SkipNode);
        assert_eq!(options.policy_for(&alias), FailurePolicy::Abort);
        assert_eq!(
            LoadOptions::lenient().policy_for(&alias),
            FailurePolicy::Abort,
            "Document level errors must never be skipped"
        );
    }
}
