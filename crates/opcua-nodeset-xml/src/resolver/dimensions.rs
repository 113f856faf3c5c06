// crates/opcua-nodeset-xml/src/resolver/dimensions.rs

use crate::error::NodeSetError;

/// Parses an `ArrayDimensions` list into one bound per rank.
///
/// Only the first entry is read; it holds the comma separated bounds (`"2,3,4"`).
/// Further entries are ignored. An empty list means the dimensions are unspecified.
pub fn parse_array_dimensions<S: AsRef<str>>(raw: &[S]) -> Result<Vec<u32>, NodeSetError> {
    let Some(first) = raw.first() else {
        return Ok(Vec::new());
    };
    let first = first.as_ref();

    first
        .split(',')
        .map(|token| {
            token
                .trim_matches(|c: char| c.is_ascii_whitespace())
                .parse::<u32>()
                .map_err(|_| NodeSetError::DimensionFormat {
                    raw: first.to_string(),
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Splits the `ArrayDimensions` attribute into its list entries.
///
/// The attribute is an `xs:list`, so entries are separated by whitespace.
pub(crate) fn dimension_entries(attribute: &str) -> Vec<&str> {
    attribute.split_ascii_whitespace().collect()
}
