// crates/opcua-nodeset-xml/src/resolver/value.rs

//! Decoding of `<Value>` elements into `DataValue`s.

use crate::log::my_warn;
use opcua_nodeset::{DataValue, ElementSerializer, VariantDecoder, XmlElement};

/// Decodes a parsed `<Value>` element.
///
/// The element is rendered back to text with `serializer` and read by the
/// decoder that `decoder_factory` builds for that text. This never fails: a
/// value that cannot be rendered or decoded is logged at `warn` level and
/// loads as `DataValue::null()`.
pub fn decode_value<S, F, D>(element: &XmlElement, serializer: &S, decoder_factory: F) -> DataValue
where
    S: ElementSerializer + ?Sized,
    F: Fn(&str) -> D,
    D: VariantDecoder,
{
    let xml = match serializer.serialize(element) {
        Ok(xml) => xml,
        Err(e) => {
            my_warn!(
                "Failed to serialize <{}> element with {} children: {}",
                element.local_name(),
                element.children.len(),
                e
            );
            return DataValue::null();
        }
    };

    let mut decoder = decoder_factory(&xml);
    match decoder.read_variant_value() {
        Ok(value) => DataValue::new(value),
        Err(e) => {
            my_warn!("Failed to decode value {}: {}", xml, e);
            DataValue::null()
        }
    }
}
