// crates/opcua-nodeset/src/xml/element.rs

use crate::error::{DecodingError, SerializeError};
use core::fmt;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::de::{self, Deserialize, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};

/// Deepest element level that is read, rendered or decoded. The element a
/// reader starts at is level 0.
pub const MAX_DEPTH: usize = 256;

/// A generic, already-parsed XML element.
///
/// Element names are stored without namespace prefixes, which is what the
/// `quick-xml` deserializer reports for child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: Option<String>,
    /// Set when the children of this element were skipped because they sit
    /// below `MAX_DEPTH`. A truncated element cannot be rendered.
    pub truncated: bool,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// The element name with any `prefix:` removed.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| local_part(k) == name)
            .map(|(_, v)| v.as_str())
    }

    /// First child whose local name matches.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.local_name() == name)
    }

    /// Text content, or the empty string for elements without text.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Parses a standalone fragment. The root element becomes the returned value.
    pub fn parse(xml: &str) -> Result<Self, DecodingError> {
        let name = root_name(xml)?;
        let element: XmlElement = quick_xml::de::from_str(xml)?;
        if element.is_truncated() {
            return Err(DecodingError::NestingTooDeep(MAX_DEPTH));
        }
        Ok(element.named(name))
    }

    /// Whether this element or any descendant lost its children while being read.
    pub fn is_truncated(&self) -> bool {
        self.truncated || self.children.iter().any(XmlElement::is_truncated)
    }

    /// Renders the element and its descendants as compact XML text.
    pub fn to_xml_string(&self) -> Result<String, SerializeError> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer, 0)?;
        String::from_utf8(writer.into_inner()).map_err(|e| SerializeError::Encoding(e.to_string()))
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>, depth: usize) -> Result<(), SerializeError> {
        if self.name.is_empty() {
            return Err(SerializeError::MissingName);
        }
        if self.truncated || depth > MAX_DEPTH {
            return Err(SerializeError::NestingTooDeep(MAX_DEPTH));
        }

        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        let text = self.text.as_deref().filter(|t| !t.is_empty());
        if self.children.is_empty() && text.is_none() {
            return write_event(writer, Event::Empty(start));
        }

        write_event(writer, Event::Start(start))?;
        if let Some(text) = text {
            write_event(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_to(writer, depth + 1)?;
        }
        write_event(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SerializeError> {
    writer
        .write_event(event)
        .map_err(|e| SerializeError::XmlWriting(e.to_string()))
}

fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

/// Finds the local name of the first element in the document.
fn root_name(xml: &str) -> Result<String, DecodingError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(DecodingError::XmlReading(
                    "document has no root element".to_string(),
                ));
            }
            Err(e) => return Err(DecodingError::XmlReading(e.to_string())),
            _ => {}
        }
    }
}

// The serde path sees an element as a map: `@name` keys are attributes,
// `$text` / `$value` keys are character data and every other key is a child.
impl<'de> Deserialize<'de> for XmlElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ElementSeed { depth: 0 }.deserialize(deserializer)
    }
}

#[derive(Clone, Copy)]
struct ElementSeed {
    depth: usize,
}

impl<'de> DeserializeSeed<'de> for ElementSeed {
    type Value = XmlElement;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ElementVisitor { depth: self.depth })
    }
}

struct ElementVisitor {
    depth: usize,
}

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = XmlElement;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an XML element")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut element = XmlElement::default();
        while let Some(key) = map.next_key::<String>()? {
            if let Some(attribute) = key.strip_prefix('@') {
                let value: String = map.next_value()?;
                element.attributes.push((attribute.to_string(), value));
            } else if key == "$text" || key == "$value" {
                let text: String = map.next_value()?;
                match element.text.as_mut() {
                    Some(existing) => existing.push_str(&text),
                    None => element.text = Some(text),
                }
            } else if self.depth >= MAX_DEPTH {
                // quick-xml skips an ignored subtree without recursing.
                map.next_value::<IgnoredAny>()?;
                element.truncated = true;
            } else {
                let seed = ElementSeed {
                    depth: self.depth + 1,
                };
                let child = map.next_value_seed(seed)?;
                element.children.push(child.named(key));
            }
        }
        Ok(element)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(XmlElement::default().with_text(value))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(XmlElement::default().with_text(value))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(XmlElement::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_parse_nested_fragment() {
        let xml = r#"<Value><ListOfInt32><Int32>1</Int32><Int32>2</Int32></ListOfInt32></Value>"#;
        let element = XmlElement::parse(xml).unwrap();

        assert_eq!(element.name, "Value");
        assert_eq!(element.children.len(), 1);
        let list = &element.children[0];
        assert_eq!(list.name, "ListOfInt32");
        assert_eq!(list.children.len(), 2);
        assert_eq!(list.children[1].text(), "2");
    }

    #[test]
    fn test_parse_keeps_attributes_and_strips_prefixes() {
        let xml = r#"<uax:Value xmlns:uax="http://opcfoundation.org/UA/2008/02/Types.xsd"><uax:String Locale="en">abc</uax:String></uax:Value>"#;
        let element = XmlElement::parse(xml).unwrap();

        assert_eq!(element.local_name(), "Value");
        let child = element.child("String").expect("child should be found by local name");
        assert_eq!(child.text(), "abc");
        assert_eq!(child.attribute("Locale"), Some("en"));
    }

    #[test]
    fn test_parse_rejects_empty_document() {
        assert!(matches!(
            XmlElement::parse("   "),
            Err(DecodingError::XmlReading(_))
        ));
    }

    #[test]
    fn test_render_escapes_text_and_attributes() {
        let element = XmlElement::new("Value").with_child(
            XmlElement::new("String")
                .with_attribute("Note", "a\"b")
                .with_text("1 < 2 & 3"),
        );
        let xml = element.to_xml_string().unwrap();
        assert!(xml.starts_with("<Value><String Note="));
        assert!(xml.contains("1 &lt; 2 &amp; 3"));

        // What we render we can read back.
        let parsed = XmlElement::parse(&xml).unwrap();
        assert_eq!(parsed.child("String").map(|c| c.text()), Some("1 < 2 & 3"));
    }

    #[test]
    fn test_render_empty_element() {
        let element = XmlElement::new("Value").with_child(XmlElement::new("String"));
        assert_eq!(element.to_xml_string().unwrap(), "<Value><String/></Value>");
    }

    #[test]
    fn test_render_without_name_fails() {
        let element = XmlElement::new("Value").with_child(XmlElement::default().with_text("1"));
        assert_eq!(element.to_xml_string(), Err(SerializeError::MissingName));
    }

    fn nested(depth: usize) -> String {
        format!("<Value>{}{}</Value>", "<a>".repeat(depth), "</a>".repeat(depth))
    }

    #[test]
    fn test_parse_rejects_deep_nesting() {
        assert!(XmlElement::parse(&nested(MAX_DEPTH)).is_ok());
        assert!(matches!(
            XmlElement::parse(&nested(10_000)),
            Err(DecodingError::NestingTooDeep(MAX_DEPTH))
        ));
    }

    #[test]
    fn test_deep_field_is_truncated_not_fatal() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(rename = "Value")]
            value: XmlElement,
        }

        let xml = format!("<Holder>{}</Holder>", nested(10_000));
        let holder: Holder = quick_xml::de::from_str(&xml).unwrap();
        assert!(holder.value.is_truncated());
        assert_eq!(
            holder.value.to_xml_string(),
            Err(SerializeError::NestingTooDeep(MAX_DEPTH))
        );
    }

    #[test]
    fn test_render_rejects_deep_tree() {
        let mut element = XmlElement::new("a");
        for _ in 0..MAX_DEPTH + 1 {
            element = XmlElement::new("a").with_child(element);
        }
        assert_eq!(
            element.to_xml_string(),
            Err(SerializeError::NestingTooDeep(MAX_DEPTH))
        );
    }

    #[test]
    fn test_deserialize_as_struct_field() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(rename = "@Name")]
            name: String,
            #[serde(rename = "Value")]
            value: XmlElement,
        }

        let xml = r#"<Holder Name="x"><Value><Double>1.5</Double></Value></Holder>"#;
        let holder: Holder = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(holder.name, "x");
        assert_eq!(holder.value.child("Double").map(|c| c.text()), Some("1.5"));
    }
}
