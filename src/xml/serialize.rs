// XML serializer - renders an element tree to text with quick-xml

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::element::{Element, Node};
use crate::error::{Error, Result};

/// Serializer settings
#[derive(Debug, Clone, PartialEq)]
pub struct XmlOptions {
    /// Indentation character and count per level; `None` writes everything on one line
    pub indent: Option<(u8, usize)>,
    pub declaration: Option<XmlDeclaration>,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: Some((b' ', 4)),
            declaration: Some(XmlDeclaration::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XmlDeclaration {
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Default for XmlDeclaration {
    fn default() -> Self {
        Self {
            encoding: Some("UTF-8".to_string()),
            standalone: None,
        }
    }
}

/// Serialize into an in-memory string
pub fn to_string(root: &Element, options: &XmlOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_to(root, options, &mut buffer)?;
    String::from_utf8(buffer).map_err(xml_error)
}

/// Serialize directly into a sink
pub fn write_to<W: Write>(root: &Element, options: &XmlOptions, sink: W) -> Result<()> {
    let mut writer = match options.indent {
        Some((ch, size)) => Writer::new_with_indent(sink, ch, size),
        None => Writer::new(sink),
    };

    if let Some(decl) = &options.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new(
                "1.0",
                decl.encoding.as_deref(),
                decl.standalone.as_deref(),
            )))
            .map_err(xml_error)?;
    }

    write_element(&mut writer, root)?;
    writer.into_inner().flush()?;
    Ok(())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let rendered: Vec<(&str, String)> = element
        .attributes
        .iter()
        .map(|(key, value)| (key.as_str(), value.to_string()))
        .collect();

    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &rendered {
        start.push_attribute((*key, value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(xml_error)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(xml_error)?;
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(writer, e)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_error)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(xml_error)?;

    Ok(())
}

fn xml_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Xml(err.to_string())
}
