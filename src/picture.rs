//! Owned SVG document tree and its serialization.
//!
//! Layouts build [`Element`] values and hand them back to the caller; nothing
//! here holds global state. [`Picture`] wraps the root `<svg>` element and
//! writes the whole tree with quick-xml, indented by two spaces.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{CalendarError, Result};
use crate::transform::PathData;

const SVG_DOCTYPE: &str = r#"svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd""#;

/// User units per inch; one user unit is one point.
pub const UNITS_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An SVG element with ordered attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self::new("g")
    }

    pub fn defs() -> Self {
        Self::new("defs")
    }

    pub fn path(d: PathData) -> Self {
        Self::new("path").with_attr("d", d)
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new("rect")
            .with_attr("x", x)
            .with_attr("y", y)
            .with_attr("width", width)
            .with_attr("height", height)
    }

    /// `<text>` holding a `<textPath>` that follows the path with id `href_id`.
    pub fn text_on_path(content: &str, href_id: &str) -> Self {
        let text_path = Self::new("textPath")
            .with_attr("xlink:href", format!("#{href_id}"))
            .with_text(content);
        Self::new("text").with_child(text_path)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl ToString) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text content of this element and its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text()),
            }
        }
        out
    }

    /// All descendants named `name`, depth first, in document order.
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in self.children() {
            if child.name == name {
                found.push(child);
            }
            found.extend(child.descendants(name));
        }
        found
    }

    fn write<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            return write_event(writer, Event::Empty(start));
        }

        write_event(writer, Event::Start(start))?;
        for node in &self.children {
            match node {
                Node::Element(e) => e.write(writer)?,
                Node::Text(t) => write_event(writer, Event::Text(BytesText::new(t)))?,
            }
        }
        write_event(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }
}

fn write_event<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| CalendarError::Serialize(e.to_string()))
}

/// A whole SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    root: Element,
}

impl Picture {
    /// A blank page `width_in` by `height_in` inches, with a view box in
    /// points.
    pub fn new(width_in: f64, height_in: f64) -> Self {
        let root = Element::new("svg")
            .with_attr("xmlns", "http://www.w3.org/2000/svg")
            .with_attr("xmlns:xlink", "http://www.w3.org/1999/xlink")
            .with_attr("version", "1.1")
            .with_attr("width", format!("{width_in}in"))
            .with_attr("height", format!("{height_in}in"))
            .with_attr(
                "viewBox",
                format!(
                    "0 0 {} {}",
                    (width_in * UNITS_PER_INCH).round(),
                    (height_in * UNITS_PER_INCH).round()
                ),
            );
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn push(&mut self, element: Element) {
        self.root.push(element);
    }

    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        write_event(
            &mut writer,
            Event::DocType(BytesText::from_escaped(SVG_DOCTYPE)),
        )?;
        self.root.write(&mut writer)?;

        let mut svg = String::from_utf8(writer.into_inner())
            .map_err(|e| CalendarError::Serialize(e.to_string()))?;
        svg.push('\n');
        Ok(svg)
    }
}
