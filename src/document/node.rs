use std::collections::BTreeMap;

use crate::toc::DocumentNode;

/// Node of an HTML-like document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root(Vec<Node>),
    Element(Element),
    Text(String),
    /// Verbatim markup, carries no text content
    Raw(String),
}

/// Element with a tag name, string properties and children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub properties: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Element::default()
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// The `id` property, ignoring empty values
    pub fn id(&self) -> Option<&str> {
        self.properties
            .get("id")
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.properties.insert("id".to_string(), id.into());
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element::new(tag).with_children(children))
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(children) => children,
            Node::Element(element) => &element.children,
            Node::Text(_) | Node::Raw(_) => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(children) => Some(children),
            Node::Element(element) => Some(&mut element.children),
            Node::Text(_) | Node::Raw(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl<'a> DocumentNode for &'a Node {
    fn children(&self) -> Vec<Self> {
        Node::children(*self).iter().collect()
    }
}
