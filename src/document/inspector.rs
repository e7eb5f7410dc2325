use std::convert::Infallible;

use crate::document::node::{Element, Node};
use crate::toc::{HeadingDepth, HeadingInspector};

/// Reads headings out of a [`Node`] tree: `h1`..`h6` elements, their text
/// content and their `id` property
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementInspector;

impl<'a> HeadingInspector<&'a Node> for ElementInspector {
    type Error = Infallible;

    fn classify(&self, node: &&'a Node) -> Result<Option<HeadingDepth>, Infallible> {
        Ok(node.as_element().and_then(heading_rank))
    }

    fn extract_text(&self, node: &&'a Node) -> Result<String, Infallible> {
        Ok(to_text(node))
    }

    fn read_id(&self, node: &&'a Node) -> Result<Option<String>, Infallible> {
        Ok(node.as_element().and_then(Element::id).map(str::to_string))
    }
}

/// Depth of a heading element, `None` for any other tag
pub fn heading_rank(element: &Element) -> Option<HeadingDepth> {
    match element.tag.as_bytes() {
        [h, level] if h.eq_ignore_ascii_case(&b'h') && level.is_ascii_digit() => {
            HeadingDepth::new(level - b'0')
        }
        _ => None,
    }
}

/// Concatenated text of every descendant text node
pub fn to_text(node: &Node) -> String {
    let mut text = String::new();
    push_text(node, &mut text);
    text
}

fn push_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Raw(_) => {}
        Node::Root(children) => children.iter().for_each(|child| push_text(child, out)),
        Node::Element(element) => element.children.iter().for_each(|child| push_text(child, out)),
    }
}
