use comrak::nodes::{AstNode, ListType, NodeValue};

use crate::document::{to_text, Element, Node};

/// Convert a comrak AST into a document tree
pub fn convert_node<'a>(node: &'a AstNode<'a>) -> Node {
    let children = || node.children().map(convert_node).collect::<Vec<_>>();
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Document => Node::Root(children()),
        NodeValue::Heading(heading) => Node::element(format!("h{}", heading.level), children()),
        NodeValue::Paragraph => Node::element("p", children()),
        NodeValue::BlockQuote => Node::element("blockquote", children()),
        NodeValue::List(list) => {
            let tag = match list.list_type {
                ListType::Bullet => "ul",
                ListType::Ordered => "ol",
            };
            Node::element(tag, children())
        }
        NodeValue::Item(_) => Node::element("li", children()),
        NodeValue::Emph => Node::element("em", children()),
        NodeValue::Strong => Node::element("strong", children()),
        NodeValue::Strikethrough => Node::element("del", children()),
        NodeValue::Link(link) => Element::new("a")
            .with_property("href", link.url.to_string())
            .with_children(children())
            .into(),
        // Alt text lives in a property so it stays out of heading text
        NodeValue::Image(link) => {
            let alt: String = children().iter().map(to_text).collect();
            Element::new("img")
                .with_property("src", link.url.to_string())
                .with_property("alt", alt)
                .into()
        }
        NodeValue::Code(code) => Node::element("code", vec![Node::text(code.literal.to_string())]),
        NodeValue::CodeBlock(block) => Node::element(
            "pre",
            vec![Node::element("code", vec![Node::text(block.literal.to_string())])],
        ),
        NodeValue::Text(text) => Node::text(text.to_string()),
        NodeValue::SoftBreak => Node::text("\n"),
        NodeValue::LineBreak => Node::element("br", Vec::new()),
        NodeValue::HtmlInline(html) => Node::Raw(html.to_string()),
        NodeValue::HtmlBlock(block) => Node::Raw(block.literal.to_string()),
        NodeValue::ThematicBreak => Node::element("hr", Vec::new()),
        NodeValue::Table(..) => Node::element("table", children()),
        NodeValue::TableRow(..) => Node::element("tr", children()),
        NodeValue::TableCell => Node::element("td", children()),
        _ => Node::element("div", children()),
    }
}
