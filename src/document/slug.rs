use std::collections::HashMap;

use log::trace;

use crate::document::inspector::{heading_rank, to_text};
use crate::document::node::{Element, Node};

/// Fallback slug for headings whose text slugifies to nothing
const EMPTY_SLUG: &str = "section";

/// Generates unique slugs within one document
#[derive(Debug, Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `text`, suffixed with `-1`, `-2`, ... when already taken
    pub fn slug(&mut self, text: &str) -> String {
        let mut original = slug::slugify(text);
        if original.is_empty() {
            original = EMPTY_SLUG.to_string();
        }

        let mut result = original.clone();
        while self.occurrences.contains_key(&result) {
            let count = self.occurrences.entry(original.clone()).or_insert(0);
            *count += 1;
            result = format!("{}-{}", original, count);
        }

        self.occurrences.insert(result.clone(), 0);
        result
    }

    /// Mark an existing identifier as taken
    pub fn reserve(&mut self, id: &str) {
        self.occurrences.entry(id.to_string()).or_insert(0);
    }
}

/// Give every heading without an `id` a unique slug of its text.
///
/// Existing ids are kept and reserved. Returns the number of ids assigned.
pub fn assign_heading_ids(root: &mut Node) -> usize {
    let mut slugger = Slugger::new();
    let mut assigned = 0;
    visit(root, &mut slugger, &mut assigned);
    assigned
}

fn visit(node: &mut Node, slugger: &mut Slugger, assigned: &mut usize) {
    if let Node::Element(element) = node {
        if heading_rank(element).is_some() {
            assign_id(element, slugger, assigned);
        }
    }

    if let Some(children) = node.children_mut() {
        for child in children {
            visit(child, slugger, assigned);
        }
    }
}

fn assign_id(element: &mut Element, slugger: &mut Slugger, assigned: &mut usize) {
    if let Some(id) = element.id().map(str::to_string) {
        slugger.reserve(&id);
        return;
    }

    let text: String = element.children.iter().map(to_text).collect();
    let id = slugger.slug(&text);
    trace!("Assigned id '{}' to {}", id, element.tag);
    element.set_id(id);
    *assigned += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(tag: &str, text: &str) -> Node {
        Node::element(tag, vec![Node::text(text)])
    }

    fn ids(root: &Node) -> Vec<String> {
        let mut ids = Vec::new();
        collect_ids(root, &mut ids);
        ids
    }

    fn collect_ids(node: &Node, ids: &mut Vec<String>) {
        if let Some(id) = node.as_element().and_then(Element::id) {
            ids.push(id.to_string());
        }
        for child in node.children() {
            collect_ids(child, ids);
        }
    }

    #[test]
    fn test_duplicate_slugs_are_suffixed() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Subheading"), "subheading");
        assert_eq!(slugger.slug("Subheading"), "subheading-1");
        assert_eq!(slugger.slug("Subheading"), "subheading-2");
        assert_eq!(slugger.slug("Section 1"), "section-1");
    }

    #[test]
    fn test_suffix_skips_taken_slugs() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("a-1"), "a-1");
        assert_eq!(slugger.slug("a"), "a");
        assert_eq!(slugger.slug("a"), "a-2");
    }

    #[test]
    fn test_empty_text_falls_back() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("!!!"), "section");
        assert_eq!(slugger.slug(""), "section-1");
    }

    #[test]
    fn test_assign_heading_ids() {
        let mut tree = Node::Root(vec![
            heading("h1", "The Main Heading"),
            Node::element("p", vec![Node::text("Not a heading")]),
            Node::element("blockquote", vec![heading("h4", "QuoteHeading")]),
            heading("h4", "QuoteHeading"),
        ]);

        assert_eq!(assign_heading_ids(&mut tree), 3);
        assert_eq!(ids(&tree), vec!["the-main-heading", "quoteheading", "quoteheading-1"]);
    }

    #[test]
    fn test_existing_ids_are_kept_and_reserved() {
        let mut tree = Node::Root(vec![
            Element::new("h2")
                .with_property("id", "intro")
                .with_child(Node::text("Custom"))
                .into(),
            heading("h2", "Intro"),
        ]);

        assert_eq!(assign_heading_ids(&mut tree), 1);
        assert_eq!(ids(&tree), vec!["intro", "intro-1"]);
    }
}
