pub mod convert;
pub mod engine;

use comrak::{Arena, Options};
use log::debug;

use crate::document::Node;

pub use convert::convert_node;
pub use engine::{create_comrak_options, parse_markdown};

/// Parse markdown and convert it into a document tree
pub fn markdown_to_tree(content: &str, options: &Options) -> Node {
    let arena = Arena::new();
    let root = parse_markdown(&arena, content, options);
    let tree = convert_node(root);
    debug!("Converted {} top-level markdown blocks", tree.children().len());
    tree
}
