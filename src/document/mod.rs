mod inspector;
mod node;
mod slug;

pub use inspector::{heading_rank, to_text, ElementInspector};
pub use node::{Element, Node};
pub use self::slug::{assign_heading_ids, Slugger};
