use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::defaults;
use crate::toc::HeadingDepth;

/// Options for table of contents generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocOptions {
    /// Export name of the table of contents
    #[serde(default = "defaults::default_name")]
    pub name: String,

    /// Value exported when the document has no qualifying headings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Heading depths left out of both numbering and output.
    /// Entries outside 1..=6 never match a heading.
    #[serde(default, alias = "skipDepth")]
    pub skip_depth: Vec<i64>,
}

impl Default for TocOptions {
    fn default() -> Self {
        TocOptions {
            name: defaults::default_name(),
            default: None,
            skip_depth: Vec::new(),
        }
    }
}

impl TocOptions {
    /// Whether headings at `depth` are excluded
    pub fn skips(&self, depth: HeadingDepth) -> bool {
        self.skip_depth.contains(&i64::from(depth.get()))
    }
}
