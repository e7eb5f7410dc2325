use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::toc::numbering::Numbering;
use crate::utils::error::TocgenError;

/// Depth of a heading, `1` for `<h1>` through `6` for `<h6>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingDepth(u8);

impl HeadingDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Returns `None` when `depth` is outside `1..=6`
    pub fn new(depth: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&depth) {
            Some(HeadingDepth(depth))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot of this depth in a numbering vector
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// All six depths, outermost first
    pub fn all() -> impl Iterator<Item = HeadingDepth> {
        (Self::MIN..=Self::MAX).map(HeadingDepth)
    }
}

impl TryFrom<u8> for HeadingDepth {
    type Error = TocgenError;

    fn try_from(depth: u8) -> Result<Self, Self::Error> {
        HeadingDepth::new(depth).ok_or(TocgenError::InvalidDepth(depth))
    }
}

impl From<HeadingDepth> for u8 {
    fn from(depth: HeadingDepth) -> Self {
        depth.0
    }
}

impl fmt::Display for HeadingDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One heading in the table of contents.
///
/// `href` is derived from `id` on construction, so the two are always
/// present together and `href == "#" + id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocItem {
    depth: HeadingDepth,
    value: String,
    numbering: Numbering,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Map<String, Value>>,
}

impl TocItem {
    pub fn new(depth: HeadingDepth, value: String, numbering: Numbering, id: Option<String>) -> Self {
        let href = id.as_ref().map(|id| format!("#{}", id));
        TocItem {
            depth,
            value,
            numbering,
            id,
            href,
            data: None,
        }
    }

    /// Attach free-form extension data
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn depth(&self) -> HeadingDepth {
        self.depth
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    /// Dotted outline label such as `1.2.3`, with leading and trailing
    /// zero slots dropped
    pub fn label(&self) -> String {
        let first = self.numbering.iter().position(|&n| n != 0);
        let last = self.numbering.iter().rposition(|&n| n != 0);
        match (first, last) {
            (Some(first), Some(last)) => self.numbering[first..=last]
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join("."),
            _ => String::new(),
        }
    }
}

/// Outcome of a TOC build: the recorded headings, or the configured default
/// when none qualified
#[derive(Debug, Clone, PartialEq)]
pub enum TocResult {
    Items(Vec<TocItem>),
    Default(Option<Value>),
}

impl TocResult {
    /// Empty item lists collapse into the default
    pub fn from_items(items: Vec<TocItem>, default: Option<Value>) -> Self {
        if items.is_empty() {
            TocResult::Default(default)
        } else {
            TocResult::Items(items)
        }
    }

    pub fn items(&self) -> Option<&[TocItem]> {
        match self {
            TocResult::Items(items) => Some(items),
            TocResult::Default(_) => None,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, TocResult::Default(_))
    }

    /// JSON form of the result; `None` means the value is undefined
    pub fn into_value(self) -> Result<Option<Value>, TocgenError> {
        match self {
            TocResult::Items(items) => Ok(Some(serde_json::to_value(items)?)),
            TocResult::Default(default) => Ok(default),
        }
    }
}
