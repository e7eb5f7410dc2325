use log::{debug, trace};

use crate::config::TocOptions;
use crate::toc::numbering::NumberingTracker;
use crate::toc::types::{HeadingDepth, TocItem, TocResult};

/// A node of a document tree that can be walked in document order
pub trait DocumentNode: Sized {
    /// Direct children, in document order
    fn children(&self) -> Vec<Self>;
}

/// Heading capabilities the builder needs from the host tree.
///
/// Errors are handed back to the caller of [`build`] untouched.
pub trait HeadingInspector<N> {
    type Error;

    /// Heading depth of `node`, or `None` when it is not a heading
    fn classify(&self, node: &N) -> Result<Option<HeadingDepth>, Self::Error>;

    /// Flattened plain text of a heading
    fn extract_text(&self, node: &N) -> Result<String, Self::Error>;

    /// Identifier already assigned to `node`, if any
    fn read_id(&self, node: &N) -> Result<Option<String>, Self::Error>;
}

/// Walks a document once and records its headings
#[derive(Debug, Clone, Copy)]
pub struct TocBuilder<'o> {
    options: &'o TocOptions,
}

impl<'o> TocBuilder<'o> {
    pub fn new(options: &'o TocOptions) -> Self {
        TocBuilder { options }
    }

    /// Collect every qualifying heading in pre-order document order.
    ///
    /// Each call owns a fresh tracker, so repeated calls on the same tree
    /// give identical results.
    pub fn collect<N, I>(&self, root: N, inspector: &I) -> Result<Vec<TocItem>, I::Error>
    where
        N: DocumentNode,
        I: HeadingInspector<N>,
    {
        let mut tracker = NumberingTracker::new();
        let mut items = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if let Some(depth) = inspector.classify(&node)? {
                if self.options.skips(depth) {
                    trace!("Skipping heading at depth {}", depth);
                } else {
                    let numbering = tracker.advance(depth);
                    let value = inspector.extract_text(&node)?;
                    let id = inspector.read_id(&node)?;
                    trace!("Heading h{} {:?} numbered {:?}", depth, value, numbering);
                    items.push(TocItem::new(depth, value, numbering, id));
                }
            }

            // Headings do not prune their subtree
            let mut children = node.children();
            children.reverse();
            stack.extend(children);
        }

        Ok(items)
    }

    /// Collect headings, falling back to the configured default when none qualify
    pub fn build<N, I>(&self, root: N, inspector: &I) -> Result<TocResult, I::Error>
    where
        N: DocumentNode,
        I: HeadingInspector<N>,
    {
        let items = self.collect(root, inspector)?;
        debug!("Collected {} headings for '{}'", items.len(), self.options.name);
        Ok(TocResult::from_items(items, self.options.default.clone()))
    }
}

/// Build the table of contents for `root` with `options`
pub fn build<N, I>(root: N, inspector: &I, options: &TocOptions) -> Result<TocResult, I::Error>
where
    N: DocumentNode,
    I: HeadingInspector<N>,
{
    TocBuilder::new(options).build(root, inspector)
}
