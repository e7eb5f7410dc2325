mod builder;
mod numbering;
mod types;

pub use builder::{build, DocumentNode, HeadingInspector, TocBuilder};
pub use numbering::{Numbering, NumberingTracker, LEVELS};
pub use types::{HeadingDepth, TocItem, TocResult};

use std::error::Error;

use log::debug;

use crate::config::TocOptions;
use crate::export::ModuleExports;
use crate::utils::error::BoxResult;

/// Build the table of contents for `root` and define it in `exports`
/// under `options.name`
pub fn export_toc<N, I>(
    root: N,
    inspector: &I,
    options: &TocOptions,
    exports: &mut ModuleExports,
) -> BoxResult<()>
where
    N: DocumentNode,
    I: HeadingInspector<N>,
    I::Error: Error + 'static,
{
    let result = build(root, inspector, options)?;
    if result.is_default() {
        debug!("No headings found, exporting default for '{}'", options.name);
    }
    let value = result.into_value()?;
    exports.define_export(&options.name, value)?;
    Ok(())
}
