//! Numbered table of contents for parsed documents.
//!
//! The core walks a document tree once, numbers each heading with a
//! six-level outline counter and collects the result as [`TocItem`]s. The
//! tree and its heading semantics are supplied through [`DocumentNode`] and
//! [`HeadingInspector`]; [`document`] and [`markdown`] provide a ready-made
//! HTML-like tree built from Markdown.

pub mod config;
pub mod document;
pub mod export;
pub mod markdown;
pub mod toc;
pub mod utils;

pub use config::TocOptions;
pub use export::ModuleExports;
pub use toc::{
    build, export_toc, DocumentNode, HeadingDepth, HeadingInspector, NumberingTracker, TocBuilder,
    TocItem, TocResult,
};
pub use utils::error::{BoxResult, TocgenError};
