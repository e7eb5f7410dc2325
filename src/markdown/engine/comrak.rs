use comrak::nodes::AstNode;
use comrak::{Arena, Options};

/// Create default ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;

    options
}

/// Parse markdown into a comrak AST allocated in `arena`
pub fn parse_markdown<'a>(
    arena: &'a Arena<AstNode<'a>>,
    content: &str,
    options: &Options,
) -> &'a AstNode<'a> {
    comrak::parse_document(arena, content, options)
}
