use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "tocgen")]
#[command(about = "Build a numbered table of contents from a Markdown document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Markdown file to read (defaults to stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Options file (defaults to ./tocgen.{yml,yaml,toml,json} when present)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Export name of the table of contents
    #[arg(short, long)]
    pub name: Option<String>,

    /// Value exported when there are no headings, as JSON or a plain string
    #[arg(long, value_name = "VALUE")]
    pub default: Option<String>,

    /// Heading depths to leave out, e.g. 1,5,6
    #[arg(short, long, value_name = "DEPTHS", value_delimiter = ',', allow_negative_numbers = true)]
    pub skip_depth: Option<Vec<i64>>,

    /// Assign slug ids to headings before building the table of contents
    #[arg(long, default_value_t = false)]
    pub slug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Output formats for the exported values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
