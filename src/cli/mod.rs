pub mod logging;
pub mod types;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info};
use serde_json::Value;

use tocgen::config::{self, TocOptions};
use tocgen::document::{assign_heading_ids, ElementInspector};
use tocgen::markdown::{create_comrak_options, markdown_to_tree};
use tocgen::utils::error::{BoxResult, TocgenError};
use tocgen::{export_toc, ModuleExports};

use types::{Cli, OutputFormat};

/// Run the command-line interface
pub fn run() -> BoxResult<()> {
    let cli = Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    let options = resolve_options(&cli)?;
    let source = read_source(cli.file.as_deref())?;

    let mut tree = markdown_to_tree(&source, &create_comrak_options());
    if cli.slug {
        let assigned = assign_heading_ids(&mut tree);
        debug!("Assigned {} heading ids", assigned);
    }

    let mut exports = ModuleExports::new();
    export_toc(&tree, &ElementInspector, &options, &mut exports)?;
    info!("Exported '{}'", options.name);

    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&exports.to_json())?,
        OutputFormat::Yaml => serde_yaml::to_string(&exports.to_json())?,
    };
    println!("{}", rendered);

    Ok(())
}

/// Options from the config file, overridden by command line flags
fn resolve_options(cli: &Cli) -> BoxResult<TocOptions> {
    let config_path = cli
        .config
        .clone()
        .or_else(|| config::find_options_file(PathBuf::from(".")));

    let mut options = match config_path {
        Some(path) => config::load_options(&path)?,
        None => {
            debug!("No options file found, using defaults");
            TocOptions::default()
        }
    };

    if let Some(name) = &cli.name {
        options.name = name.clone();
    }
    if let Some(default) = &cli.default {
        options.default = Some(parse_default(default));
    }
    if let Some(skip_depth) = &cli.skip_depth {
        options.skip_depth = skip_depth.clone();
    }

    Ok(options)
}

/// JSON when it parses, otherwise the raw string
fn parse_default(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn read_source(file: Option<&Path>) -> BoxResult<String> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            TocgenError::Markdown(format!("Failed to read {}: {}", path.display(), e)).into()
        }),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
