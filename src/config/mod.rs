mod defaults;
mod loader;
mod types;
mod validation;

pub use loader::{find_options_file, load_options, parse_options};
pub use types::TocOptions;
pub use validation::inert_skip_depths;
