/// Default export name for the table of contents
pub fn default_name() -> String {
    "toc".to_string()
}
