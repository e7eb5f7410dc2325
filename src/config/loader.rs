use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::TocOptions;
use crate::config::validation;
use crate::utils::error::{BoxResult, TocgenError};

/// Option file names to look for
const CONFIG_FILES: [&str; 4] = ["tocgen.yml", "tocgen.yaml", "tocgen.toml", "tocgen.json"];

/// Find the first option file present in `dir`
pub fn find_options_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Load options from a YAML, TOML or JSON file
pub fn load_options(path: &Path) -> BoxResult<TocOptions> {
    if !path.exists() {
        return Err(TocgenError::Config(format!(
            "Configuration file not found: {}", path.display()
        )).into());
    }

    debug!("Loading options from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|e| TocgenError::Config(format!(
            "Failed to read configuration file {}: {}", path.display(), e
        )))?;

    let format = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yaml".to_string());

    let options = parse_options(&content, &format)
        .map_err(|e| TocgenError::Config(format!("{} ({})", e, path.display())))?;

    debug!("Options loaded: {:?}", options);
    Ok(options)
}

/// Parse options from `content` in the given format (`yml`, `yaml`, `toml` or `json`)
pub fn parse_options(content: &str, format: &str) -> Result<TocOptions, TocgenError> {
    let options: TocOptions = match format {
        "yml" | "yaml" => serde_yaml::from_str(content)
            .map_err(|e| TocgenError::Config(format!("Failed to parse YAML options: {}", e)))?,
        "toml" => toml::from_str(content)
            .map_err(|e| TocgenError::Config(format!("Failed to parse TOML options: {}", e)))?,
        "json" => serde_json::from_str(content)
            .map_err(|e| TocgenError::Config(format!("Failed to parse JSON options: {}", e)))?,
        other => {
            return Err(TocgenError::Config(format!(
                "Unsupported configuration file format: {}", other
            )));
        }
    };

    validation::validate_options(&options);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_yaml() {
        let options = parse_options("name: customToc\nskipDepth: [1, 2]\ndefault: none here\n", "yaml").unwrap();
        assert_eq!(options.name, "customToc");
        assert_eq!(options.skip_depth, vec![1, 2]);
        assert_eq!(options.default, Some(json!("none here")));
    }

    #[test]
    fn test_parse_toml() {
        let options = parse_options("skip_depth = [5, 6]\n\n[default]\nempty = true\n", "toml").unwrap();
        assert_eq!(options.name, "toc");
        assert_eq!(options.skip_depth, vec![5, 6]);
        assert_eq!(options.default, Some(json!({ "empty": true })));
    }

    #[test]
    fn test_parse_json() {
        let options = parse_options(r#"{"default": [], "skipDepth": [3, 9]}"#, "json").unwrap();
        assert_eq!(options.default, Some(json!([])));
        assert_eq!(options.skip_depth, vec![3, 9]);
    }

    #[test]
    fn test_out_of_range_skip_depths_are_accepted() {
        let options = parse_options(r#"{"skipDepth": [1, 300, -1]}"#, "json").unwrap();
        assert_eq!(options.skip_depth, vec![1, 300, -1]);
        assert_eq!(crate::config::inert_skip_depths(&options), vec![300, -1]);

        let options = parse_options("skipDepth: [-1, 300, 4]\n", "yaml").unwrap();
        assert!(options.skips(crate::toc::HeadingDepth::new(4).unwrap()));
        assert!(!options.skips(crate::toc::HeadingDepth::new(1).unwrap()));
    }

    #[test]
    fn test_empty_yaml_mapping_uses_defaults() {
        let options = parse_options("{}", "yml").unwrap();
        assert_eq!(options, TocOptions::default());
    }

    #[test]
    fn test_unsupported_format() {
        let err = parse_options("", "ini").unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file format"));
    }

    #[test]
    fn test_invalid_content() {
        assert!(matches!(
            parse_options("skipDepth: nope", "yaml"),
            Err(TocgenError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_options(Path::new("does/not/exist.yml")).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("tocgen-loader-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tocgen.toml");
        fs::write(&path, "name = \"outline\"\n").unwrap();

        assert_eq!(find_options_file(&dir), Some(path.clone()));
        let options = load_options(&path).unwrap();
        assert_eq!(options.name, "outline");

        fs::remove_dir_all(&dir).unwrap();
    }
}
