use log::warn;

use crate::config::TocOptions;
use crate::toc::HeadingDepth;

/// Skip depths that can never match a heading
pub fn inert_skip_depths(options: &TocOptions) -> Vec<i64> {
    options
        .skip_depth
        .iter()
        .copied()
        .filter(|&depth| u8::try_from(depth).ok().and_then(HeadingDepth::new).is_none())
        .collect()
}

/// Warn about configuration that is accepted but has no effect
pub fn validate_options(options: &TocOptions) {
    for depth in inert_skip_depths(options) {
        warn!(
            "skip_depth entry {} is outside {}..={} and will be ignored",
            depth,
            HeadingDepth::MIN,
            HeadingDepth::MAX
        );
    }

    if options.name.is_empty() {
        warn!("Export name is empty, defining the table of contents will fail");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_skip_depths() {
        let options = TocOptions {
            skip_depth: vec![-1, 0, 1, 6, 7, 200, 300],
            ..TocOptions::default()
        };
        assert_eq!(inert_skip_depths(&options), vec![-1, 0, 7, 200, 300]);
        assert!(inert_skip_depths(&TocOptions::default()).is_empty());
    }
}
