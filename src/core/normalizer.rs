use crate::config::bundler::BundlerConfig;
use crate::core::LineNormalizer;
use regex::Regex;
use std::sync::LazyLock;

static IMPORT_REQUIRE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"import ([a-z0-9A-Z_-]+) = require\(").expect("import pattern is valid")
});

const EXPORT_ASSIGNMENT: &str = "export =";
const REFERENCE_MARKER: &str = "<reference";
const DECLARE_MODIFIER: &str = "declare ";

/// Substring and regex based normalizer for emitted `.d.ts` lines.
///
/// A line is dropped when it is empty, is an `export =` assignment, is a
/// legacy `import x = require(...)` alias, or is a reference directive
/// naming one of the excluded references. Every other line loses its first
/// `declare ` and gains one tab of indentation.
#[derive(Debug, Clone, Default)]
pub struct TextualNormalizer {
    excluded_references: Option<Vec<String>>,
}

impl TextualNormalizer {
    pub fn new(excluded_references: Option<Vec<String>>) -> Self {
        Self {
            excluded_references,
        }
    }

    pub fn from_config(config: &BundlerConfig) -> Self {
        Self::new(config.excluded_references().map(<[String]>::to_vec))
    }

    fn is_excluded_reference(&self, line: &str) -> bool {
        match &self.excluded_references {
            Some(references) if line.contains(REFERENCE_MARKER) => references
                .iter()
                .any(|reference| line.contains(reference.as_str())),
            _ => false,
        }
    }
}

impl LineNormalizer for TextualNormalizer {
    fn normalize_line(&self, line: &str) -> Option<String> {
        if line.is_empty()
            || line.contains(EXPORT_ASSIGNMENT)
            || IMPORT_REQUIRE.is_match(line)
            || self.is_excluded_reference(line)
        {
            return None;
        }

        // Only the first occurrence goes.
        Some(format!("\t{}", line.replacen(DECLARE_MODIFIER, "", 1)))
    }
}
