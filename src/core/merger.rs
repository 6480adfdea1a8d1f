use crate::config::bundler::BundlerConfig;
use crate::core::normalizer::TextualNormalizer;
use crate::core::{FragmentSet, LineNormalizer, MergedDeclaration};

/// Folds a set of declaration fragments into one `declare module` block.
///
/// Merging is pure: fragments are only read, and the same fragments with
/// the same configuration always produce the same text.
#[derive(Debug, Clone)]
pub struct DeclarationMerger<N: LineNormalizer = TextualNormalizer> {
    module_name: String,
    normalizer: N,
}

impl DeclarationMerger<TextualNormalizer> {
    pub fn new(config: &BundlerConfig) -> Self {
        Self::with_normalizer(config, TextualNormalizer::from_config(config))
    }
}

impl<N: LineNormalizer> DeclarationMerger<N> {
    pub fn with_normalizer(config: &BundlerConfig, normalizer: N) -> Self {
        Self {
            module_name: config.module_name().to_string(),
            normalizer,
        }
    }

    pub fn merge(&self, fragments: &FragmentSet) -> MergedDeclaration {
        let mut body = String::new();
        let mut retained_lines = 0;

        for fragment in fragments.iter() {
            let lines: Vec<String> = fragment
                .text
                .split('\n')
                .filter_map(|line| self.normalizer.normalize_line(line))
                .collect();

            retained_lines += lines.len();
            body.push_str(&lines.join("\n"));
            body.push_str("\n\n");
        }

        MergedDeclaration {
            text: format!("declare module {}\n{{\n{}}}", self.module_name, body),
            fragment_names: fragments.names(),
            retained_lines,
        }
    }
}

/// Merges `fragments` under `config` with the default textual normalizer.
pub fn merge(fragments: &FragmentSet, config: &BundlerConfig) -> String {
    DeclarationMerger::new(config).merge(fragments).text
}
