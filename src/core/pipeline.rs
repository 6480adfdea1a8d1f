use crate::core::merger::DeclarationMerger;
use crate::core::{ConfigProvider, FragmentSet, MergedDeclaration, Pipeline, Storage};
use crate::utils::error::{BundleError, Result};

/// Asset names containing this are treated as emitted declarations.
pub const DECLARATION_MARKER: &str = ".d.ts";
/// File name used when `out` names a directory.
pub const DEFAULT_BUNDLE_FILE: &str = "index.d.ts";

/// Strips leading `./` segments and unifies separators so asset names
/// from the configuration compare equal to names listed from storage.
pub fn normalize_asset_name(name: &str) -> String {
    let mut normalized = name.replace('\\', "/");
    while let Some(rest) = normalized.strip_prefix("./") {
        normalized = rest.to_string();
    }
    normalized
}

/// Maps the configured `out` onto a storage asset. A directory-like `out`
/// (trailing separator, as in the default `./build/`, or a bare `.`)
/// gets `index.d.ts`.
pub fn resolve_output_asset(out: &str) -> String {
    let mut normalized = normalize_asset_name(out);
    if normalized == "." || normalized.ends_with("/.") {
        normalized.pop();
    }
    if normalized.is_empty() || normalized.ends_with('/') {
        format!("{}{}", normalized, DEFAULT_BUNDLE_FILE)
    } else {
        normalized
    }
}

pub struct BundlePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    merger: DeclarationMerger,
}

impl<S: Storage, C: ConfigProvider> BundlePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let merger = DeclarationMerger::new(config.bundler());
        Self {
            storage,
            config,
            merger,
        }
    }

    pub fn output_asset(&self) -> String {
        resolve_output_asset(self.config.bundler().out())
    }

    /// Declaration assets the next run would merge, in merge order.
    pub async fn plan(&self) -> Result<Vec<String>> {
        let output_asset = self.output_asset();
        let files = self.storage.list_files().await?;

        let mut declarations: Vec<String> = files
            .into_iter()
            .filter(|name| name.contains(DECLARATION_MARKER))
            .filter(|name| normalize_asset_name(name) != output_asset)
            .collect();
        declarations.sort();

        Ok(declarations)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BundlePipeline<S, C> {
    async fn extract(&self) -> Result<FragmentSet> {
        let mut fragments = FragmentSet::new();

        for name in self.plan().await? {
            tracing::debug!("Reading declaration fragment: {}", name);
            let data = self.storage.read_file(&name).await?;
            let text = String::from_utf8(data).map_err(|e| BundleError::ProcessingError {
                message: format!("{} is not valid UTF-8: {}", name, e),
            })?;
            fragments.insert(name, text);
        }

        if fragments.is_empty() {
            tracing::warn!("No declaration fragments found, bundle will be an empty module");
        }

        Ok(fragments)
    }

    async fn transform(&self, fragments: FragmentSet) -> Result<MergedDeclaration> {
        let merged = self.merger.merge(&fragments);
        tracing::debug!(
            "Merged {} fragments into module {} ({} lines kept)",
            merged.fragment_names.len(),
            self.config.bundler().module_name(),
            merged.retained_lines
        );
        Ok(merged)
    }

    async fn load(&self, merged: MergedDeclaration) -> Result<String> {
        let output_asset = self.output_asset();

        tracing::debug!(
            "Writing bundle ({} bytes) to {}",
            merged.text.len(),
            output_asset
        );
        self.storage
            .write_file(&output_asset, merged.text.as_bytes())
            .await?;

        if self.config.remove_fragments() {
            for name in &merged.fragment_names {
                tracing::debug!("Removing merged fragment: {}", name);
                self.storage.remove_file(name).await?;
            }
        }

        Ok(output_asset)
    }
}
