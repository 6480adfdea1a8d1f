use crate::core::ConfigProvider;
use crate::utils::error::{BundleError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_required_field};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUT: &str = "./build/";

/// Raw options as they arrive from a config file or the command line.
/// Nothing here is trusted until it goes through `BundlerConfig::try_from`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundlerOptions {
    pub module_name: Option<String>,
    pub out: Option<String>,
    pub excluded_references: Option<Vec<String>>,
}

/// Validated, read-only bundler configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlerConfig {
    module_name: String,
    out: String,
    excluded_references: Option<Vec<String>>,
}

impl BundlerConfig {
    pub fn new(module_name: impl Into<String>) -> Result<Self> {
        let module_name = module_name.into();
        validate_non_empty_string("module_name", &module_name)?;
        Ok(Self {
            module_name,
            out: DEFAULT_OUT.to_string(),
            excluded_references: None,
        })
    }

    pub fn with_out(mut self, out: impl Into<String>) -> Result<Self> {
        let out = out.into();
        validate_path("out", &out)?;
        self.out = out;
        Ok(self)
    }

    pub fn with_excluded_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_references = Some(references.into_iter().map(Into::into).collect());
        self
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn out(&self) -> &str {
        &self.out
    }

    pub fn excluded_references(&self) -> Option<&[String]> {
        self.excluded_references.as_deref()
    }
}

impl TryFrom<BundlerOptions> for BundlerConfig {
    type Error = BundleError;

    fn try_from(options: BundlerOptions) -> Result<Self> {
        let module_name = validate_required_field("module_name", &options.module_name)?;
        let mut config = BundlerConfig::new(module_name.as_str())?;

        if let Some(out) = options.out {
            config = config.with_out(out)?;
        }
        if let Some(references) = options.excluded_references {
            config = config.with_excluded_references(references);
        }

        Ok(config)
    }
}

impl ConfigProvider for BundlerConfig {
    fn bundler(&self) -> &BundlerConfig {
        self
    }

    fn remove_fragments(&self) -> bool {
        false
    }
}
