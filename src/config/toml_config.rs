use crate::config::bundler::{BundlerConfig, BundlerOptions};
use crate::config::BundleSettings;
use crate::utils::error::{BundleError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_ROOT: &str = ".";

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub bundler: BundlerOptions,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory scanned for emitted declaration files; `out` is relative to it.
    pub root: Option<String>,
    pub remove_fragments: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BundleError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BundleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MODULE_NAME})
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn root(&self) -> &str {
        self.input.root.as_deref().unwrap_or(DEFAULT_ROOT)
    }

    pub fn remove_fragments(&self) -> bool {
        self.input.remove_fragments.unwrap_or(false)
    }

    pub fn into_settings(self) -> Result<BundleSettings> {
        let root = self.root().to_string();
        let remove_fragments = self.remove_fragments();
        let settings = BundleSettings {
            bundler: BundlerConfig::try_from(self.bundler)?,
            root,
            remove_fragments,
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[bundler]
module_name = "Lib"
out = "types/index.d.ts"
excluded_references = ["node", "bad"]

[input]
root = "dist"
remove_fragments = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.bundler.module_name.as_deref(), Some("Lib"));
        assert_eq!(config.root(), "dist");
        assert!(config.remove_fragments());

        let settings = config.into_settings().unwrap();
        assert_eq!(settings.bundler.out(), "types/index.d.ts");
        assert_eq!(settings.bundler.excluded_references().unwrap().len(), 2);
    }

    #[test]
    fn test_input_table_is_optional() {
        let config = TomlConfig::from_toml_str("[bundler]\nmodule_name = \"Lib\"\n").unwrap();
        assert_eq!(config.root(), DEFAULT_ROOT);
        assert!(!config.remove_fragments());

        let settings = config.into_settings().unwrap();
        assert_eq!(settings.bundler.out(), "./build/");
    }

    #[test]
    fn test_unknown_env_var_is_left_as_is() {
        let config = TomlConfig::from_toml_str(
            "[bundler]\nmodule_name = \"${DTS_BUNDLER_SURELY_UNSET}\"\n",
        )
        .unwrap();
        assert_eq!(
            config.bundler.module_name.as_deref(),
            Some("${DTS_BUNDLER_SURELY_UNSET}")
        );
    }

    #[test]
    fn test_missing_module_name_fails_validation() {
        let config = TomlConfig::from_toml_str("[input]\nroot = \"dist\"\n").unwrap();
        assert!(config.into_settings().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[bundler\nmodule_name = 1").unwrap_err();
        assert!(matches!(err, BundleError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[bundler]\nmodule_name = \"FileLib\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bundler.module_name.as_deref(), Some("FileLib"));
    }
}
