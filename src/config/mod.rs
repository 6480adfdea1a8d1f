pub mod bundler;
pub mod cli;
pub mod toml_config;

use crate::config::bundler::BundlerConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use clap::Parser;

/// Everything a bundle run needs, resolved from file and flags.
#[derive(Debug, Clone)]
pub struct BundleSettings {
    pub bundler: BundlerConfig,
    pub root: String,
    pub remove_fragments: bool,
}

impl ConfigProvider for BundleSettings {
    fn bundler(&self) -> &BundlerConfig {
        &self.bundler
    }

    fn remove_fragments(&self) -> bool {
        self.remove_fragments
    }
}

impl Validate for BundleSettings {
    fn validate(&self) -> Result<()> {
        validate_path("input.root", &self.root)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "dts-bundler")]
#[command(about = "Bundle emitted TypeScript declaration files into one ambient module")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Ambient module name used in the bundle header
    #[arg(short, long)]
    pub module_name: Option<String>,

    /// Output asset, relative to the root
    #[arg(short, long)]
    pub out: Option<String>,

    /// Reference directives containing any of these substrings are dropped
    #[arg(long, value_delimiter = ',')]
    pub excluded_references: Vec<String>,

    /// Directory scanned for emitted declaration files
    #[arg(short, long)]
    pub root: Option<String>,

    /// Delete the merged declaration files after the bundle is written
    #[arg(long, conflicts_with = "keep_fragments")]
    pub remove_fragments: bool,

    /// Keep the merged declaration files even if the config file removes them
    #[arg(long)]
    pub keep_fragments: bool,

    /// Show what would be merged without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the optional config file and lays the command-line flags over it.
    pub fn resolve(&self) -> Result<BundleSettings> {
        let mut file_config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(module_name) = &self.module_name {
            file_config.bundler.module_name = Some(module_name.clone());
        }
        if let Some(out) = &self.out {
            file_config.bundler.out = Some(out.clone());
        }
        if !self.excluded_references.is_empty() {
            file_config.bundler.excluded_references = Some(self.excluded_references.clone());
        }
        if let Some(root) = &self.root {
            file_config.input.root = Some(root.clone());
        }
        if self.remove_fragments {
            file_config.input.remove_fragments = Some(true);
        } else if self.keep_fragments {
            file_config.input.remove_fragments = Some(false);
        }

        file_config.into_settings()
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_only() {
        let cli = CliConfig::parse_from([
            "dts-bundler",
            "--module-name",
            "Lib",
            "--excluded-references",
            "node,bad",
            "--root",
            "dist",
        ]);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.bundler.module_name(), "Lib");
        assert_eq!(settings.bundler.out(), "./build/");
        assert_eq!(
            settings.bundler.excluded_references(),
            Some(&["node".to_string(), "bad".to_string()][..])
        );
        assert_eq!(settings.root, "dist");
        assert!(!settings.remove_fragments);
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[bundler]\nmodule_name = \"FromFile\"\nout = \"file.d.ts\"\n\n[input]\nroot = \"dist\"\n",
            )
            .unwrap();

        let cli = CliConfig::parse_from([
            "dts-bundler",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--module-name",
            "FromFlag",
            "--remove-fragments",
        ]);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.bundler.module_name(), "FromFlag");
        assert_eq!(settings.bundler.out(), "file.d.ts");
        assert_eq!(settings.root, "dist");
        assert!(settings.remove_fragments);
    }

    #[test]
    fn test_keep_fragments_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[bundler]\nmodule_name = \"Lib\"\n\n[input]\nremove_fragments = true\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let from_file = CliConfig::parse_from(["dts-bundler", "--config", path]);
        assert!(from_file.resolve().unwrap().remove_fragments);

        let kept = CliConfig::parse_from(["dts-bundler", "--config", path, "--keep-fragments"]);
        assert!(!kept.resolve().unwrap().remove_fragments);
    }

    #[test]
    fn test_remove_and_keep_conflict() {
        let parsed = CliConfig::try_parse_from([
            "dts-bundler",
            "--remove-fragments",
            "--keep-fragments",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_module_name() {
        let cli = CliConfig::parse_from(["dts-bundler"]);
        assert!(cli.resolve().is_err());
    }
}
