pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::bundler::{BundlerConfig, BundlerOptions};
pub use config::cli::LocalStorage;
pub use config::BundleSettings;
pub use crate::core::{
    engine::BundleEngine,
    merger::{merge, DeclarationMerger},
    normalizer::TextualNormalizer,
    pipeline::BundlePipeline,
};
pub use domain::model::{Fragment, FragmentSet, MergedDeclaration};
pub use utils::error::{BundleError, Result};
