pub mod engine;
pub mod merger;
pub mod normalizer;
pub mod pipeline;

pub use crate::domain::model::{Fragment, FragmentSet, MergedDeclaration};
pub use crate::domain::ports::{ConfigProvider, LineNormalizer, Pipeline, Storage};
pub use crate::utils::error::Result;
