use crate::config::bundler::BundlerConfig;
use crate::domain::model::{FragmentSet, MergedDeclaration};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Relative, `/`-separated names of every file below the storage root.
    fn list_files(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn bundler(&self) -> &BundlerConfig;
    fn remove_fragments(&self) -> bool;
}

/// Decides the fate of a single declaration line: `None` drops it,
/// `Some` is the rendered line as it appears inside the module body.
pub trait LineNormalizer: Send + Sync {
    fn normalize_line(&self, line: &str) -> Option<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<FragmentSet>;
    async fn transform(&self, fragments: FragmentSet) -> Result<MergedDeclaration>;
    async fn load(&self, merged: MergedDeclaration) -> Result<String>;
}
