use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct BundleEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BundleEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting declaration bundling...");

        // Extract
        let fragments = self.pipeline.extract().await?;
        tracing::info!("Collected {} declaration fragments", fragments.len());

        // Transform
        let merged = self.pipeline.transform(fragments).await?;
        tracing::info!(
            "Merged {} fragments ({} lines)",
            merged.fragment_names.len(),
            merged.retained_lines
        );

        // Load
        let output_path = self.pipeline.load(merged).await?;
        tracing::info!("Bundle written to: {}", output_path);

        Ok(output_path)
    }
}
