use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order, stopping at the first error.
    /// Returns where the output was written.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting cleanup");

        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        let transformed = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Transformed {} records ({} had the field removed)",
            transformed.processed_records.len(),
            transformed.omitted_count
        );

        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
