use crate::core::projection::omit_field_all;
use crate::core::{ConfigProvider, Document, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::Result;

/// Reads the input document, strips the omitted field from every record and
/// writes the records back out as a pretty-printed array.
pub struct ResultsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ResultsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ResultsPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let input = self.config.input_file();
        tracing::debug!("Reading {}", input);
        let raw = self.storage.read_file(input).await?;
        tracing::debug!("Read {} bytes from {}", raw.len(), input);

        let document = Document::from_slice(&raw)?;
        let records = document.into_results(self.config.results_field())?;

        tracing::debug!(
            "Found {} records under `{}`",
            records.len(),
            self.config.results_field()
        );
        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let field = self.config.omitted_field();
        let omitted_count = data.iter().filter(|r| r.contains_key(field)).count();
        let processed_records = omit_field_all(&data, field);

        tracing::debug!(
            "Removed `{}` from {} of {} records",
            field,
            omitted_count,
            processed_records.len()
        );

        Ok(TransformResult {
            processed_records,
            omitted_count,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output = self.config.output_file();
        let json_data = serde_json::to_string_pretty(&result.processed_records)?;

        tracing::debug!("Writing {} bytes to {}", json_data.len(), output);
        self.storage.write_file(output, json_data.as_bytes()).await?;

        Ok(output.to_string())
    }
}
