use crate::core::export;
use crate::core::pipeline::{AnalyticsPipeline, PipelineOutcome};
use crate::core::{ConfigProvider, Storage, TicketRecord};
use crate::utils::error::Result;

/// Expands `{timestamp}` in an output file stem.
pub fn expand_filename(template: &str) -> String {
    template.replace(
        "{timestamp}",
        &chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string(),
    )
}

/// Reads ticket records through a [`Storage`], runs the pipeline and writes
/// one output file per configured format.
pub struct ReportEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    pipeline: AnalyticsPipeline<C>,
}

impl<S: Storage, C: ConfigProvider> ReportEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            pipeline: AnalyticsPipeline::new(config),
        }
    }

    pub async fn extract(&self, input: &str) -> Result<Vec<TicketRecord>> {
        tracing::debug!("Reading ticket records from: {}", input);
        let bytes = self.storage.read_file(input).await?;
        let records: Vec<TicketRecord> = serde_json::from_slice(&bytes)?;
        tracing::info!("Extracted {} records", records.len());
        Ok(records)
    }

    pub async fn load(&self, outcome: &PipelineOutcome) -> Result<Vec<String>> {
        let config = self.pipeline.config();
        let stem = expand_filename(config.output_filename());
        let mut written = Vec::new();

        for format in config.output_formats() {
            let (extension, data) = export::render(format, outcome)?;
            let path = format!("{}/{}.{}", config.output_path(), stem, extension);

            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, &data).await?;
            written.push(path);
        }

        Ok(written)
    }

    pub async fn run(&self, input: &str) -> Result<Vec<String>> {
        tracing::info!("🚀 Starting ticket report");

        let records = self.extract(input).await?;
        let outcome = self.pipeline.run(&records)?;
        let written = self.load(&outcome).await?;

        tracing::info!("✅ Wrote {} output files", written.len());
        Ok(written)
    }
}
