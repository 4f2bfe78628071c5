use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct LookupEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LookupEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run extract → transform → load. Returns the output path when a JSON
    /// report was written.
    pub async fn run(&self) -> Result<Option<String>> {
        tracing::debug!("Collecting phone numbers...");
        let inputs = self.pipeline.extract().await?;
        tracing::info!("Looking up {} phone number(s)", inputs.len());

        let result = self.pipeline.transform(inputs).await?;
        print!("{}", result.report_output);

        let saved = self.pipeline.load(result).await?;
        if let Some(path) = &saved {
            tracing::info!("Results saved to: {}", path);
        }

        Ok(saved)
    }
}
