use crate::domain::model::{ExternalLookup, LookupResult, ParsedInfo};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn phone_number(&self) -> Option<&str>;
    fn input_file(&self) -> Option<&str>;
    fn output_file(&self) -> Option<&str>;
}

/// Phone number analysis, delegated to an external parsing library.
pub trait NumberParser: Send + Sync {
    fn parse(&self, number: &str) -> Result<ParsedInfo>;
}

/// Best-effort external validation API. Failures are swallowed by the
/// implementation; an empty result means nothing was looked up.
#[async_trait]
pub trait ValidationApi: Send + Sync {
    async fn lookup(&self, number: &str) -> Vec<ExternalLookup>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, inputs: Vec<String>) -> Result<LookupResult>;
    async fn load(&self, result: LookupResult) -> Result<Option<String>>;
}
