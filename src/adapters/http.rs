use crate::domain::model::ExternalLookup;
use crate::domain::ports::ValidationApi;
use crate::utils::error::Result;
use std::time::Duration;

/// Best-effort client for the numverify validation API. Inert without an
/// access key; every failure is swallowed and logged at debug level.
pub struct NumverifyClient {
    client: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
}

impl NumverifyClient {
    pub fn new(endpoint: String, access_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            access_key,
        })
    }
}

#[async_trait::async_trait]
impl ValidationApi for NumverifyClient {
    async fn lookup(&self, number: &str) -> Vec<ExternalLookup> {
        let access_key = match &self.access_key {
            Some(key) => key,
            None => return Vec::new(),
        };

        tracing::debug!("Querying numverify for {}", number);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("access_key", access_key.as_str()),
                ("number", number),
                ("format", "1"),
            ])
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                match response.json::<serde_json::Value>().await {
                    Ok(data) => vec![ExternalLookup {
                        api: "numverify".to_string(),
                        data,
                    }],
                    Err(e) => {
                        tracing::debug!("numverify response decode failed: {}", e);
                        Vec::new()
                    }
                }
            }
            Ok(response) => {
                tracing::debug!("numverify returned status {}", response.status());
                Vec::new()
            }
            Err(e) => {
                tracing::debug!("numverify request failed: {}", e);
                Vec::new()
            }
        }
    }
}
