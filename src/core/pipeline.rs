use crate::core::countries::CountryTable;
use crate::core::format::format_number;
use crate::core::normalize::normalize;
use crate::core::report::render_report;
use crate::core::{
    ConfigProvider, LookupRecord, LookupResult, NumberParser, ParsedPayload, Pipeline, Storage,
    ValidationApi,
};
use crate::utils::error::{LookupError, Result};
use chrono::Local;

pub struct LookupPipeline<S: Storage, C: ConfigProvider, P: NumberParser, V: ValidationApi> {
    storage: S,
    config: C,
    parser: P,
    api: V,
    countries: CountryTable,
}

impl<S: Storage, C: ConfigProvider, P: NumberParser, V: ValidationApi> LookupPipeline<S, C, P, V> {
    pub fn new(storage: S, config: C, parser: P, api: V) -> Self {
        Self {
            storage,
            config,
            parser,
            api,
            countries: CountryTable::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, P: NumberParser, V: ValidationApi> Pipeline
    for LookupPipeline<S, C, P, V>
{
    async fn extract(&self) -> Result<Vec<String>> {
        let mut inputs = Vec::new();

        if let Some(number) = self.config.phone_number() {
            inputs.push(number.to_string());
        }

        // 逐行讀取檔案，空行略過
        if let Some(path) = self.config.input_file() {
            tracing::debug!("Reading phone numbers from: {}", path);
            let data = self.storage.read_file(path).await?;
            let text = String::from_utf8_lossy(&data);

            for line in text.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    inputs.push(line.to_string());
                }
            }
        }

        Ok(inputs)
    }

    async fn transform(&self, inputs: Vec<String>) -> Result<LookupResult> {
        let mut records = Vec::new();
        let mut report_output = String::new();

        for raw in inputs {
            let number = normalize(&raw);
            let resolved = self.countries.resolve(&number);
            let country = resolved.map(|(record, _)| record);
            let prefix = resolved.map(|(_, prefix)| prefix);

            // 每個號碼獨立處理，解析失敗只影響該筆記錄
            let parsed_info = match self.parser.parse(&number) {
                Ok(info) => ParsedPayload::Info(info),
                Err(LookupError::ParseError { message }) => {
                    tracing::warn!("Failed to parse {}: {}", number, message);
                    ParsedPayload::Error { error: message }
                }
                Err(other) => {
                    tracing::warn!("Failed to parse {}: {}", number, other);
                    ParsedPayload::Error {
                        error: other.to_string(),
                    }
                }
            };

            let external = self.api.lookup(&number).await;

            let record = LookupRecord {
                phone_number: number.clone(),
                country: country.map(|c| c.name.to_string()),
                parsed_info,
                timestamp: Local::now(),
                external,
            };

            let formatted = format_number(&number, prefix);
            report_output.push_str(&render_report(&record, country, prefix, &formatted));
            records.push(record);
        }

        Ok(LookupResult {
            records,
            report_output,
        })
    }

    async fn load(&self, result: LookupResult) -> Result<Option<String>> {
        let output = match self.config.output_file() {
            Some(path) => path,
            None => return Ok(None),
        };

        if result.records.is_empty() {
            tracing::warn!("No lookup records to save");
            return Ok(None);
        }

        let json = serde_json::to_string_pretty(&result.records)?;
        tracing::debug!("Writing {} record(s) to {}", result.records.len(), output);
        self.storage.write_file(output, json.as_bytes()).await?;

        Ok(Some(output.to_string()))
    }
}
