pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_ENDPOINT: &str = "http://apilayer.net/api/validate";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "phone-lookup")]
#[command(about = "Phone number information lookup tool")]
pub struct CliConfig {
    /// Phone number to look up
    pub phone_number: Option<String>,

    #[arg(short, long, help = "File containing phone numbers, one per line")]
    pub file: Option<String>,

    #[arg(short, long, help = "Save results to a JSON file")]
    pub output: Option<String>,

    #[arg(long, help = "numverify access key; external lookup is skipped without it")]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, help = "External API timeout in seconds")]
    pub request_timeout: u64,

    #[arg(long = "config", help = "TOML file with an [api] section")]
    pub config_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, help = "List supported country codes and exit")]
    pub list_countries: bool,
}

impl CliConfig {
    /// Overlay values from a TOML config file. Explicit command-line values
    /// win; the file only fills options left at their defaults.
    pub fn apply_toml(&mut self, overlay: toml_config::TomlConfig) {
        let Some(api) = overlay.api else {
            return;
        };

        if self.api_key.is_none() {
            self.api_key = api.access_key;
        }

        if self.api_endpoint == DEFAULT_API_ENDPOINT {
            if let Some(endpoint) = api.endpoint {
                self.api_endpoint = endpoint;
            }
        }

        if self.request_timeout == DEFAULT_REQUEST_TIMEOUT_SECS {
            if let Some(timeout) = api.timeout_seconds {
                self.request_timeout = timeout;
            }
        }
    }
}

impl ConfigProvider for CliConfig {
    fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    fn input_file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    fn output_file(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.phone_number.is_none() && self.file.is_none() {
            return Err(LookupError::MissingInputError);
        }

        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("request_timeout", self.request_timeout as usize, 1)?;

        if let Some(file) = &self.file {
            validate_path("file", file)?;
        }

        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }

        if let Some(api_key) = &self.api_key {
            validate_non_empty_string("api_key", api_key)?;
        }

        Ok(())
    }
}
