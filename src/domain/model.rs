use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One entry of the static prefix-to-country table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    pub prefix: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
}

/// Number classification as reported by the parsing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl NumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::FixedLine => "FIXED_LINE",
            NumberType::Mobile => "MOBILE",
            NumberType::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
            NumberType::TollFree => "TOLL_FREE",
            NumberType::PremiumRate => "PREMIUM_RATE",
            NumberType::SharedCost => "SHARED_COST",
            NumberType::Voip => "VOIP",
            NumberType::PersonalNumber => "PERSONAL_NUMBER",
            NumberType::Pager => "PAGER",
            NumberType::Uan => "UAN",
            NumberType::Voicemail => "VOICEMAIL",
            NumberType::Unknown => "UNKNOWN",
        }
    }
}

/// What the number parser reports for a successfully parsed number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedInfo {
    pub valid: bool,
    pub possible: bool,
    pub national_number: u64,
    pub country_code: u16,
    pub region: String,
    pub carrier: Option<String>,
    pub timezones: Vec<String>,
    pub number_type: NumberType,
    pub international_format: String,
}

/// Parser outcome carried in the output record. A failed parse is data,
/// not a pipeline error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParsedPayload {
    Info(ParsedInfo),
    Error { error: String },
}

/// Result of one external validation API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalLookup {
    pub api: String,
    pub data: serde_json::Value,
}

/// One row of the JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRecord {
    pub phone_number: String,
    pub country: Option<String>,
    pub parsed_info: ParsedPayload,
    pub timestamp: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external: Vec<ExternalLookup>,
}

/// Artifact produced by the transform stage.
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub records: Vec<LookupRecord>,
    pub report_output: String,
}
