use crate::domain::model::{NumberType, ParsedInfo};
use crate::domain::ports::NumberParser;
use crate::utils::error::{LookupError, Result};
use phonenumber::metadata::DATABASE;
use phonenumber::Mode;

/// `NumberParser` backed by the `phonenumber` crate.
///
/// The crate ships no geocoder or timezone metadata, so region names and
/// timezone identifiers for the supported calling codes come from the static
/// tables below; the ISO region id is the fallback.
pub struct PhonenumberParser;

impl PhonenumberParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhonenumberParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberParser for PhonenumberParser {
    fn parse(&self, number: &str) -> Result<ParsedInfo> {
        let parsed = phonenumber::parse(None, number).map_err(|e| LookupError::ParseError {
            message: e.to_string(),
        })?;

        let valid = phonenumber::is_valid(&parsed);
        let country_code = parsed.country().code();
        let national_number = parsed.national().value();
        let region_id = parsed.country().id().map(|id| format!("{:?}", id));

        let number_type = parsed.number_type(&DATABASE);

        let region = geodata::region_name(country_code)
            .map(str::to_string)
            .or(region_id)
            .unwrap_or_default();

        Ok(ParsedInfo {
            valid,
            // the library has no separate possibility check; acceptance by the
            // parser stands in for it
            possible: true,
            national_number,
            country_code,
            region,
            carrier: parsed.carrier().map(|c| c.to_string()),
            timezones: geodata::time_zones(country_code)
                .iter()
                .map(|tz| tz.to_string())
                .collect(),
            number_type: number_type.into(),
            international_format: phonenumber::format(&parsed)
                .mode(Mode::International)
                .to_string(),
        })
    }
}

impl From<phonenumber::Type> for NumberType {
    fn from(kind: phonenumber::Type) -> Self {
        match kind {
            phonenumber::Type::FixedLine => NumberType::FixedLine,
            phonenumber::Type::Mobile => NumberType::Mobile,
            phonenumber::Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
            phonenumber::Type::TollFree => NumberType::TollFree,
            phonenumber::Type::PremiumRate => NumberType::PremiumRate,
            phonenumber::Type::SharedCost => NumberType::SharedCost,
            phonenumber::Type::Voip => NumberType::Voip,
            phonenumber::Type::PersonalNumber => NumberType::PersonalNumber,
            phonenumber::Type::Pager => NumberType::Pager,
            phonenumber::Type::Uan => NumberType::Uan,
            phonenumber::Type::Voicemail => NumberType::Voicemail,
            // short codes, emergency and carrier-specific kinds have no slot
            // in the report's classification
            _ => NumberType::Unknown,
        }
    }
}

/// Region names and IANA timezone identifiers for the supported calling
/// codes, keyed by the numeric code the parser reports.
mod geodata {
    pub fn region_name(country_code: u16) -> Option<&'static str> {
        let name = match country_code {
            62 => "Indonesia",
            1 => "USA / Canada",
            44 => "United Kingdom",
            61 => "Australia",
            60 => "Malaysia",
            65 => "Singapore",
            63 => "Philippines",
            66 => "Thailand",
            84 => "Vietnam",
            81 => "Japan",
            82 => "South Korea",
            86 => "China",
            91 => "India",
            92 => "Pakistan",
            93 => "Afghanistan",
            94 => "Sri Lanka",
            95 => "Myanmar",
            98 => "Iran",
            7 => "Russia / Kazakhstan",
            33 => "France",
            49 => "Germany",
            39 => "Italy",
            34 => "Spain",
            55 => "Brazil",
            27 => "South Africa",
            20 => "Egypt",
            234 => "Nigeria",
            254 => "Kenya",
            _ => return None,
        };
        Some(name)
    }

    pub fn time_zones(country_code: u16) -> &'static [&'static str] {
        match country_code {
            62 => &["Asia/Jakarta", "Asia/Makassar", "Asia/Jayapura"],
            1 => &[
                "America/New_York",
                "America/Chicago",
                "America/Denver",
                "America/Los_Angeles",
                "America/Anchorage",
                "Pacific/Honolulu",
            ],
            44 => &["Europe/London"],
            61 => &["Australia/Sydney", "Australia/Adelaide", "Australia/Perth"],
            60 => &["Asia/Kuala_Lumpur"],
            65 => &["Asia/Singapore"],
            63 => &["Asia/Manila"],
            66 => &["Asia/Bangkok"],
            84 => &["Asia/Ho_Chi_Minh"],
            81 => &["Asia/Tokyo"],
            82 => &["Asia/Seoul"],
            86 => &["Asia/Shanghai"],
            91 => &["Asia/Kolkata"],
            92 => &["Asia/Karachi"],
            93 => &["Asia/Kabul"],
            94 => &["Asia/Colombo"],
            95 => &["Asia/Yangon"],
            98 => &["Asia/Tehran"],
            7 => &[
                "Europe/Moscow",
                "Asia/Yekaterinburg",
                "Asia/Novosibirsk",
                "Asia/Vladivostok",
            ],
            33 => &["Europe/Paris"],
            49 => &["Europe/Berlin"],
            39 => &["Europe/Rome"],
            34 => &["Europe/Madrid"],
            55 => &["America/Sao_Paulo", "America/Manaus"],
            27 => &["Africa/Johannesburg"],
            20 => &["Africa/Cairo"],
            234 => &["Africa/Lagos"],
            254 => &["Africa/Nairobi"],
            _ => &[],
        }
    }
}
