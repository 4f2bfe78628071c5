use crate::domain::model::{CountryRecord, LookupRecord, ParsedPayload};
use std::fmt::Write;

const BANNER: &str = "============================================================";
const RULE: &str = "----------------------------------------";

/// Render the console report block for one lookup. Pure string building;
/// printing is left to the caller.
pub fn render_report(
    record: &LookupRecord,
    country: Option<&CountryRecord>,
    prefix: Option<&str>,
    formatted: &str,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", BANNER);
    let _ = writeln!(out, "📱 PHONE NUMBER INFORMATION LOOKUP");
    let _ = writeln!(out, "{}", BANNER);

    let _ = writeln!(out, "\n📞 Phone Number: {}", record.phone_number);

    if let (Some(country), Some(prefix)) = (country, prefix) {
        let _ = writeln!(out, "🌍 Country: {} {}", country.emoji, country.name);
        let _ = writeln!(out, "🔢 Country Code: {}", prefix);
    }

    if formatted != record.phone_number {
        let _ = writeln!(out, "📋 Formatted: {}", formatted);
    }

    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "🔍 DETAILS");
    let _ = writeln!(out, "{}", RULE);

    match &record.parsed_info {
        ParsedPayload::Error { error } => {
            let _ = writeln!(out, "❌ Error: {}", error);
            let _ = writeln!(out, "{}", BANNER);
            return out;
        }
        ParsedPayload::Info(info) => {
            let _ = writeln!(out, "✓ Valid: {}", info.valid);
            let _ = writeln!(out, "✓ Possible: {}", info.possible);
            let _ = writeln!(out, "✓ National Number: {}", info.national_number);
            let _ = writeln!(out, "✓ Region: {}", info.region);
            let _ = writeln!(out, "✓ Carrier: {}", info.carrier.as_deref().unwrap_or("N/A"));
            let _ = writeln!(out, "✓ Time Zones: {}", info.timezones.join(", "));
            let _ = writeln!(out, "✓ Number Type: {}", info.number_type.as_str());
        }
    }

    if !record.external.is_empty() {
        let apis: Vec<&str> = record.external.iter().map(|e| e.api.as_str()).collect();
        let _ = writeln!(out, "🌐 External: {}", apis.join(", "));
    }

    let _ = writeln!(
        out,
        "\n⏰ Timestamp: {}",
        record.timestamp.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "{}", BANNER);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{NumberType, ParsedInfo};
    use chrono::Local;

    fn sample_record(payload: ParsedPayload) -> LookupRecord {
        LookupRecord {
            phone_number: "+6281234567890".to_string(),
            country: Some("Indonesia".to_string()),
            parsed_info: payload,
            timestamp: Local::now(),
            external: Vec::new(),
        }
    }

    fn sample_info() -> ParsedInfo {
        ParsedInfo {
            valid: true,
            possible: true,
            national_number: 81234567890,
            country_code: 62,
            region: "Indonesia".to_string(),
            carrier: None,
            timezones: vec!["Asia/Jakarta".to_string(), "Asia/Makassar".to_string()],
            number_type: NumberType::Mobile,
            international_format: "+62 812-3456-7890".to_string(),
        }
    }

    #[test]
    fn test_render_successful_lookup() {
        let record = sample_record(ParsedPayload::Info(sample_info()));
        let country = CountryRecord {
            prefix: "+62",
            name: "Indonesia",
            emoji: "🇮🇩",
        };

        let report = render_report(&record, Some(&country), Some("+62"), "8123-4567-890");

        assert!(report.contains("📞 Phone Number: +6281234567890"));
        assert!(report.contains("🌍 Country: 🇮🇩 Indonesia"));
        assert!(report.contains("🔢 Country Code: +62"));
        assert!(report.contains("📋 Formatted: 8123-4567-890"));
        assert!(report.contains("✓ Valid: true"));
        assert!(report.contains("✓ Carrier: N/A"));
        assert!(report.contains("✓ Time Zones: Asia/Jakarta, Asia/Makassar"));
        assert!(report.contains("✓ Number Type: MOBILE"));
        assert!(report.contains("⏰ Timestamp: "));
    }

    #[test]
    fn test_render_unresolved_country_omits_country_lines() {
        let mut record = sample_record(ParsedPayload::Info(sample_info()));
        record.phone_number = "+999123".to_string();
        record.country = None;

        let report = render_report(&record, None, None, "+999123");

        assert!(!report.contains("🌍 Country:"));
        assert!(!report.contains("🔢 Country Code:"));
        // unchanged formatting is not repeated
        assert!(!report.contains("📋 Formatted:"));
    }

    #[test]
    fn test_render_parse_error_short_circuits_details() {
        let record = sample_record(ParsedPayload::Error {
            error: "invalid country code".to_string(),
        });
        let report = render_report(&record, None, None, "+6281234567890");

        assert!(report.contains("❌ Error: invalid country code"));
        assert!(!report.contains("✓ Valid:"));
        assert!(!report.contains("⏰ Timestamp:"));
    }
}
