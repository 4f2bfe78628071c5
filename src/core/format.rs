/// Format a normalized number for display using fixed per-country grouping
/// patterns. Numbers without a matched prefix, with a non-standard national
/// length, or with a non-digit national part are returned unchanged.
pub fn format_number(number: &str, prefix: Option<&str>) -> String {
    let Some(prefix) = prefix else {
        return number.to_string();
    };

    let Some(national) = number.strip_prefix(prefix) else {
        return number.to_string();
    };

    // groupings assume a digits-only national part
    if !national.chars().all(|c| c.is_ascii_digit()) {
        return number.to_string();
    }

    match (prefix, national.len()) {
        ("+62", 10) => format!("{}-{}-{}", &national[..4], &national[4..7], &national[7..]),
        ("+62", 11) => format!("{}-{}-{}", &national[..4], &national[4..8], &national[8..]),
        ("+1", 10) => format!("({}) {}-{}", &national[..3], &national[3..6], &national[6..]),
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_indonesian_ten_digit() {
        assert_eq!(
            format_number("+628123456789", Some("+62")),
            "8123-456-789"
        );
    }

    #[test]
    fn test_format_indonesian_eleven_digit() {
        assert_eq!(
            format_number("+6281234567890", Some("+62")),
            "8123-4567-890"
        );
    }

    #[test]
    fn test_format_north_american() {
        assert_eq!(
            format_number("+12025551234", Some("+1")),
            "(202) 555-1234"
        );
    }

    #[test]
    fn test_format_without_prefix_is_identity() {
        assert_eq!(format_number("+999123456", None), "+999123456");
    }

    #[test]
    fn test_format_non_standard_length_is_identity() {
        assert_eq!(format_number("+62812345", Some("+62")), "+62812345");
        assert_eq!(format_number("+1202555123", Some("+1")), "+1202555123");
        assert_eq!(format_number("+442071234567", Some("+44")), "+442071234567");
    }

    #[test]
    fn test_format_non_digit_national_part_is_identity() {
        assert_eq!(format_number("+62abcdefghij", Some("+62")), "+62abcdefghij");
    }
}
