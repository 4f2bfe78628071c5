/// Normalize a raw phone number string: strip all whitespace and make sure
/// the result starts with `+`. Never fails; malformed input is passed through
/// for the downstream parser to reject.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if stripped.starts_with('+') {
        stripped
    } else {
        format!("+{}", stripped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_whitespace_and_prepends_plus() {
        assert_eq!(normalize("081 234"), "+081234");
        assert_eq!(normalize("+62 812"), "+62812");
    }

    #[test]
    fn test_normalize_handles_mixed_whitespace() {
        assert_eq!(normalize(" +1 202\t555 1234\n"), "+12025551234");
        assert_eq!(normalize("62 812 3456 7890"), "+6281234567890");
    }

    #[test]
    fn test_normalize_keeps_existing_plus() {
        assert_eq!(normalize("+6281234567890"), "+6281234567890");
    }

    #[test]
    fn test_normalize_output_invariants() {
        for input in ["081 234", "  + 44 20 ", "garbage in", ""] {
            let out = normalize(input);
            assert!(out.starts_with('+'), "{:?} -> {:?}", input, out);
            assert!(!out.chars().any(char::is_whitespace));
        }
    }
}
