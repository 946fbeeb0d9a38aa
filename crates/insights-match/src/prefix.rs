//! Digit-prefix extraction from raw postal codes.

/// Extract the first maximal contiguous run of ASCII decimal digits.
///
/// This is the usable part of a messy listing postal code (`"325-A"` yields
/// `"325"`, `"Unit 7, 32599"` yields `"7"`). Returns `None` when the input
/// contains no digit.
pub fn extract_zip_prefix(raw: &str) -> Option<String> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let rest = &raw[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_first_digit_run() {
        assert_eq!(extract_zip_prefix("325-A").as_deref(), Some("325"));
        assert_eq!(extract_zip_prefix("32599").as_deref(), Some("32599"));
        assert_eq!(extract_zip_prefix("zip 104 ext 22").as_deref(), Some("104"));
    }

    #[test]
    fn stops_at_the_first_non_digit() {
        assert_eq!(extract_zip_prefix("12a34").as_deref(), Some("12"));
    }

    #[test]
    fn no_digits_means_no_prefix() {
        assert_eq!(extract_zip_prefix("N/A"), None);
        assert_eq!(extract_zip_prefix(""), None);
        assert_eq!(extract_zip_prefix("pending"), None);
    }
}
