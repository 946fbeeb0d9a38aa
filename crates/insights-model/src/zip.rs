#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// A canonical postal code: exactly five ASCII digits.
///
/// This is the join target on the demographic side. Construction enforces
/// the invariant; left-zero-padding of shorter numeric codes happens during
/// ingestion, before this type is built.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.len() != 5 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::InvalidZipCode(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_five_digits() {
        let zip = ZipCode::new("32599").unwrap();
        assert_eq!(zip.as_str(), "32599");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let zip = ZipCode::new(" 00501 ").unwrap();
        assert_eq!(zip.as_str(), "00501");
    }

    #[test]
    fn rejects_wrong_length_and_non_digits() {
        assert!(ZipCode::new("325").is_err());
        assert!(ZipCode::new("325990").is_err());
        assert!(ZipCode::new("32a99").is_err());
        assert!(ZipCode::new("").is_err());
    }
}
