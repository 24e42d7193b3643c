#![deny(unsafe_code)]

use std::fmt;

use crate::TrendError;

/// An opaque patient identifier.
///
/// Carries no meaning beyond identity; values are compared and grouped,
/// never interpreted.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(value: impl Into<String>) -> Result<Self, TrendError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TrendError::EmptyPersonId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_id_trims_whitespace() {
        let id = PersonId::new("  12345 ").unwrap();
        assert_eq!(id.as_str(), "12345");
    }

    #[test]
    fn person_id_rejects_empty() {
        assert!(PersonId::new("   ").is_err());
    }
}
