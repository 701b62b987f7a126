#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Attendee identifier as it appears in the source, trimmed.
///
/// Numeric identifiers keep their textual form so `101` in a registration
/// export matches `101` in a check-in export.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct AttendeeId(String);

impl AttendeeId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidAttendeeId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_identifier() {
        let id = AttendeeId::new("  A1 ").unwrap();
        assert_eq!(id.as_str(), "A1");
        assert_eq!(id.to_string(), "A1");
    }

    #[test]
    fn rejects_blank_identifier() {
        assert_eq!(
            AttendeeId::new("   "),
            Err(ModelError::InvalidAttendeeId("   ".to_string()))
        );
    }
}
