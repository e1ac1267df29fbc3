use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message shown when search text is not a valid TID.
pub const INVALID_TID_MESSAGE: &str = "TID must be a non-negative whole number";

/// The taxpayer's unique numeric identifier.
///
/// Assigned by the record service on creation and never supplied by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tid(u64);

impl Tid {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Tid {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Tid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when text cannot be read as a [`Tid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("TID must be a non-negative whole number: {input:?}")]
pub struct ParseTidError {
    pub input: String,
}

impl FromStr for Tid {
    type Err = ParseTidError;

    /// Parses decimal digits, ignoring surrounding whitespace.
    ///
    /// Signs are rejected even though `u64::from_str` accepts a leading `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseTidError { input: s.to_string() });
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseTidError { input: s.to_string() })
    }
}

/// One taxpayer entry.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait
/// (see [`record_actor::entity`](crate::record_actor::entity)), allowing it to be
/// managed by a [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRecord {
    pub tid: Tid,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

impl TaxRecord {
    pub fn new(
        tid: Tid,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            tid,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
        }
    }
}

/// Payload for creating a new record. Carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRecordCreate {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

impl TaxRecordCreate {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
        }
    }

    /// Names of the fields that are empty, in form order.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tid_parses_digits_with_surrounding_whitespace() {
        assert_eq!("42".parse::<Tid>(), Ok(Tid::new(42)));
        assert_eq!(" 7 ".parse::<Tid>(), Ok(Tid::new(7)));
        assert_eq!("0".parse::<Tid>(), Ok(Tid::new(0)));
    }

    #[test]
    fn test_tid_rejects_non_numeric_text() {
        for input in ["", "   ", "abc", "-1", "+1", "4 2", "1.5", "99999999999999999999999"] {
            let err = input.parse::<Tid>().unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn test_tid_display_is_plain_decimal() {
        assert_eq!(Tid::new(1024).to_string(), "1024");
    }

    #[test]
    fn test_blank_fields_reports_empty_fields_in_order() {
        let params = TaxRecordCreate::new("", "Doe", "");
        assert_eq!(params.blank_fields(), vec!["first_name", "address"]);
        assert!(TaxRecordCreate::new("Jane", "Doe", "1 Main St").blank_fields().is_empty());
    }
}
