//! The "Add New TaxPayer" form: three required text fields with inline messages.

use crate::model::TaxRecordCreate;
use std::collections::BTreeMap;

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Address,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Field; 3] = [Field::FirstName, Field::LastName, Field::Address];

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Address => "Address",
        }
    }

    /// Inline message shown when the field is empty at submit time.
    pub fn required_message(self) -> &'static str {
        match self {
            Field::FirstName => "First name is required",
            Field::LastName => "Last name is required",
            Field::Address => "Address is required",
        }
    }
}

/// Form input state plus the messages from the last validation.
///
/// Messages are only recomputed by [`RecordForm::validate`]; editing a field
/// leaves its message in place until the next submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    first_name: String,
    last_name: String,
    address: String,
    errors: BTreeMap<Field, &'static str>,
}

impl RecordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Address => &self.address,
        }
    }

    /// The inline message for `field`, if the last validation flagged it.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Checks every required field and records a message for each empty one.
    ///
    /// Returns the creation payload when all fields are present, otherwise the
    /// empty fields in display order.
    pub fn validate(&mut self) -> Result<TaxRecordCreate, Vec<Field>> {
        self.errors.clear();
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect();

        if missing.is_empty() {
            return Ok(TaxRecordCreate::new(
                self.first_name.clone(),
                self.last_name.clone(),
                self.address.clone(),
            ));
        }

        for field in &missing {
            self.errors.insert(*field, field.required_message());
        }
        Err(missing)
    }

    /// Empties every field and clears all messages.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Address => &mut self.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RecordForm {
        let mut form = RecordForm::new();
        form.set(Field::FirstName, "Jane");
        form.set(Field::LastName, "Doe");
        form.set(Field::Address, "1 Main St");
        form
    }

    #[test]
    fn test_validate_returns_payload_in_field_order() {
        let mut form = filled();
        let params = form.validate().unwrap();
        assert_eq!(params, TaxRecordCreate::new("Jane", "Doe", "1 Main St"));
        assert!(!form.has_errors());
    }

    #[test]
    fn test_validate_flags_every_empty_field() {
        let mut form = RecordForm::new();
        form.set(Field::LastName, "Doe");

        let missing = form.validate().unwrap_err();
        assert_eq!(missing, vec![Field::FirstName, Field::Address]);
        assert_eq!(form.error(Field::FirstName), Some("First name is required"));
        assert_eq!(form.error(Field::LastName), None);
        assert_eq!(form.error(Field::Address), Some("Address is required"));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut form = filled();
        form.set(Field::Address, " ");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_messages_persist_until_next_validation() {
        let mut form = RecordForm::new();
        let _ = form.validate();
        form.set(Field::FirstName, "Jane");
        assert_eq!(form.error(Field::FirstName), Some("First name is required"));

        let _ = form.validate();
        assert_eq!(form.error(Field::FirstName), None);
        assert_eq!(form.error(Field::LastName), Some("Last name is required"));
    }

    #[test]
    fn test_reset_empties_fields_and_messages() {
        let mut form = filled();
        form.set(Field::Address, "");
        let _ = form.validate();

        form.reset();
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
        }
    }
}
