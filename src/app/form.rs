//! Form values of the active document type

use legalease_common::{format_field_label, Details, DocumentTypeDescriptor};
use std::collections::HashMap;

/// Field values keyed by field identifier, scoped to one document type
///
/// Only the descriptor's fields are stored; anything else is dropped on
/// entry so nothing stale can be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    descriptor: &'static DocumentTypeDescriptor,
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new(descriptor: &'static DocumentTypeDescriptor) -> Self {
        Self {
            descriptor,
            values: HashMap::new(),
        }
    }

    pub fn descriptor(&self) -> &'static DocumentTypeDescriptor {
        self.descriptor
    }

    /// Current value, empty when never entered
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Returns `false` when the field does not belong to this document type
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        if !self.descriptor.has_field(field) {
            return false;
        }
        self.values.insert(field.to_string(), value.into());
        true
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.descriptor
            .fields
            .iter()
            .copied()
            .filter(|field| self.get(field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Values in field order, as submitted
    pub fn details(&self) -> Details {
        Details(
            self.descriptor
                .fields
                .iter()
                .map(|field| (field.to_string(), self.get(field).to_string()))
                .collect(),
        )
    }
}

/// Client-side message for a form with empty required fields
pub fn missing_fields_message(missing: &[&str]) -> String {
    let labels: Vec<String> = missing.iter().map(|f| format_field_label(f)).collect();
    format!("Please fill in: {}", labels.join(", "))
}
