//! In-memory form model for the data-entry screen.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{self, FieldDefinition};
use crate::errors::FormError;

/// Aggregate message shown whenever any field is still unselected.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields before submitting.";

/// Current selections, one entry per catalog field.
///
/// Every catalog key is always present; an unselected field holds an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: catalog::keys().map(|key| (key, String::new())).collect(),
        }
    }

    /// Returns a copy of this state with `key` set to `value`.
    ///
    /// An empty `value` clears the field.
    pub fn update(&self, key: &str, value: &str) -> Result<FormState, FormError> {
        let definition =
            catalog::find(key).ok_or_else(|| FormError::InvalidKey(key.to_string()))?;
        if !value.is_empty() && !definition.allows(value) {
            return Err(FormError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        let mut next = self.clone();
        next.values.insert(definition.key, value.to_string());
        tracing::debug!(field = definition.key, value, "form field updated");
        Ok(next)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Fields paired with their current value, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldDefinition, &str)> + '_ {
        catalog::definitions()
            .iter()
            .map(move |definition| (definition, self.get(definition.key).unwrap_or_default()))
    }

    pub fn is_complete(&self) -> bool {
        validate(self) == ValidationResult::Ok
    }
}

/// Outcome of validating the whole form at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Ok,
    /// Keys of unselected fields, in catalog order.
    Missing(Vec<&'static str>),
}

impl ValidationResult {
    /// Message to display for this result, if any. Never names a field.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ValidationResult::Ok => None,
            ValidationResult::Missing(_) => Some(MISSING_FIELDS_MESSAGE),
        }
    }
}

pub fn validate(state: &FormState) -> ValidationResult {
    let missing: Vec<&'static str> = catalog::definitions()
        .iter()
        .filter(|definition| {
            let value = state.get(definition.key).unwrap_or_default();
            value.is_empty() || !definition.allows(value)
        })
        .map(|definition| definition.key)
        .collect();

    if missing.is_empty() {
        ValidationResult::Ok
    } else {
        ValidationResult::Missing(missing)
    }
}

#[cfg(test)]
pub(crate) fn complete_state() -> FormState {
    catalog::definitions()
        .iter()
        .fold(FormState::new(), |state, definition| {
            state
                .update(definition.key, definition.allowed_values[0].value)
                .expect("first allowed value is valid")
        })
}
