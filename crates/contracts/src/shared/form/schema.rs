use super::field::FieldDescriptor;
use super::values::FormValues;
use crate::domain::common::CatalogEntity;
use std::collections::HashMap;

/// Validation failure for one field (`key == None` for entity-level rules)
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub key: Option<&'static str>,
    pub message: String,
}

impl FieldError {
    pub fn field(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key: Some(key),
            message: message.into(),
        }
    }

    pub fn form(message: impl Into<String>) -> Self {
        Self {
            key: None,
            message: message.into(),
        }
    }
}

/// One `<option>` of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Options per select source key
pub type SelectSources = HashMap<&'static str, Vec<SelectOption>>;

/// Build options from a catalog, skipping records given a baja lógica.
///
/// `keep` preserves the currently referenced id even when inactive so an
/// existing record still shows its value while being edited.
pub fn select_options<T: CatalogEntity>(items: &[T], keep: Option<i64>) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = items
        .iter()
        .filter(|item| item.is_active() || (keep.is_some() && item.id() == keep))
        .filter_map(|item| {
            item.id().map(|id| SelectOption {
                value: id.to_string(),
                label: item.display_name(),
            })
        })
        .collect();
    options.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    options
}

/// Validate every field, collecting all failures in field order
pub fn validate_form(fields: &[FieldDescriptor], values: &FormValues) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|field| {
            field
                .validate(values)
                .err()
                .map(|message| FieldError::field(field.key, message))
        })
        .collect()
}

/// Entities edited through the dynamic form
pub trait FormSchema: Sized {
    /// Field descriptors in display order
    fn fields() -> Vec<FieldDescriptor>;

    /// Current entity values as form strings
    fn to_values(&self) -> FormValues;

    /// Apply form values on top of `base`, keeping fields the form does not edit
    fn from_values(base: &Self, values: &FormValues) -> Self;

    /// Entity-level rules run after the per-field checks
    fn check(&self) -> Result<(), String>;

    /// Validate and build the entity to be saved
    fn submit(base: &Self, values: &FormValues) -> Result<Self, Vec<FieldError>> {
        let errors = validate_form(&Self::fields(), values);
        if !errors.is_empty() {
            return Err(errors);
        }
        let item = Self::from_values(base, values);
        item.check().map_err(|message| vec![FieldError::form(message)])?;
        Ok(item)
    }
}
