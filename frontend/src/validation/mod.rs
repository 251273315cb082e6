//! Client-side form validation.
//!
//! Forms derive [`Validate`]; failures and server-side field errors both end
//! up in [`FormErrors`] so pages render them the same way.

pub mod forms;
pub mod rules;

use std::collections::BTreeMap;

pub use validator::Validate;
use validator::ValidationErrors;

use crate::api::ApiError;

/// Messages keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|error| match &error.message {
                        Some(message) => message.to_string(),
                        None => error.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        Self(fields)
    }

    pub fn from_api(error: &ApiError) -> Self {
        Self(error.field_errors())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages(field).first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

pub fn validate_form<T: Validate>(form: &T) -> Result<(), FormErrors> {
    form.validate()
        .map_err(|errors| FormErrors::from_validation(&errors))
}
