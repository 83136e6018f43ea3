//! Parking Validation Core
//!
//! Pure validation rules for the parking-lot application forms (registration,
//! login, add parking lot). Used by the WASM adapter in the browser and usable
//! anywhere a form payload needs checking before it is accepted.

use std::collections::BTreeMap;

pub mod adapter;
pub mod config;
pub mod forms;
pub mod numeric;
pub mod pincode;
pub mod string;

pub use adapter::{handle_submit, ErrorSurface, FieldSource, SubmitOutcome};
pub use config::{CssClasses, FormIds, ValidationConfig};
pub use forms::{
    missing_fields, validate_values, AddLotForm, FormKind, LoginForm, RegistrationForm,
};
pub use numeric::*;
pub use pincode::*;
pub use string::*;

/// Field id -> message for every field that failed validation.
///
/// One message per field; the first failing rule wins.
pub type FieldErrors = BTreeMap<String, String>;

/// Validation trait implemented by every form record
pub trait Validate {
    /// Validate against the given limits and return errors by field name
    fn validate_with(&self, config: &ValidationConfig) -> Result<(), FieldErrors>;

    /// Validate with the default limits
    fn validate(&self) -> Result<(), FieldErrors> {
        self.validate_with(&ValidationConfig::default())
    }

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Records `result` against `field` unless the field already has a message.
pub(crate) fn record(errors: &mut FieldErrors, field: &str, result: Result<(), String>) {
    if let Err(message) = result {
        tracing::trace!(field, %message, "rule failed");
        errors.entry(field.to_string()).or_insert(message);
    }
}

pub(crate) fn into_result(form: &str, errors: FieldErrors) -> Result<(), FieldErrors> {
    tracing::debug!(form, errors = errors.len(), "validation pass");
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
