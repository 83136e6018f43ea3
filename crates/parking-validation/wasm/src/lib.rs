//! Parking Validation WASM
//!
//! WebAssembly bindings for the parking-lot form validators.
//! Binds the registration, login and add-lot forms on load and exposes the
//! validators to JavaScript, using the same rules a server can run natively.

use std::collections::BTreeMap;

use parking_validation_core::{self as core, FormKind, SubmitOutcome, ValidationConfig};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod bind;
pub mod dom;

/// Set panic hook and logger, then bind the forms on the page
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // The logger passes everything; the configured level gates it
    _ = console_log::init_with_level(log::Level::Trace);
    bind::set_config(ValidationConfig::default());

    if let Err(err) = bind::bind_when_ready() {
        log::error!("form validation not bound: {}", err);
    }
}

/// A form value as handed over from JavaScript
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum JsFieldValue {
    Text(String),
    Number(f64),
}

impl JsFieldValue {
    fn into_string(self) -> String {
        match self {
            JsFieldValue::Text(s) => s,
            JsFieldValue::Number(n) => n.to_string(),
        }
    }
}

/// Replace the configuration and bind any configured forms not yet bound
///
/// # Example (JavaScript)
/// ```javascript
/// bindForms({ password_min_length: 8, log_level: 'debug', forms: { login: 'signin-form' } });
/// ```
#[wasm_bindgen(js_name = bindForms)]
pub fn bind_forms_js(config: JsValue) -> Result<u32, JsValue> {
    let config: ValidationConfig = if config.is_undefined() || config.is_null() {
        ValidationConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };
    config.check().map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

    bind::set_config(config);
    Ok(bind::bind_forms()?)
}

/// Validate a plain object of field values without touching the DOM
///
/// # Returns
/// Object of field name -> message (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm('add_lot', {
///     name: 'Lot A', address: 'MG Road', pincode: '560001',
///     price_per_hour: 40, max_spots: 0
/// });
/// // { max_spots: 'Maximum spots must be greater than 0' }
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_js(kind: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let kind: FormKind = kind.parse().map_err(|e: String| JsValue::from_str(&e))?;

    let values: BTreeMap<String, Option<JsFieldValue>> =
        serde_wasm_bindgen::from_value(values)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    let values: BTreeMap<String, String> = values
        .into_iter()
        .map(|(field, value)| {
            let value = value.map(JsFieldValue::into_string).unwrap_or_default();
            (field, value)
        })
        .collect();

    let errors = core::validate_values(kind, &values, &bind::current_config())
        .err()
        .unwrap_or_default();

    // Plain object rather than a Map
    errors
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn validate_dom(kind: FormKind) -> Result<bool, JsValue> {
    let outcome = bind::validate_form(kind)?;
    Ok(outcome == SubmitOutcome::Proceed)
}

/// Validate the registration form in place; `true` when it may be submitted
#[wasm_bindgen(js_name = validateRegistrationForm)]
pub fn validate_registration_form() -> Result<bool, JsValue> {
    validate_dom(FormKind::Registration)
}

#[wasm_bindgen(js_name = validateLoginForm)]
pub fn validate_login_form() -> Result<bool, JsValue> {
    validate_dom(FormKind::Login)
}

#[wasm_bindgen(js_name = validateAddLotForm)]
pub fn validate_add_lot_form() -> Result<bool, JsValue> {
    validate_dom(FormKind::AddLot)
}

/// Quick pincode check
#[wasm_bindgen(js_name = isValidPincode)]
pub fn is_valid_pincode_js(pincode: &str) -> bool {
    core::is_valid_pincode(pincode)
}
