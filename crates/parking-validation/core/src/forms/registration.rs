use serde::{Deserialize, Serialize};

use super::read;
use crate::adapter::FieldSource;
use crate::config::ValidationConfig;
use crate::pincode::validate_pincode;
use crate::string::{validate_matches, validate_min_length, validate_required};
use crate::{into_result, record, FieldErrors, Validate};

/// New user sign-up
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub address: String,
    pub pincode: String,
}

impl RegistrationForm {
    pub const FIELDS: &'static [&'static str] = &[
        "username",
        "password",
        "confirm_password",
        "full_name",
        "address",
        "pincode",
    ];

    pub fn from_source(source: &impl FieldSource) -> Self {
        Self {
            username: read(source, "username"),
            password: read(source, "password"),
            confirm_password: read(source, "confirm_password"),
            full_name: read(source, "full_name"),
            address: read(source, "address"),
            pincode: read(source, "pincode"),
        }
    }
}

impl Validate for RegistrationForm {
    fn validate_with(&self, config: &ValidationConfig) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = self.username.trim();
        let min = config.username_min_length;
        let required = validate_required(username, "Username is required");
        record(&mut errors, "username", required);
        record(&mut errors, "username", validate_min_length(username, min, "Username"));

        // Passwords are compared as typed
        let min = config.password_min_length;
        let password = if self.password.is_empty() {
            Err("Password is required".to_string())
        } else {
            validate_min_length(&self.password, min, "Password")
        };
        record(&mut errors, "password", password);

        let confirm = &self.confirm_password;
        let matches = validate_matches(confirm, &self.password, "Passwords do not match");
        record(&mut errors, "confirm_password", matches);

        let full_name = validate_required(&self.full_name, "Full name is required");
        record(&mut errors, "full_name", full_name);
        let address = validate_required(&self.address, "Address is required");
        record(&mut errors, "address", address);
        record(&mut errors, "pincode", validate_pincode(&self.pincode));

        into_result("registration", errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegistrationForm {
        RegistrationForm {
            username: "ravi".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
            full_name: "Ravi Kumar".to_string(),
            address: "12 MG Road, Bengaluru".to_string(),
            pincode: "560001".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_username_trimmed_before_length() {
        let form = RegistrationForm {
            username: "  ab  ".to_string(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors["username"], "Username must be at least 3 characters");
    }

    #[test]
    fn test_whitespace_password_is_not_empty() {
        let form = RegistrationForm {
            password: "      ".to_string(),
            confirm_password: "      ".to_string(),
            ..valid()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_configured_lengths() {
        let config = ValidationConfig {
            password_min_length: 8,
            ..ValidationConfig::default()
        };
        let errors = valid().validate_with(&config).unwrap_err();
        assert_eq!(errors["password"], "Password must be at least 8 characters");
    }
}
