use serde::{Deserialize, Serialize};

use super::read;
use crate::adapter::FieldSource;
use crate::config::ValidationConfig;
use crate::string::validate_required;
use crate::{into_result, record, FieldErrors, Validate};

/// Presence checks only; credentials are verified by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub const FIELDS: &'static [&'static str] = &["username", "password"];

    pub fn from_source(source: &impl FieldSource) -> Self {
        Self {
            username: read(source, "username"),
            password: read(source, "password"),
        }
    }
}

impl Validate for LoginForm {
    fn validate_with(&self, _config: &ValidationConfig) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = validate_required(&self.username, "Username is required");
        record(&mut errors, "username", username);
        if self.password.is_empty() {
            let required = Err("Password is required".to_string());
            record(&mut errors, "password", required);
        }

        into_result("login", errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login() {
        let form = LoginForm {
            username: "ravi".to_string(),
            password: "x".to_string(),
        };
        assert!(form.validate().is_ok());

        let form = LoginForm {
            username: " ".to_string(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors["username"], "Username is required");
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn test_login_has_no_length_rules() {
        let form = LoginForm {
            username: "ab".to_string(),
            password: "1".to_string(),
        };
        assert!(form.is_valid());
    }
}
