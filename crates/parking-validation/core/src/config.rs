//! Validation configuration
//!
//! Every field has a default, so an empty TOML document (or an empty JS
//! object handed to the WASM adapter) yields the stock behaviour.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum username length on registration (default: 3)
    #[serde(default = "default_username_min_length")]
    pub username_min_length: usize,

    /// Minimum password length on registration (default: 6)
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,

    /// Browser console log level: off, error, warn, info, debug or trace (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub classes: CssClasses,

    #[serde(default)]
    pub forms: FormIds,
}

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// CSS classes written by the presentation adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CssClasses {
    /// Added to a failing input
    #[serde(default = "default_invalid_class")]
    pub invalid: String,

    /// Class attribute of the inserted message node
    #[serde(default = "default_feedback_class")]
    pub feedback: String,

    /// Class used to find inserted message nodes when clearing
    #[serde(default = "default_marker_class")]
    pub marker: String,
}

/// Element ids of the forms to bind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormIds {
    #[serde(default = "default_registration_id")]
    pub registration: String,

    #[serde(default = "default_login_id")]
    pub login: String,

    #[serde(default = "default_add_lot_id")]
    pub add_lot: String,
}

fn default_username_min_length() -> usize {
    3
}

fn default_password_min_length() -> usize {
    6
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_invalid_class() -> String {
    "is-invalid".to_string()
}

fn default_feedback_class() -> String {
    "invalid-feedback form-error".to_string()
}

fn default_marker_class() -> String {
    "form-error".to_string()
}

fn default_registration_id() -> String {
    "register-form".to_string()
}

fn default_login_id() -> String {
    "login-form".to_string()
}

fn default_add_lot_id() -> String {
    "add-lot-form".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            username_min_length: default_username_min_length(),
            password_min_length: default_password_min_length(),
            log_level: default_log_level(),
            classes: CssClasses::default(),
            forms: FormIds::default(),
        }
    }
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            invalid: default_invalid_class(),
            feedback: default_feedback_class(),
            marker: default_marker_class(),
        }
    }
}

impl Default for FormIds {
    fn default() -> Self {
        Self {
            registration: default_registration_id(),
            login: default_login_id(),
            add_lot: default_add_lot_id(),
        }
    }
}

impl ValidationConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ValidationConfig =
            toml::from_str(content).context("Failed to parse validation config")?;
        config.check()?;
        Ok(config)
    }

    /// Rejects settings the DOM adapter cannot work with.
    ///
    /// Inserted messages are found again through `classes.marker`, so every
    /// marker class must also be a feedback class.
    pub fn check(&self) -> Result<()> {
        if self.classes.invalid.split_whitespace().next().is_none() {
            bail!("classes.invalid must name at least one class");
        }
        if self.classes.marker.split_whitespace().next().is_none() {
            bail!("classes.marker must name at least one class");
        }
        let marker = &self.classes.marker;
        let feedback: Vec<&str> = self.classes.feedback.split_whitespace().collect();
        if let Some(missing) = marker.split_whitespace().find(|c| !feedback.contains(c)) {
            bail!(
                "classes.feedback '{}' lacks marker class '{}'",
                self.classes.feedback,
                missing
            );
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            bail!("unknown log_level '{}'", self.log_level);
        }
        Ok(())
    }
}
