//! The three application forms and a kind-driven entry point over them

use std::fmt;
use std::str::FromStr;

use crate::adapter::FieldSource;
use crate::config::ValidationConfig;
use crate::{FieldErrors, Validate};

mod add_lot;
mod login;
mod registration;

pub use add_lot::AddLotForm;
pub use login::LoginForm;
pub use registration::RegistrationForm;

/// Which form is being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Registration,
    Login,
    AddLot,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Registration, FormKind::Login, FormKind::AddLot];

    /// Field ids read from the form, in display order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Registration => RegistrationForm::FIELDS,
            FormKind::Login => LoginForm::FIELDS,
            FormKind::AddLot => AddLotForm::FIELDS,
        }
    }

    /// Element id of the form under the given configuration
    pub fn form_id(self, config: &ValidationConfig) -> &str {
        match self {
            FormKind::Registration => &config.forms.registration,
            FormKind::Login => &config.forms.login,
            FormKind::AddLot => &config.forms.add_lot,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormKind::Registration => "registration",
            FormKind::Login => "login",
            FormKind::AddLot => "add_lot",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "registration" | "register" => Ok(FormKind::Registration),
            "login" => Ok(FormKind::Login),
            "add_lot" | "add-lot" | "addlot" => Ok(FormKind::AddLot),
            other => Err(format!("Unknown form kind '{}'", other)),
        }
    }
}

/// Reads the fields of `kind` from `source` and validates them.
///
/// Fields the source does not have are read as empty.
pub fn validate_values(
    kind: FormKind,
    source: &impl FieldSource,
    config: &ValidationConfig,
) -> Result<(), FieldErrors> {
    match kind {
        FormKind::Registration => RegistrationForm::from_source(source).validate_with(config),
        FormKind::Login => LoginForm::from_source(source).validate_with(config),
        FormKind::AddLot => AddLotForm::from_source(source).validate_with(config),
    }
}

/// Fields of `kind` that `source` cannot supply, in display order
pub fn missing_fields(kind: FormKind, source: &impl FieldSource) -> Vec<&'static str> {
    kind.fields()
        .iter()
        .copied()
        .filter(|field| source.value(field).is_none())
        .collect()
}

pub(crate) fn read(source: &impl FieldSource, field: &str) -> String {
    source.value(field).unwrap_or_default()
}
