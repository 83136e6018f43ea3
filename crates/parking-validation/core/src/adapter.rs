//! Presentation adapter seam
//!
//! The submit flow (read values, validate, clear old messages, show new ones,
//! decide whether to cancel) is written against two traits so the browser
//! binding only has to provide DOM access.

use std::collections::{BTreeMap, HashMap};

use crate::config::ValidationConfig;
use crate::forms::{validate_values, FormKind};
use crate::FieldErrors;

/// Where field values come from (a DOM form, a JSON object, a test map)
pub trait FieldSource {
    /// Current value of `field`, or `None` when the field does not exist
    fn value(&self, field: &str) -> Option<String>;
}

impl FieldSource for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

impl FieldSource for HashMap<String, String> {
    fn value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

/// Where field errors are displayed
pub trait ErrorSurface {
    type Error;

    /// Remove every message and invalid marker shown by an earlier pass
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Mark `field` invalid and show `message` next to it
    fn show(&mut self, field: &str, message: &str) -> Result<(), Self::Error>;
}

/// What the submit handler should do with the event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed,
    Cancel(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SubmitOutcome::Cancel(_))
    }
}

/// Runs one validation pass for a submit of `kind`.
///
/// Old decorations are always cleared, even when the form is now valid.
pub fn handle_submit<S: ErrorSurface>(
    kind: FormKind,
    source: &impl FieldSource,
    surface: &mut S,
    config: &ValidationConfig,
) -> Result<SubmitOutcome, S::Error> {
    let result = validate_values(kind, source, config);

    surface.clear()?;

    match result {
        Ok(()) => Ok(SubmitOutcome::Proceed),
        Err(errors) => {
            for (field, message) in &errors {
                surface.show(field, message)?;
            }
            tracing::debug!(form = %kind, errors = errors.len(), "submit cancelled");
            Ok(SubmitOutcome::Cancel(errors))
        }
    }
}
