//! Submit-event wiring for the three forms

use std::cell::RefCell;
use std::str::FromStr;

use parking_validation_core::{
    handle_submit, missing_fields, FormKind, SubmitOutcome, ValidationConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::dom::{document, DomError, DomErrors, DomFields};

/// Marks a form that already has our submit listener
pub const BOUND_ATTR: &str = "data-parking-validate";

thread_local! {
    static CONFIG: RefCell<ValidationConfig> = RefCell::new(ValidationConfig::default());
}

pub fn current_config() -> ValidationConfig {
    CONFIG.with(|config| config.borrow().clone())
}

/// Installs `config` and applies its log level
pub fn set_config(config: ValidationConfig) {
    match log::LevelFilter::from_str(&config.log_level) {
        Ok(level) => log::set_max_level(level),
        Err(_) => log::warn!("ignoring unknown log level '{}'", config.log_level),
    }
    CONFIG.with(|current| *current.borrow_mut() = config);
}

/// Validates the form of `kind` as it currently stands and renders the result.
///
/// Falls back to the whole page when the form element itself is absent.
pub fn validate_form(kind: FormKind) -> Result<SubmitOutcome, DomError> {
    let config = current_config();
    let document = document()?;
    let root = match document.get_element_by_id(kind.form_id(&config)) {
        Some(form) => form,
        None => document.document_element().ok_or(DomError::NoDocument)?,
    };

    submit(&root, kind, &config)
}

fn submit(
    root: &Element,
    kind: FormKind,
    config: &ValidationConfig,
) -> Result<SubmitOutcome, DomError> {
    let document = document()?;
    let fields = DomFields::new(root);
    for field in missing_fields(kind, &fields) {
        log::warn!("{} form has no input with id '{}'", kind, field);
    }

    let mut errors = DomErrors::new(&document, root, &config.classes);
    handle_submit(kind, &fields, &mut errors, config)
}

/// Attaches submit listeners to every configured form on the page.
///
/// Returns how many forms were newly bound; forms bound earlier are skipped.
pub fn bind_forms() -> Result<u32, DomError> {
    let config = current_config();
    let document = document()?;
    let mut bound = 0;

    for kind in FormKind::ALL {
        let id = kind.form_id(&config);
        let Some(form) = document.get_element_by_id(id) else {
            log::debug!("no #{} on this page", id);
            continue;
        };
        if form.has_attribute(BOUND_ATTR) {
            continue;
        }
        attach(&form, kind)?;
        form.set_attribute(BOUND_ATTR, kind.name())?;
        bound += 1;
    }

    log::debug!("bound {} form(s)", bound);
    Ok(bound)
}

fn attach(form: &Element, kind: FormKind) -> Result<(), DomError> {
    let target = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        // Read the config at submit time so later bindForms calls apply
        match submit(&target, kind, &current_config()) {
            Ok(outcome) => {
                if outcome.is_cancelled() {
                    event.prevent_default();
                }
            }
            Err(err) => {
                log::error!("{} form validation failed: {}", kind, err);
                event.prevent_default();
            }
        }
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // Listener lives as long as the page
    on_submit.forget();
    Ok(())
}

/// Binds now, or once the document has finished parsing
pub fn bind_when_ready() -> Result<(), DomError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        return bind_forms().map(|_| ());
    }

    let on_ready = Closure::once(move |_: Event| {
        if let Err(err) = bind_forms() {
            log::error!("binding forms failed: {}", err);
        }
    });

    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}
