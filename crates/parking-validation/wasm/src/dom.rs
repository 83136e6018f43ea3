//! DOM access for the submit flow: reading field values and rendering
//! field errors next to their inputs.

use parking_validation_core::{CssClasses, ErrorSurface, FieldSource};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList,
};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("field '{0}' has no parent node")]
    NoParent(String),

    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// ".a.b" for the class list "a b"
pub fn class_selector(classes: &str) -> String {
    classes.split_whitespace().map(|c| format!(".{}", c)).collect()
}

fn element_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

fn elements(list: NodeList) -> impl Iterator<Item = Element> {
    (0..list.length())
        .filter_map(move |i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

/// `[id="..."]`, which unlike `#...` needs no escaping for ids starting with a digit
pub fn id_selector(id: &str) -> String {
    format!("[id=\"{}\"]", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// The element with id `id` inside `root`
fn find_field(root: &Element, id: &str) -> Option<Element> {
    root.query_selector(&id_selector(id)).ok().flatten()
}

/// Field values looked up by element id inside one form (or the whole page)
pub struct DomFields<'a> {
    root: &'a Element,
}

impl<'a> DomFields<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self { root }
    }
}

impl FieldSource for DomFields<'_> {
    fn value(&self, field: &str) -> Option<String> {
        find_field(self.root, field).and_then(|el| element_value(&el))
    }
}

/// Error decorations inside one form (or the whole page)
pub struct DomErrors<'a> {
    document: &'a Document,
    root: &'a Element,
    classes: &'a CssClasses,
}

impl<'a> DomErrors<'a> {
    pub fn new(document: &'a Document, root: &'a Element, classes: &'a CssClasses) -> Self {
        Self {
            document,
            root,
            classes,
        }
    }
}

impl ErrorSurface for DomErrors<'_> {
    type Error = DomError;

    fn clear(&mut self) -> Result<(), DomError> {
        let invalid = self.root.query_selector_all(&class_selector(&self.classes.invalid))?;
        for element in elements(invalid) {
            let class_list = element.class_list();
            for class in self.classes.invalid.split_whitespace() {
                class_list.remove_1(class)?;
            }
        }

        // querySelectorAll is a static list, removal while iterating is fine
        let messages = self.root.query_selector_all(&class_selector(&self.classes.marker))?;
        for element in elements(messages) {
            element.remove();
        }
        Ok(())
    }

    fn show(&mut self, field: &str, message: &str) -> Result<(), DomError> {
        let Some(element) = find_field(self.root, field) else {
            log::warn!("cannot show '{}' for missing field '{}'", message, field);
            return Ok(());
        };

        let class_list = element.class_list();
        for class in self.classes.invalid.split_whitespace() {
            class_list.add_1(class)?;
        }

        let feedback = self.document.create_element("div")?;
        feedback.set_class_name(&self.classes.feedback);
        feedback.set_text_content(Some(message));

        element
            .parent_node()
            .ok_or_else(|| DomError::NoParent(field.to_string()))?
            .append_child(&feedback)?;
        Ok(())
    }
}
