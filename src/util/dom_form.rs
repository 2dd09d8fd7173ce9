//! [`FormControls`] over a rendered `<form>` element.
//!
//! Controls are looked up by their `name` attribute through
//! `HTMLFormElement.elements`, so the binding follows whatever the page
//! rendered. Buttons and unnamed elements are ignored.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::util::form_controls::{ControlKind, FileUpload, FormControls, FormError};

#[derive(Clone)]
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }

    fn elements(&self) -> Vec<Element> {
        let elements = self.form.elements();
        (0..elements.length()).filter_map(|i| elements.item(i)).collect()
    }

    fn named(&self, name: &str) -> Vec<Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.get_attribute("name").as_deref() == Some(name))
            .collect()
    }

    fn options(&self, name: &str) -> Vec<HtmlInputElement> {
        self.named(name)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .filter(|input| is_group_input(input))
            .collect()
    }
}

fn is_group_input(input: &HtmlInputElement) -> bool {
    matches!(input.type_().as_str(), "radio" | "checkbox")
}

fn element_kind(el: &Element) -> Option<ControlKind> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return match input.type_().as_str() {
            "radio" | "checkbox" => Some(ControlKind::Group),
            "file" => Some(ControlKind::File),
            "submit" | "button" | "reset" | "image" => None,
            _ => Some(ControlKind::Value),
        };
    }
    if el.is_instance_of::<HtmlSelectElement>() || el.is_instance_of::<HtmlTextAreaElement>() {
        return Some(ControlKind::Value);
    }
    None
}

fn element_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

impl FormControls for DomForm {
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for el in self.elements() {
            if element_kind(&el).is_none() {
                continue;
            }
            let Some(name) = el.get_attribute("name").filter(|n| !n.is_empty()) else {
                continue;
            };
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    fn kind(&self, name: &str) -> Option<ControlKind> {
        self.named(name).iter().find_map(element_kind)
    }

    fn value(&self, name: &str) -> Option<String> {
        match self.kind(name)? {
            ControlKind::Value => self.named(name).iter().find_map(element_value),
            ControlKind::Group => self.options(name).into_iter().find(HtmlInputElement::checked).map(|o| o.value()),
            ControlKind::File => None,
        }
    }

    fn set_value(&self, name: &str, value: &str) {
        for el in self.named(name) {
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                if !is_group_input(input) && input.type_() != "file" {
                    input.set_value(value);
                    return;
                }
            } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
                select.set_value(value);
                return;
            } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
                area.set_value(value);
                return;
            }
        }
    }

    fn check_option(&self, name: &str, value: &str) -> bool {
        let options = self.options(name);
        if !options.iter().any(|o| o.value() == value) {
            return false;
        }
        for option in &options {
            option.set_checked(option.value() == value);
        }
        true
    }

    fn clear_options(&self, name: &str) {
        for option in self.options(name) {
            option.set_checked(false);
        }
    }

    async fn read_file(&self, name: &str) -> Result<Option<FileUpload>, FormError> {
        let file = self
            .named(name)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .find_map(|input| input.files().and_then(|files| files.get(0)));
        let Some(file) = file else {
            return Ok(None);
        };

        let buffer = JsFuture::from(file.array_buffer()).await.map_err(|e| FormError::FileRead {
            name: name.to_owned(),
            message: e.as_string().unwrap_or_else(|| format!("{e:?}")),
        })?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        log::debug!("read {} bytes from {name} ({})", bytes.len(), file.type_());
        Ok(Some(FileUpload { mime: file.type_(), base64: STANDARD.encode(bytes) }))
    }
}
