//! Element handles looked up once at mount.
//!
//! Every handle is optional. Commands aimed at a missing element are dropped
//! before they are applied; that is how partial page markup is supported.

use summarizer_core::{Field, FormSnapshot, Marker, SelectedFile, TabFlags};
use summarizer_logging::{form_debug, form_warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use super::config::DomBindings;
use super::ui::{applicable, marker_classes, DomCommand, Role};

pub struct FormElements {
    bindings: DomBindings,
    form: Option<HtmlFormElement>,
    submit_button: Option<Element>,
    spinner: Option<Element>,
    button_text: Option<Element>,
    error_card: Option<Element>,
    error_message: Option<Element>,
    url_tab: Option<Element>,
    pdf_tab: Option<Element>,
    url_input: Option<HtmlInputElement>,
    pdf_input: Option<HtmlInputElement>,
}

impl FormElements {
    pub fn lookup(document: &Document, bindings: DomBindings) -> Self {
        let find = |role: Role| {
            let element = document.get_element_by_id(bindings.id(role));
            if element.is_none() {
                form_debug!("element #{} not on page", bindings.id(role));
            }
            element
        };
        let input = |role: Role| {
            find(role).and_then(|element| match element.dyn_into::<HtmlInputElement>() {
                Ok(input) => Some(input),
                Err(_) => {
                    form_warn!("#{} is not an <input>", bindings.id(role));
                    None
                }
            })
        };

        Self {
            form: find(Role::Form).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()),
            submit_button: find(Role::SubmitButton),
            spinner: find(Role::Spinner),
            button_text: find(Role::ButtonText),
            error_card: find(Role::ErrorCard),
            error_message: find(Role::ErrorMessage),
            url_tab: find(Role::UrlTab),
            pdf_tab: find(Role::PdfTab),
            url_input: input(Role::UrlInput),
            pdf_input: input(Role::PdfInput),
            bindings,
        }
    }

    #[cfg(test)]
    pub fn detached(bindings: DomBindings) -> Self {
        Self {
            bindings,
            form: None,
            submit_button: None,
            spinner: None,
            button_text: None,
            error_card: None,
            error_message: None,
            url_tab: None,
            pdf_tab: None,
            url_input: None,
            pdf_input: None,
        }
    }

    pub fn get(&self, role: Role) -> Option<&Element> {
        match role {
            Role::Form => as_element(&self.form),
            Role::SubmitButton => self.submit_button.as_ref(),
            Role::Spinner => self.spinner.as_ref(),
            Role::ButtonText => self.button_text.as_ref(),
            Role::ErrorCard => self.error_card.as_ref(),
            Role::ErrorMessage => self.error_message.as_ref(),
            Role::UrlTab => self.url_tab.as_ref(),
            Role::PdfTab => self.pdf_tab.as_ref(),
            Role::UrlInput => as_element(&self.url_input),
            Role::PdfInput => as_element(&self.pdf_input),
        }
    }

    pub fn form(&self) -> Option<&HtmlFormElement> {
        self.form.as_ref()
    }

    /// Banner needs both the card and its message node to be usable.
    pub fn error_banner(&self) -> Option<&Element> {
        self.error_message.as_ref()?;
        self.error_card.as_ref()
    }

    pub fn url_value(&self) -> Option<String> {
        self.url_input.as_ref().map(HtmlInputElement::value)
    }

    pub fn selected_pdf_files(&self) -> Option<Vec<SelectedFile>> {
        self.pdf_input.as_ref().map(selected_files)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            tabs: TabFlags {
                url_active: self.has_class(Role::UrlTab, &self.bindings.active_class),
                pdf_active: self.has_class(Role::PdfTab, &self.bindings.active_class),
            },
            url: self.url_value(),
            pdf_files: self.selected_pdf_files(),
        }
    }

    pub fn apply(&self, commands: &[DomCommand]) {
        for command in applicable(commands, |role| self.get(role).is_some()) {
            if let Err(err) = self.apply_one(command) {
                form_warn!("DOM update {:?} failed: {:?}", command, err);
            }
        }
    }

    fn apply_one(&self, command: &DomCommand) -> Result<(), JsValue> {
        match command {
            DomCommand::SetMarker { field, marker } => self.set_marker(*field, *marker),
            DomCommand::SetHidden { role, hidden } => {
                let Some(element) = self.get(*role) else {
                    return Ok(());
                };
                let classes = element.class_list();
                if *hidden {
                    classes.add_1(&self.bindings.hidden_class)
                } else {
                    classes.remove_1(&self.bindings.hidden_class)
                }
            }
            DomCommand::SetText { role, text } => {
                if let Some(element) = self.get(*role) {
                    element.set_text_content(Some(text.as_str()));
                }
                Ok(())
            }
            DomCommand::SetDisabled { role, disabled } => {
                let Some(element) = self.get(*role) else {
                    return Ok(());
                };
                if *disabled {
                    element.set_attribute("disabled", "")
                } else {
                    element.remove_attribute("disabled")
                }
            }
        }
    }

    fn set_marker(&self, field: Field, marker: Marker) -> Result<(), JsValue> {
        let Some(element) = self.get(Role::for_field(field)) else {
            return Ok(());
        };
        let classes = element.class_list();
        let (remove, add) = marker_classes(
            marker,
            &self.bindings.valid_class,
            &self.bindings.invalid_class,
        );
        for class in remove {
            classes.remove_1(class)?;
        }
        match add {
            Some(class) => classes.add_1(class),
            None => Ok(()),
        }
    }

    fn has_class(&self, role: Role, class: &str) -> bool {
        self.get(role)
            .map(|element| element.class_list().contains(class))
            .unwrap_or(false)
    }
}

fn as_element<T: AsRef<Element>>(handle: &Option<T>) -> Option<&Element> {
    handle.as_ref().map(AsRef::as_ref)
}

fn selected_files(input: &HtmlInputElement) -> Vec<SelectedFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| SelectedFile {
            name: file.name(),
            media_type: file.type_(),
            // Blob sizes are whole byte counts carried in an f64.
            size: file.size() as u64,
        })
        .collect()
}
