//! Page-level configuration: validation limits plus the DOM contract.
//!
//! Pages may embed a JSON object under the id in
//! [`CONFIG_SCRIPT_ID`](super::ui::constants::CONFIG_SCRIPT_ID); anything it
//! leaves out keeps its default.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use summarizer_core::FormConfig;
use summarizer_logging::form_warn;

use super::ui::constants::*;
use super::ui::Role;

/// Element ids, class names and the tab event the form binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomBindings {
    pub form_id: String,
    pub submit_button_id: String,
    pub spinner_id: String,
    pub button_text_id: String,
    pub error_card_id: String,
    pub error_message_id: String,
    pub url_tab_id: String,
    pub pdf_tab_id: String,
    pub url_input_id: String,
    pub pdf_input_id: String,
    pub active_class: String,
    pub valid_class: String,
    pub invalid_class: String,
    pub hidden_class: String,
    pub tab_shown_event: String,
}

impl Default for DomBindings {
    fn default() -> Self {
        Self {
            form_id: FORM_ID.to_string(),
            submit_button_id: SUBMIT_BUTTON_ID.to_string(),
            spinner_id: SPINNER_ID.to_string(),
            button_text_id: BUTTON_TEXT_ID.to_string(),
            error_card_id: ERROR_CARD_ID.to_string(),
            error_message_id: ERROR_MESSAGE_ID.to_string(),
            url_tab_id: URL_TAB_ID.to_string(),
            pdf_tab_id: PDF_TAB_ID.to_string(),
            url_input_id: URL_INPUT_ID.to_string(),
            pdf_input_id: PDF_INPUT_ID.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
            valid_class: VALID_CLASS.to_string(),
            invalid_class: INVALID_CLASS.to_string(),
            hidden_class: HIDDEN_CLASS.to_string(),
            tab_shown_event: TAB_SHOWN_EVENT.to_string(),
        }
    }
}

impl DomBindings {
    pub fn id(&self, role: Role) -> &str {
        match role {
            Role::Form => &self.form_id,
            Role::SubmitButton => &self.submit_button_id,
            Role::Spinner => &self.spinner_id,
            Role::ButtonText => &self.button_text_id,
            Role::ErrorCard => &self.error_card_id,
            Role::ErrorMessage => &self.error_message_id,
            Role::UrlTab => &self.url_tab_id,
            Role::PdfTab => &self.pdf_tab_id,
            Role::UrlInput => &self.url_input_id,
            Role::PdfInput => &self.pdf_input_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub form: FormConfig,
    pub dom: DomBindings,
}

impl PageConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: PageConfig =
            serde_json::from_str(raw).context("summarize form config is not valid JSON")?;
        config
            .form
            .validate()
            .context("summarize form config has invalid limits")?;
        Ok(config)
    }

    /// Like [`PageConfig::from_json`], but logs a bad config and returns the
    /// defaults instead.
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            form_warn!("{:#}; falling back to defaults", err);
            Self::default()
        })
    }
}
