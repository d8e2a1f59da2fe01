pub const FORM_ID: &str = "article-form";
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";
pub const SPINNER_ID: &str = "spinner";
pub const BUTTON_TEXT_ID: &str = "btn-text";
pub const ERROR_CARD_ID: &str = "error-card";
pub const ERROR_MESSAGE_ID: &str = "error-message";
pub const URL_TAB_ID: &str = "url-tab";
pub const PDF_TAB_ID: &str = "pdf-tab";
pub const URL_INPUT_ID: &str = "url";
pub const PDF_INPUT_ID: &str = "pdf_file";

pub const ACTIVE_CLASS: &str = "active";
pub const VALID_CLASS: &str = "is-valid";
pub const INVALID_CLASS: &str = "is-invalid";
pub const HIDDEN_CLASS: &str = "d-none";

/// Fired by the tab widget once a tab has become active.
pub const TAB_SHOWN_EVENT: &str = "shown.bs.tab";

/// `<script type="application/json">` element holding an optional page config.
pub const CONFIG_SCRIPT_ID: &str = "summarize-form-config";
