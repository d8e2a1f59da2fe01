use crate::InputMode;

/// Metadata of one file chosen in the PDF input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Declared media type, e.g. `application/pdf`. May be empty.
    pub media_type: String,
    pub size: u64,
}

/// Which tab controls currently carry the "active" class.
/// An absent tab reads as inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabFlags {
    pub url_active: bool,
    pub pdf_active: bool,
}

/// What the form looked like at the moment the user submitted it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub tabs: TabFlags,
    /// Raw URL field value; `None` when the input is not on the page.
    pub url: Option<String>,
    /// Selected files; `None` when the file input is not on the page.
    pub pdf_files: Option<Vec<SelectedFile>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The form's submit event fired (default already prevented).
    SubmitRequested(FormSnapshot),
    /// A tab widget finished activating one of the two tabs.
    TabShown(InputMode),
    /// User edited the URL input.
    UrlInput(String),
    /// URL input lost focus.
    UrlBlur(String),
    /// File selection in the PDF input changed.
    PdfSelectionChanged(Vec<SelectedFile>),
}
