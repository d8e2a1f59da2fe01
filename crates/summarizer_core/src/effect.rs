#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Perform the real, non-intercepted submission of the form.
    SubmitForm,
    /// A validation error was put on the banner; bring it into view, or log
    /// the message when the page has no banner.
    ErrorShown { message: String },
}
