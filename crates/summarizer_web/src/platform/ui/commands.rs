use summarizer_core::{Field, Marker};

/// Elements the form binds to, by purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Form,
    SubmitButton,
    Spinner,
    ButtonText,
    ErrorCard,
    ErrorMessage,
    UrlTab,
    PdfTab,
    UrlInput,
    PdfInput,
}

impl Role {
    #[cfg(test)]
    pub const ALL: [Role; 10] = [
        Role::Form,
        Role::SubmitButton,
        Role::Spinner,
        Role::ButtonText,
        Role::ErrorCard,
        Role::ErrorMessage,
        Role::UrlTab,
        Role::PdfTab,
        Role::UrlInput,
        Role::PdfInput,
    ];

    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Url => Role::UrlInput,
            Field::Pdf => Role::PdfInput,
        }
    }
}

/// One DOM mutation. Applying a command whose target is missing is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetMarker { field: Field, marker: Marker },
    SetHidden { role: Role, hidden: bool },
    SetText { role: Role, text: String },
    SetDisabled { role: Role, disabled: bool },
}

impl DomCommand {
    pub fn target(&self) -> Role {
        match self {
            DomCommand::SetMarker { field, .. } => Role::for_field(*field),
            DomCommand::SetHidden { role, .. }
            | DomCommand::SetText { role, .. }
            | DomCommand::SetDisabled { role, .. } => *role,
        }
    }
}

/// Keeps the commands whose target is on the page.
///
/// The error banner is all-or-nothing: unless both the card and its message
/// node are present, no banner command survives.
pub fn applicable<F>(commands: &[DomCommand], present: F) -> Vec<&DomCommand>
where
    F: Fn(Role) -> bool,
{
    let banner = present(Role::ErrorCard) && present(Role::ErrorMessage);
    commands
        .iter()
        .filter(|command| match command.target() {
            Role::ErrorCard | Role::ErrorMessage => banner,
            role => present(role),
        })
        .collect()
}

/// Classes to drop and the class to add so that at most one marker class
/// remains on the input.
pub fn marker_classes<'a>(
    marker: Marker,
    valid: &'a str,
    invalid: &'a str,
) -> (Vec<&'a str>, Option<&'a str>) {
    match marker {
        Marker::Untouched => (vec![valid, invalid], None),
        Marker::Valid => (vec![invalid], Some(valid)),
        Marker::Invalid => (vec![valid], Some(invalid)),
    }
}
