use summarizer_core::{Field, FormViewModel};

use super::commands::{DomCommand, Role};

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &FormViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    cmds.push(DomCommand::SetMarker {
        field: Field::Url,
        marker: view.url_marker,
    });
    cmds.push(DomCommand::SetMarker {
        field: Field::Pdf,
        marker: view.pdf_marker,
    });

    // A hidden banner keeps its last text.
    if view.banner.visible {
        cmds.push(DomCommand::SetText {
            role: Role::ErrorMessage,
            text: view.banner.message.clone(),
        });
    }
    cmds.push(DomCommand::SetHidden {
        role: Role::ErrorCard,
        hidden: !view.banner.visible,
    });

    cmds.push(DomCommand::SetDisabled {
        role: Role::SubmitButton,
        disabled: view.button.disabled,
    });
    cmds.push(DomCommand::SetHidden {
        role: Role::Spinner,
        hidden: !view.button.spinner_visible,
    });
    cmds.push(DomCommand::SetText {
        role: Role::ButtonText,
        text: view.button.label.clone(),
    });

    cmds
}
