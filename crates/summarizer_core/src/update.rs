use summarizer_logging::{form_debug, form_info};

use crate::{
    check_pdf, check_url_live, check_url_strict, Effect, Field, FormState, InputMode, Marker, Msg,
    SelectedFile, ValidationError,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::SubmitRequested(snapshot) => {
            state.hide_banner();
            let mode = InputMode::resolve(snapshot.tabs);
            state.set_mode(mode);

            let (field, outcome) = match mode {
                InputMode::Url => (Field::Url, check_url_strict(snapshot.url.as_deref())),
                InputMode::Pdf => {
                    let files = snapshot.pdf_files.as_deref().unwrap_or_default();
                    (Field::Pdf, check_pdf(files, state.config()).map(|_| ()))
                }
            };

            match outcome {
                Ok(()) => {
                    form_info!("submit accepted mode={:?}", mode);
                    state.start_processing();
                    vec![Effect::SubmitForm]
                }
                Err(err) => reject(&mut state, field, err),
            }
        }
        Msg::TabShown(mode) => {
            state.set_mode(mode);
            state.clear_markers();
            state.hide_banner();
            Vec::new()
        }
        Msg::UrlInput(value) | Msg::UrlBlur(value) => {
            state.set_marker(Field::Url, check_url_live(&value));
            Vec::new()
        }
        Msg::PdfSelectionChanged(files) => pdf_selection_changed(&mut state, &files),
    };

    (state, effects)
}

fn pdf_selection_changed(state: &mut FormState, files: &[SelectedFile]) -> Vec<Effect> {
    if files.is_empty() {
        state.set_marker(Field::Pdf, Marker::Untouched);
        return Vec::new();
    }
    match check_pdf(files, state.config()).map(|file| file.size) {
        Ok(size) => {
            form_debug!("pdf selection ok size={}", size);
            state.set_marker(Field::Pdf, Marker::Valid);
            state.hide_banner();
            Vec::new()
        }
        Err(err) => reject(state, Field::Pdf, err),
    }
}

fn reject(state: &mut FormState, field: Field, err: ValidationError) -> Vec<Effect> {
    form_debug!("validation failed field={:?}: {:?}", field, err);
    let message = err.to_string();
    state.set_marker(field, Marker::Invalid);
    state.show_error(message.clone());
    vec![Effect::ErrorShown { message }]
}
