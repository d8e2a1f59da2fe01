use std::sync::Once;

use summarizer_core::{update, Effect, FormState, Marker, Msg, SelectedFile, MIB};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(summarizer_logging::initialize_for_tests);
}

fn select(state: FormState, media_type: &str, size: u64) -> (FormState, Vec<Effect>) {
    update(
        state,
        Msg::PdfSelectionChanged(vec![SelectedFile {
            name: "doc".to_string(),
            media_type: media_type.to_string(),
            size,
        }]),
    )
}

#[test]
fn url_typing_marks_valid_and_invalid_without_effects() {
    init_logging();
    let (state, effects) = update(FormState::new(), Msg::UrlInput("exam".to_string()));
    assert_eq!(state.view().url_marker, Marker::Invalid);
    assert!(effects.is_empty());
    assert!(!state.view().banner.visible);

    let (state, effects) = update(state, Msg::UrlInput("example.com".to_string()));
    assert_eq!(state.view().url_marker, Marker::Valid);
    assert!(effects.is_empty());
}

#[test]
fn clearing_the_url_field_clears_markers() {
    init_logging();
    let (state, _) = update(FormState::new(), Msg::UrlInput("bad".to_string()));
    let (state, effects) = update(state, Msg::UrlBlur("  ".to_string()));
    assert_eq!(state.view().url_marker, Marker::Untouched);
    assert!(effects.is_empty());
}

#[test]
fn live_url_check_is_idempotent() {
    init_logging();
    for value in ["example.com", "nope", ""] {
        let (mut once, _) = update(FormState::new(), Msg::UrlInput(value.to_string()));
        once.consume_dirty();
        let (mut twice, effects) = update(once.clone(), Msg::UrlBlur(value.to_string()));

        assert_eq!(once.view().url_marker, twice.view().url_marker);
        assert!(effects.is_empty());
        assert!(!twice.consume_dirty(), "re-check of {value:?} must not toggle");
    }
}

#[test]
fn good_pdf_selection_marks_valid_and_hides_banner() {
    init_logging();
    let (state, _) = select(FormState::new(), "image/png", 10);
    assert!(state.view().banner.visible);

    let (state, effects) = select(state, "application/pdf", 26_214_400);
    let view = state.view();
    assert!(effects.is_empty());
    assert_eq!(view.pdf_marker, Marker::Valid);
    assert!(!view.banner.visible);
}

#[test]
fn bad_pdf_selection_shows_banner_immediately() {
    init_logging();
    let (state, effects) = select(FormState::new(), "image/png", 10);
    assert_eq!(
        effects,
        vec![Effect::ErrorShown {
            message: "The selected file is not a PDF".to_string()
        }]
    );
    assert_eq!(state.view().pdf_marker, Marker::Invalid);
    assert_eq!(state.view().banner.message, "The selected file is not a PDF");

    let (state, effects) = select(state, "application/pdf", 30 * MIB);
    assert_eq!(
        effects,
        vec![Effect::ErrorShown {
            message: "PDF file is too large (max 25MB)".to_string()
        }]
    );
    assert_eq!(state.view().pdf_marker, Marker::Invalid);
}

#[test]
fn valid_after_invalid_selection_leaves_single_marker() {
    init_logging();
    let (state, _) = select(FormState::new(), "text/plain", 1);
    let (state, _) = select(state, "application/pdf", 1);
    assert_eq!(state.view().pdf_marker, Marker::Valid);
}

#[test]
fn emptied_pdf_selection_clears_markers_without_touching_banner() {
    init_logging();
    let (state, _) = select(FormState::new(), "text/plain", 1);
    let (state, effects) = update(state, Msg::PdfSelectionChanged(Vec::new()));
    assert!(effects.is_empty());
    assert_eq!(state.view().pdf_marker, Marker::Untouched);
    assert!(state.view().banner.visible);
}
