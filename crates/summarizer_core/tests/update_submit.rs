use std::sync::Once;

use pretty_assertions::assert_eq;
use summarizer_core::{
    update, BannerView, ButtonView, Effect, FormSnapshot, FormState, InputMode, Marker, Msg,
    SelectedFile, SubmissionState, TabFlags, MIB,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(summarizer_logging::initialize_for_tests);
}

const URL_TAB: TabFlags = TabFlags {
    url_active: true,
    pdf_active: false,
};

const PDF_TAB: TabFlags = TabFlags {
    url_active: false,
    pdf_active: true,
};

fn submit_url(state: FormState, url: &str) -> (FormState, Vec<Effect>) {
    update(
        state,
        Msg::SubmitRequested(FormSnapshot {
            tabs: URL_TAB,
            url: Some(url.to_string()),
            pdf_files: Some(Vec::new()),
        }),
    )
}

fn submit_pdf(state: FormState, files: Vec<SelectedFile>) -> (FormState, Vec<Effect>) {
    update(
        state,
        Msg::SubmitRequested(FormSnapshot {
            tabs: PDF_TAB,
            url: Some(String::new()),
            pdf_files: Some(files),
        }),
    )
}

fn file(media_type: &str, size: u64) -> SelectedFile {
    SelectedFile {
        name: "upload".to_string(),
        media_type: media_type.to_string(),
        size,
    }
}

fn error_effect(message: &str) -> Vec<Effect> {
    vec![Effect::ErrorShown {
        message: message.to_string(),
    }]
}

#[test]
fn valid_url_submission_enters_processing_and_submits() {
    init_logging();
    let (mut next, effects) = submit_url(FormState::new(), "example.com/article");
    let view = next.view();

    assert_eq!(effects, vec![Effect::SubmitForm]);
    assert_eq!(next.submission(), SubmissionState::Processing);
    assert_eq!(
        view.button,
        ButtonView {
            disabled: true,
            spinner_visible: true,
            label: "Processing...".to_string(),
        }
    );
    assert!(!view.banner.visible);
    assert!(next.consume_dirty());
}

#[test]
fn empty_url_blocks_with_enter_a_url() {
    init_logging();
    let (next, effects) = submit_url(FormState::new(), "   ");
    let view = next.view();

    assert_eq!(effects, error_effect("Please enter a URL"));
    assert_eq!(view.url_marker, Marker::Invalid);
    assert_eq!(
        view.banner,
        BannerView {
            visible: true,
            message: "Please enter a URL".to_string(),
        }
    );
    assert!(!view.button.disabled);
    assert_eq!(view.button.label, "Summarize Content");
}

#[test]
fn malformed_url_blocks_with_valid_url_message() {
    init_logging();
    for bad in ["example", "http://localhost", "example.com/oops.", "two words.com"] {
        let (next, effects) = submit_url(FormState::new(), bad);
        assert_eq!(effects, error_effect("Please enter a valid URL"), "{bad}");
        assert_eq!(next.view().url_marker, Marker::Invalid);
        assert_eq!(next.submission(), SubmissionState::Idle);
    }
}

#[test]
fn invalid_submit_replaces_a_previous_valid_marker() {
    init_logging();
    let (state, _) = update(FormState::new(), Msg::UrlInput("example.com".to_string()));
    assert_eq!(state.view().url_marker, Marker::Valid);

    let (next, _) = submit_url(state, "example");
    assert_eq!(next.view().url_marker, Marker::Invalid);
}

#[test]
fn missing_url_input_blocks_submission() {
    init_logging();
    let (_, effects) = update(
        FormState::new(),
        Msg::SubmitRequested(FormSnapshot {
            tabs: URL_TAB,
            url: None,
            pdf_files: None,
        }),
    );
    assert_eq!(effects, error_effect("Please enter a URL"));
}

#[test]
fn no_active_tab_falls_back_to_url_mode() {
    init_logging();
    let (next, effects) = update(
        FormState::new(),
        Msg::SubmitRequested(FormSnapshot {
            tabs: TabFlags::default(),
            url: Some(String::new()),
            pdf_files: Some(vec![file("application/pdf", 10)]),
        }),
    );
    assert_eq!(next.mode(), InputMode::Url);
    assert_eq!(effects, error_effect("Please enter a URL"));
}

#[test]
fn pdf_mode_ignores_the_url_field() {
    init_logging();
    let (next, effects) = update(
        FormState::new(),
        Msg::SubmitRequested(FormSnapshot {
            tabs: PDF_TAB,
            url: Some("not a url".to_string()),
            pdf_files: Some(vec![file("application/pdf", 1024)]),
        }),
    );
    assert_eq!(next.mode(), InputMode::Pdf);
    assert_eq!(effects, vec![Effect::SubmitForm]);
    assert_eq!(next.view().url_marker, Marker::Untouched);
}

#[test]
fn pdf_without_file_blocks() {
    init_logging();
    let (next, effects) = submit_pdf(FormState::new(), Vec::new());
    assert_eq!(effects, error_effect("Please select a PDF file"));
    assert_eq!(next.view().pdf_marker, Marker::Invalid);

    let (_, effects) = update(
        FormState::new(),
        Msg::SubmitRequested(FormSnapshot {
            tabs: PDF_TAB,
            url: None,
            pdf_files: None,
        }),
    );
    assert_eq!(effects, error_effect("Please select a PDF file"));
}

#[test]
fn pdf_at_limit_submits() {
    init_logging();
    let (next, effects) = submit_pdf(FormState::new(), vec![file("application/pdf", 26_214_400)]);
    assert_eq!(effects, vec![Effect::SubmitForm]);
    assert!(next.view().button.disabled);
}

#[test]
fn pdf_one_byte_over_limit_blocks() {
    init_logging();
    let (_, effects) = submit_pdf(FormState::new(), vec![file("application/pdf", 26_214_401)]);
    assert_eq!(effects, error_effect("PDF file is too large (max 25MB)"));
}

#[test]
fn thirty_megabyte_pdf_keeps_button_enabled() {
    init_logging();
    let (next, effects) = submit_pdf(FormState::new(), vec![file("application/pdf", 30 * MIB)]);
    let view = next.view();

    assert_eq!(effects, error_effect("PDF file is too large (max 25MB)"));
    assert!(!effects.contains(&Effect::SubmitForm));
    assert_eq!(view.banner.message, "PDF file is too large (max 25MB)");
    assert!(view.banner.visible);
    assert!(!view.button.disabled);
    assert!(!view.button.spinner_visible);
}

#[test]
fn png_is_rejected_regardless_of_size() {
    init_logging();
    for size in [0, 1, 26_214_400, 100 * MIB] {
        let (_, effects) = submit_pdf(FormState::new(), vec![file("image/png", size)]);
        assert_eq!(effects, error_effect("The selected file is not a PDF"));
    }
}

#[test]
fn resubmitting_after_error_hides_banner_before_validating() {
    init_logging();
    let (state, _) = submit_url(FormState::new(), "");
    assert!(state.view().banner.visible);

    let (next, effects) = submit_url(state, "https://example.com");
    assert_eq!(effects, vec![Effect::SubmitForm]);
    assert!(!next.view().banner.visible);
}

#[test]
fn configured_limit_drives_gate_and_message() {
    init_logging();
    let config = summarizer_core::FormConfig {
        max_pdf_bytes: 5 * MIB,
        ..Default::default()
    };
    let state = FormState::with_config(config);
    let (_, effects) = submit_pdf(state, vec![file("application/pdf", 5 * MIB + 1)]);
    assert_eq!(effects, error_effect("PDF file is too large (max 5MB)"));
}
