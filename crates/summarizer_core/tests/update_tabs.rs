use std::sync::Once;

use summarizer_core::{update, FormSnapshot, FormState, InputMode, Marker, Msg, SelectedFile, TabFlags};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(summarizer_logging::initialize_for_tests);
}

fn messy_state() -> FormState {
    let (state, _) = update(FormState::new(), Msg::UrlInput("example.com".to_string()));
    let (state, _) = update(
        state,
        Msg::PdfSelectionChanged(vec![SelectedFile {
            name: "photo.png".to_string(),
            media_type: "image/png".to_string(),
            size: 10,
        }]),
    );
    assert!(state.view().banner.visible);
    state
}

#[test]
fn tab_switch_clears_markers_and_banner() {
    init_logging();
    for mode in [InputMode::Url, InputMode::Pdf] {
        let (state, effects) = update(messy_state(), Msg::TabShown(mode));
        let view = state.view();

        assert!(effects.is_empty());
        assert_eq!(view.mode, mode);
        assert_eq!(view.url_marker, Marker::Untouched);
        assert_eq!(view.pdf_marker, Marker::Untouched);
        assert!(!view.banner.visible);
    }
}

#[test]
fn tab_switch_on_clean_state_is_quiet() {
    init_logging();
    let (mut state, effects) = update(FormState::new(), Msg::TabShown(InputMode::Url));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn tab_switch_then_submit_uses_submitted_tab_flags() {
    init_logging();
    let (state, _) = update(FormState::new(), Msg::TabShown(InputMode::Pdf));
    let (state, effects) = update(
        state,
        Msg::SubmitRequested(FormSnapshot {
            tabs: TabFlags {
                url_active: true,
                pdf_active: false,
            },
            url: Some("https://example.com/a".to_string()),
            pdf_files: None,
        }),
    );
    assert_eq!(state.mode(), InputMode::Url);
    assert_eq!(effects, vec![summarizer_core::Effect::SubmitForm]);
}
