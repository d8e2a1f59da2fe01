use crate::view_model::{BannerView, ButtonView, FormViewModel};
use crate::{FormConfig, TabFlags};

/// Which input pathway the form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Url,
    Pdf,
}

impl InputMode {
    /// URL tab active wins, then PDF tab active; with neither, fall back to
    /// the URL pathway.
    pub fn resolve(tabs: TabFlags) -> Self {
        if tabs.url_active {
            InputMode::Url
        } else if tabs.pdf_active {
            InputMode::Pdf
        } else {
            InputMode::Url
        }
    }
}

/// Validation marker on one input. A single value per field keeps the valid
/// and invalid classes mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Url,
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Banner {
    visible: bool,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    config: FormConfig,
    mode: InputMode,
    url_marker: Marker,
    pdf_marker: Marker,
    banner: Banner,
    submission: SubmissionState,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn marker(&self, field: Field) -> Marker {
        match field {
            Field::Url => self.url_marker,
            Field::Pdf => self.pdf_marker,
        }
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn view(&self) -> FormViewModel {
        let processing = self.submission == SubmissionState::Processing;
        FormViewModel {
            mode: self.mode,
            url_marker: self.url_marker,
            pdf_marker: self.pdf_marker,
            banner: BannerView {
                visible: self.banner.visible,
                message: self.banner.message.clone(),
            },
            button: ButtonView {
                disabled: processing,
                spinner_visible: processing,
                label: if processing {
                    self.config.processing_label.clone()
                } else {
                    self.config.idle_label.clone()
                },
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            self.mode = mode;
            self.dirty = true;
        }
    }

    pub(crate) fn set_marker(&mut self, field: Field, marker: Marker) {
        let slot = match field {
            Field::Url => &mut self.url_marker,
            Field::Pdf => &mut self.pdf_marker,
        };
        if *slot != marker {
            *slot = marker;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_markers(&mut self) {
        self.set_marker(Field::Url, Marker::Untouched);
        self.set_marker(Field::Pdf, Marker::Untouched);
    }

    pub(crate) fn hide_banner(&mut self) {
        if self.banner.visible {
            self.banner.visible = false;
            self.dirty = true;
        }
    }

    /// Puts `message` on the banner and returns the button to idle.
    pub(crate) fn show_error(&mut self, message: String) {
        self.banner = Banner {
            visible: true,
            message,
        };
        self.submission = SubmissionState::Idle;
        self.dirty = true;
    }

    pub(crate) fn start_processing(&mut self) {
        if self.submission != SubmissionState::Processing {
            self.submission = SubmissionState::Processing;
            self.dirty = true;
        }
    }
}
