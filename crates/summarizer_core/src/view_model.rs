use crate::{InputMode, Marker};

/// Everything the platform layer needs to paint the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub mode: InputMode,
    pub url_marker: Marker,
    pub pdf_marker: Marker,
    pub banner: BannerView,
    pub button: ButtonView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BannerView {
    pub visible: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonView {
    pub disabled: bool,
    pub spinner_visible: bool,
    pub label: String,
}
