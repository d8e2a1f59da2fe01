//! Summarizer core: pure form state machine, validation rules and view-model helpers.
mod config;
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use config::{
    ConfigError, FormConfig, DEFAULT_IDLE_LABEL, DEFAULT_MAX_PDF_BYTES,
    DEFAULT_PDF_MEDIA_TYPE_MARKER, DEFAULT_PROCESSING_LABEL, MIB,
};
pub use effect::Effect;
pub use msg::{FormSnapshot, Msg, SelectedFile, TabFlags};
pub use state::{Field, FormState, InputMode, Marker, SubmissionState};
pub use update::update;
pub use validate::{check_pdf, check_url_live, check_url_strict, is_url_like, ValidationError};
pub use view_model::{BannerView, ButtonView, FormViewModel};
