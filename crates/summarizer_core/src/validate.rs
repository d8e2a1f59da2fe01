//! Field validity rules shared by the submit gate and the live feedback.
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{FormConfig, Marker, SelectedFile, MIB};

/// Optional http(s) scheme, at least two dot-separated host labels, and an
/// optional tail that may not end in punctuation such as `.` or `,`.
///
/// Classes are spelled out instead of `\w` so matching stays ASCII-only.
const URL_PATTERN: &str = r"^(?:https?://)?[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)+(?:[A-Za-z0-9_.,@?^=%&:/~+#-]*[A-Za-z0-9_@?^=%&/~+#-])?$";

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(URL_PATTERN).expect("url pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a URL")]
    MissingUrl,
    #[error("Please enter a valid URL")]
    MalformedUrl,
    #[error("Please select a PDF file")]
    MissingPdf,
    #[error("The selected file is not a PDF")]
    NotPdf { media_type: String },
    #[error("PDF file is too large (max {}MB)", .max_bytes / MIB)]
    PdfTooLarge { size: u64, max_bytes: u64 },
}

/// True when `value` looks like a web address. The value is tested as-is;
/// callers decide what an empty value means.
pub fn is_url_like(value: &str) -> bool {
    URL_RE.is_match(value)
}

/// Submit-time URL check: an empty field is itself an error.
///
/// `None` means the URL input is not on the page.
pub fn check_url_strict(value: Option<&str>) -> Result<(), ValidationError> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Err(ValidationError::MissingUrl);
    };
    if is_url_like(value) {
        Ok(())
    } else {
        Err(ValidationError::MalformedUrl)
    }
}

/// Keystroke-time URL check: empty input clears the markers instead of
/// nagging.
pub fn check_url_live(value: &str) -> Marker {
    if value.trim().is_empty() {
        Marker::Untouched
    } else if is_url_like(value) {
        Marker::Valid
    } else {
        Marker::Invalid
    }
}

/// Checks the first selected file: present, PDF-typed, within the size
/// limit. The first failing rule wins.
pub fn check_pdf<'a>(
    files: &'a [SelectedFile],
    config: &FormConfig,
) -> Result<&'a SelectedFile, ValidationError> {
    let file = files.first().ok_or(ValidationError::MissingPdf)?;
    if !file.media_type.contains(config.pdf_media_type_marker.as_str()) {
        return Err(ValidationError::NotPdf {
            media_type: file.media_type.clone(),
        });
    }
    if file.size > config.max_pdf_bytes {
        return Err(ValidationError::PdfTooLarge {
            size: file.size,
            max_bytes: config.max_pdf_bytes,
        });
    }
    Ok(file)
}
