use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bytes in one MiB; the size limit is reported to users in whole MiB.
pub const MIB: u64 = 1024 * 1024;

/// Largest accepted PDF upload (25 MiB).
pub const DEFAULT_MAX_PDF_BYTES: u64 = 25 * MIB;

/// Substring a selected file's media type must contain to count as a PDF.
pub const DEFAULT_PDF_MEDIA_TYPE_MARKER: &str = "pdf";

/// Submit button label while the form is idle.
pub const DEFAULT_IDLE_LABEL: &str = "Summarize Content";

/// Submit button label once the native submission has been triggered.
pub const DEFAULT_PROCESSING_LABEL: &str = "Processing...";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_pdf_bytes must be greater than zero")]
    ZeroPdfLimit,
    #[error("max_pdf_bytes must be a whole number of MiB, got {0}")]
    PartialMibLimit(u64),
    #[error("pdf_media_type_marker must not be empty")]
    EmptyMediaTypeMarker,
}

/// Validation limits and button labels.
///
/// Every field has a default, so a partial JSON object only overrides what
/// it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub max_pdf_bytes: u64,
    pub pdf_media_type_marker: String,
    pub idle_label: String,
    pub processing_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_pdf_bytes: DEFAULT_MAX_PDF_BYTES,
            pdf_media_type_marker: DEFAULT_PDF_MEDIA_TYPE_MARKER.to_string(),
            idle_label: DEFAULT_IDLE_LABEL.to_string(),
            processing_label: DEFAULT_PROCESSING_LABEL.to_string(),
        }
    }
}

impl FormConfig {
    /// Parse and validate a JSON config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_pdf_bytes == 0 {
            return Err(ConfigError::ZeroPdfLimit);
        }
        if self.max_pdf_bytes % MIB != 0 {
            return Err(ConfigError::PartialMibLimit(self.max_pdf_bytes));
        }
        if self.pdf_media_type_marker.is_empty() {
            return Err(ConfigError::EmptyMediaTypeMarker);
        }
        Ok(())
    }

    /// The PDF size limit in whole MiB, as shown in error messages.
    pub fn max_pdf_mib(&self) -> u64 {
        self.max_pdf_bytes / MIB
    }
}
