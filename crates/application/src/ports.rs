use std::fmt::{Display, Formatter};
use std::path::Path;

use headshot_studio_domain::EncodedImage;

use crate::ApplicationError;

/// The single failure kind of the synthesis capability. The detail string is
/// for the log only and must never reach the session's user-facing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisError {
    detail: String,
}

impl SynthesisError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl Display for SynthesisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "synthesis failed: {}", self.detail)
    }
}

impl std::error::Error for SynthesisError {}

/// Opaque remote image synthesis. Both calls are single-shot and
/// non-idempotent; no retry or timeout policy lives behind this trait.
pub trait SynthesisService {
    /// Produce a styled headshot from the source image. Must preserve the
    /// subject's likeness while changing background, attire, and lighting
    /// per the instruction.
    fn generate(
        &self,
        source: &EncodedImage,
        style_instruction: &str,
    ) -> Result<EncodedImage, SynthesisError>;

    /// Apply a free-text change to the current result, leaving unrelated
    /// attributes intact.
    fn edit(
        &self,
        current: &EncodedImage,
        edit_instruction: &str,
    ) -> Result<EncodedImage, SynthesisError>;
}

pub trait SourceImageLoader {
    fn load(&self, path: &Path) -> Result<EncodedImage, ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_path: String,
    pub bytes_written: usize,
}

pub trait ResultExporter {
    fn export(
        &self,
        image: &EncodedImage,
        output_dir: &str,
        file_stem: &str,
    ) -> Result<ExportedFile, ApplicationError>;
}

pub trait Clock {
    fn now_timestamp_string(&self) -> String;
}
