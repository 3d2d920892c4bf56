mod error;
mod image;
mod session;
mod style;

pub use error::DomainError;
pub use image::{mime_type_for_path, EncodedImage, SUPPORTED_MIME_TYPES};
pub use session::{Session, WorkflowState};
pub use style::{StyleCatalog, StylePreset, EDIT_SUGGESTIONS};
