mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    Clock, ExportedFile, ResultExporter, SourceImageLoader, SynthesisError, SynthesisService,
};
pub use service::{StudioService, EDIT_FAILED_MESSAGE, GENERATE_FAILED_MESSAGE};
pub use use_cases::{
    BackCommand, ChangeStyleCommand, DownloadResultCommand, EditOutcome, GenerationOutcome,
    ListStylesCommand, SelectStyleCommand, SessionSnapshot, SessionStatusQuery, StartOverCommand,
    SubmitEditCommand, UploadImageCommand,
};
