pub mod fs;
pub mod gemini;
pub mod presenters;

pub use fs::{FsImageLoader, FsResultExporter, SystemClock};
pub use gemini::{GeminiSynthesisService, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use presenters::{present_exported, present_session, present_style_row};
