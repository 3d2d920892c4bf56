#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct SelectStyleCommand {
    pub style_id: String,
}

#[derive(Debug, Clone)]
pub struct SubmitEditCommand {
    pub instruction: String,
}

#[derive(Debug, Clone)]
pub struct DownloadResultCommand {
    pub output_dir: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChangeStyleCommand;

#[derive(Debug, Clone, Default)]
pub struct BackCommand;

#[derive(Debug, Clone, Default)]
pub struct StartOverCommand;

#[derive(Debug, Clone, Default)]
pub struct ListStylesCommand;

#[derive(Debug, Clone, Default)]
pub struct SessionStatusQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: &'static str,
    pub busy: bool,
    pub style_name: Option<String>,
    pub has_result: bool,
    pub last_error: Option<String>,
    pub edit_instruction: String,
}
