use headshot_studio_domain::{Session, StyleCatalog, StylePreset};
use tracing::{debug, warn};

use crate::{
    ApplicationError, BackCommand, ChangeStyleCommand, Clock, DownloadResultCommand, EditOutcome,
    ExportedFile, GenerationOutcome, ListStylesCommand, ResultExporter, SelectStyleCommand,
    SessionSnapshot, SessionStatusQuery, SourceImageLoader, StartOverCommand, SubmitEditCommand,
    SynthesisService, UploadImageCommand,
};

pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate headshot. Please try again.";
pub const EDIT_FAILED_MESSAGE: &str = "Failed to edit image. Try a different prompt.";

/// The workflow controller: owns the session and drives it through its
/// transitions, calling out to the injected capabilities.
pub struct StudioService {
    synthesis: Box<dyn SynthesisService>,
    loader: Box<dyn SourceImageLoader>,
    exporter: Box<dyn ResultExporter>,
    clock: Box<dyn Clock>,
    catalog: StyleCatalog,
    session: Session,
}

impl StudioService {
    pub fn new(
        synthesis: Box<dyn SynthesisService>,
        loader: Box<dyn SourceImageLoader>,
        exporter: Box<dyn ResultExporter>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            synthesis,
            loader,
            exporter,
            clock,
            catalog: StyleCatalog::builtin(),
            session: Session::new(),
        }
    }

    pub fn styles(&self, _command: ListStylesCommand) -> &[StylePreset] {
        self.catalog.all()
    }

    pub fn upload_image(&mut self, command: UploadImageCommand) -> Result<(), ApplicationError> {
        if command.path.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "image path must not be empty".to_string(),
            ));
        }
        let image = self.loader.load(std::path::Path::new(&command.path))?;
        debug!(path = %command.path, bytes = image.byte_count(), "source image loaded");
        self.session.supply_image(image)?;
        Ok(())
    }

    pub fn select_style(
        &mut self,
        command: SelectStyleCommand,
    ) -> Result<GenerationOutcome, ApplicationError> {
        let preset = self
            .catalog
            .find(&command.style_id)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::InvalidInput(format!("unknown style id: {}", command.style_id))
            })?;
        let instruction = preset.instruction.clone();
        let source = self.session.begin_generation(preset)?;

        match self.synthesis.generate(&source, &instruction) {
            Ok(result) => {
                self.session.finish_generation(result)?;
                Ok(GenerationOutcome::Generated)
            }
            Err(error) => {
                warn!(detail = error.detail(), "headshot generation failed");
                self.session.fail_generation(GENERATE_FAILED_MESSAGE)?;
                Ok(GenerationOutcome::Failed)
            }
        }
    }

    pub fn submit_edit(
        &mut self,
        command: SubmitEditCommand,
    ) -> Result<EditOutcome, ApplicationError> {
        self.session.set_edit_instruction(command.instruction);
        if !self.session.can_submit_edit() {
            return Ok(EditOutcome::Skipped);
        }
        let (current, instruction) = self.session.begin_edit()?;

        match self.synthesis.edit(&current, &instruction) {
            Ok(result) => {
                self.session.finish_edit(result)?;
                Ok(EditOutcome::Applied)
            }
            Err(error) => {
                warn!(detail = error.detail(), "headshot edit failed");
                self.session.fail_edit(EDIT_FAILED_MESSAGE)?;
                Ok(EditOutcome::Failed)
            }
        }
    }

    pub fn change_style(&mut self, _command: ChangeStyleCommand) -> Result<(), ApplicationError> {
        self.session.change_style()?;
        Ok(())
    }

    pub fn go_back(&mut self, _command: BackCommand) -> Result<(), ApplicationError> {
        self.session.back()?;
        Ok(())
    }

    pub fn start_over(&mut self, _command: StartOverCommand) {
        self.session.start_over();
    }

    pub fn download_result(
        &self,
        command: DownloadResultCommand,
    ) -> Result<ExportedFile, ApplicationError> {
        let Some(result) = self.session.current_result() else {
            return Err(ApplicationError::InvalidInput(
                "no generated headshot to download".to_string(),
            ));
        };
        let file_stem = format!("headshot-{}", self.clock.now_timestamp_string());
        self.exporter.export(result, &command.output_dir, &file_stem)
    }

    pub fn session_status(&self, _query: SessionStatusQuery) -> SessionSnapshot {
        SessionSnapshot {
            state: self.session.state_name(),
            busy: self.session.is_busy(),
            style_name: self
                .session
                .selected_style()
                .map(|style| style.name.clone()),
            has_result: self.session.current_result().is_some(),
            last_error: self.session.last_error().map(str::to_string),
            edit_instruction: self.session.edit_instruction().to_string(),
        }
    }
}
