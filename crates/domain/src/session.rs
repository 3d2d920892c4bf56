use crate::{DomainError, EncodedImage, StylePreset};

/// One variant per workflow state, carrying exactly the data that state is
/// allowed to hold. A result image only exists inside `Editing`/`Done`, so
/// "editing with no result" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    SelectingStyle {
        original: EncodedImage,
    },
    Generating {
        original: EncodedImage,
        style: StylePreset,
    },
    Editing {
        original: EncodedImage,
        style: StylePreset,
        result: EncodedImage,
    },
    Done {
        original: EncodedImage,
        style: StylePreset,
        result: EncodedImage,
    },
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::SelectingStyle { .. } => "SELECTING_STYLE",
            Self::Generating { .. } => "GENERATING",
            Self::Editing { .. } => "EDITING",
            Self::Done { .. } => "DONE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: WorkflowState,
    last_error: Option<String>,
    edit_instruction: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::Idle,
            last_error: None,
            edit_instruction: String::new(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// The session is busy exactly while a synthesis call is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            WorkflowState::Generating { .. } | WorkflowState::Editing { .. }
        )
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn edit_instruction(&self) -> &str {
        &self.edit_instruction
    }

    pub fn set_edit_instruction(&mut self, text: impl Into<String>) {
        self.edit_instruction = text.into();
    }

    pub fn original_image(&self) -> Option<&EncodedImage> {
        match &self.state {
            WorkflowState::Idle => None,
            WorkflowState::SelectingStyle { original }
            | WorkflowState::Generating { original, .. }
            | WorkflowState::Editing { original, .. }
            | WorkflowState::Done { original, .. } => Some(original),
        }
    }

    pub fn selected_style(&self) -> Option<&StylePreset> {
        match &self.state {
            WorkflowState::Idle | WorkflowState::SelectingStyle { .. } => None,
            WorkflowState::Generating { style, .. }
            | WorkflowState::Editing { style, .. }
            | WorkflowState::Done { style, .. } => Some(style),
        }
    }

    pub fn current_result(&self) -> Option<&EncodedImage> {
        match &self.state {
            WorkflowState::Editing { result, .. } | WorkflowState::Done { result, .. } => {
                Some(result)
            }
            _ => None,
        }
    }

    pub fn supply_image(&mut self, image: EncodedImage) -> Result<(), DomainError> {
        match self.state {
            WorkflowState::Idle => {
                self.state = WorkflowState::SelectingStyle { original: image };
                Ok(())
            }
            _ => Err(self.invalid("supply an image")),
        }
    }

    /// Records the style, clears any prior error, and moves into GENERATING.
    /// Returns a copy of the original image for the synthesis call.
    pub fn begin_generation(&mut self, style: StylePreset) -> Result<EncodedImage, DomainError> {
        match std::mem::replace(&mut self.state, WorkflowState::Idle) {
            WorkflowState::SelectingStyle { original } => {
                let source = original.clone();
                self.last_error = None;
                self.state = WorkflowState::Generating { original, style };
                Ok(source)
            }
            other => {
                self.state = other;
                Err(self.invalid("select a style"))
            }
        }
    }

    pub fn finish_generation(&mut self, result: EncodedImage) -> Result<(), DomainError> {
        match std::mem::replace(&mut self.state, WorkflowState::Idle) {
            WorkflowState::Generating { original, style } => {
                self.state = WorkflowState::Done {
                    original,
                    style,
                    result,
                };
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("record a generation result"))
            }
        }
    }

    /// Reverts to style selection with the original image retained; the
    /// message is the generic user-facing one, never transport detail.
    pub fn fail_generation(&mut self, message: impl Into<String>) -> Result<(), DomainError> {
        match std::mem::replace(&mut self.state, WorkflowState::Idle) {
            WorkflowState::Generating { original, .. } => {
                self.last_error = Some(message.into());
                self.state = WorkflowState::SelectingStyle { original };
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("record a generation failure"))
            }
        }
    }

    pub fn can_submit_edit(&self) -> bool {
        matches!(self.state, WorkflowState::Done { .. })
            && !self.edit_instruction.trim().is_empty()
    }

    /// Moves into EDITING. Returns copies of the current result and the
    /// instruction for the synthesis call.
    pub fn begin_edit(&mut self) -> Result<(EncodedImage, String), DomainError> {
        if self.edit_instruction.trim().is_empty() {
            return Err(DomainError::BlankEditInstruction);
        }
        match std::mem::replace(&mut self.state, WorkflowState::Idle) {
            WorkflowState::Done {
                original,
                style,
                result,
            } => {
                let current = result.clone();
                let instruction = self.edit_instruction.clone();
                self.last_error = None;
                self.state = WorkflowState::Editing {
                    original,
                    style,
                    result,
                };
                Ok((current, instruction))
            }
            other => {
                self.state = other;
                Err(self.invalid("submit an edit"))
            }
        }
    }

    pub fn finish_edit(&mut self, result: EncodedImage) -> Result<(), DomainError> {
        match std::mem::replace(&mut self.state, WorkflowState::Idle) {
            WorkflowState::Editing {
                original, style, ..
            } => {
                self.edit_instruction.clear();
                self.state = WorkflowState::Done {
                    original,
                    style,
                    result,
                };
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("record an edit result"))
            }
        }
    }

    /// Keeps the last good result and the typed instruction.
    pub fn fail_edit(&mut self, message: impl Into<String>) -> Result<(), DomainError> {
        match std::mem::replace(&mut self.state, WorkflowState::Idle) {
            WorkflowState::Editing {
                original,
                style,
                result,
            } => {
                self.last_error = Some(message.into());
                self.state = WorkflowState::Done {
                    original,
                    style,
                    result,
                };
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("record an edit failure"))
            }
        }
    }

    pub fn change_style(&mut self) -> Result<(), DomainError> {
        match std::mem::replace(&mut self.state, WorkflowState::Idle) {
            WorkflowState::Done { original, .. } => {
                self.state = WorkflowState::SelectingStyle { original };
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("change style"))
            }
        }
    }

    pub fn back(&mut self) -> Result<(), DomainError> {
        match self.state {
            WorkflowState::SelectingStyle { .. } => {
                self.state = WorkflowState::Idle;
                Ok(())
            }
            _ => Err(self.invalid("go back")),
        }
    }

    pub fn start_over(&mut self) {
        self.state = WorkflowState::Idle;
        self.last_error = None;
        self.edit_instruction.clear();
    }

    fn invalid(&self, action: &'static str) -> DomainError {
        DomainError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}
