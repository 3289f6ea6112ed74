use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use walletui_runtime::{LegacyDocument, NativeClipboard, TextArea};
use walletui_types::ClipboardError;

/// Native clipboard that keeps every write in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
    reject_with: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject subsequent writes with `reason`
    pub fn reject(&self, reason: impl Into<String>) {
        *self.reject_with.lock().expect("clipboard lock") = Some(reason.into());
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("clipboard lock").clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes().last().cloned()
    }
}

#[async_trait]
impl NativeClipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(reason) = self.reject_with.lock().expect("clipboard lock").clone() {
            return Err(ClipboardError::NativeWriteFailed(reason));
        }
        self.writes.lock().expect("clipboard lock").push(text.to_string());
        Ok(())
    }
}

/// One DOM interaction observed by [`RecordingDocument`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomStep {
    Create,
    SetValue(String),
    HideOffScreen,
    Attach,
    Focus,
    SelectAll,
    ExecCopy { succeeded: bool },
    Remove,
}

#[derive(Debug)]
struct DocumentState {
    steps: Vec<DomStep>,
    attached: usize,
    selection: Option<String>,
    clipboard: Option<String>,
    copy_succeeds: bool,
    attach_fails: bool,
}

/// Legacy document that records each step and simulates the copy command
#[derive(Debug, Clone)]
pub struct RecordingDocument {
    state: Arc<Mutex<DocumentState>>,
}

impl Default for RecordingDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingDocument {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(DocumentState {
                steps: Vec::new(),
                attached: 0,
                selection: None,
                clipboard: None,
                copy_succeeds: true,
                attach_fails: false,
            })),
        }
    }

    /// Make the copy command report failure
    pub fn with_failing_copy(self) -> Self {
        self.lock().copy_succeeds = false;
        self
    }

    /// Make attaching the text area fail
    pub fn with_failing_attach(self) -> Self {
        self.lock().attach_fails = true;
        self
    }

    pub fn steps(&self) -> Vec<DomStep> {
        self.lock().steps.clone()
    }

    /// Elements currently attached to the body
    pub fn attached_count(&self) -> usize {
        self.lock().attached
    }

    /// Text placed on the clipboard by a successful copy command
    pub fn clipboard(&self) -> Option<String> {
        self.lock().clipboard.clone()
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().expect("document lock")
    }
}

impl LegacyDocument for RecordingDocument {
    fn create_text_area(&self) -> Result<Box<dyn TextArea>, ClipboardError> {
        self.lock().steps.push(DomStep::Create);
        Ok(Box::new(RecordingTextArea {
            state: Arc::clone(&self.state),
            value: String::new(),
            attached: false,
        }))
    }

    fn exec_copy(&self) -> bool {
        let mut state = self.lock();
        let succeeded = state.copy_succeeds;
        if succeeded {
            state.clipboard = state.selection.clone();
        }
        state.steps.push(DomStep::ExecCopy { succeeded });
        succeeded
    }
}

struct RecordingTextArea {
    state: Arc<Mutex<DocumentState>>,
    value: String,
    attached: bool,
}

impl RecordingTextArea {
    fn record(&self, step: DomStep) -> MutexGuard<'_, DocumentState> {
        let mut state = self.state.lock().expect("document lock");
        state.steps.push(step);
        state
    }
}

impl TextArea for RecordingTextArea {
    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.record(DomStep::SetValue(value.to_string()));
    }

    fn hide_off_screen(&mut self) {
        self.record(DomStep::HideOffScreen);
    }

    fn attach(&mut self) -> Result<(), ClipboardError> {
        let mut state = self.record(DomStep::Attach);
        if state.attach_fails {
            return Err(ClipboardError::DocumentUnavailable(
                "body is not available".to_string(),
            ));
        }
        state.attached += 1;
        drop(state);
        self.attached = true;
        Ok(())
    }

    fn focus(&mut self) {
        self.record(DomStep::Focus);
    }

    fn select_all(&mut self) {
        let value = self.value.clone();
        self.record(DomStep::SelectAll).selection = Some(value);
    }

    fn remove(&mut self) {
        let attached = self.attached;
        let mut state = self.record(DomStep::Remove);
        if attached {
            state.attached -= 1;
            state.selection = None;
        }
        drop(state);
        self.attached = false;
    }
}
