//! TestHost pattern for declaring a browser-like host in tests.

use std::sync::Arc;
use walletui_runtime::{ClipboardService, HostCapabilities, NativeClipboard};

use crate::clipboard::{MemoryClipboard, RecordingDocument};

/// Declarative host environment builder.
///
/// # Example
/// ```
/// use walletui_testing::TestHost;
///
/// let host = TestHost::new().secure().with_native_clipboard();
/// let service = host.clipboard_service();
/// assert_eq!(service.strategy(), walletui_runtime::CopyStrategy::Native);
/// ```
pub struct TestHost {
    secure_context: bool,
    native: Option<Arc<MemoryClipboard>>,
    document: RecordingDocument,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    /// Insecure host without a native clipboard
    pub fn new() -> Self {
        Self {
            secure_context: false,
            native: None,
            document: RecordingDocument::new(),
        }
    }

    pub fn secure(mut self) -> Self {
        self.secure_context = true;
        self
    }

    pub fn with_native_clipboard(mut self) -> Self {
        self.native = Some(Arc::new(MemoryClipboard::new()));
        self
    }

    pub fn with_document(mut self, document: RecordingDocument) -> Self {
        self.document = document;
        self
    }

    pub fn native_clipboard(&self) -> Option<&MemoryClipboard> {
        self.native.as_deref()
    }

    pub fn document(&self) -> &RecordingDocument {
        &self.document
    }

    pub fn capabilities(&self) -> HostCapabilities {
        HostCapabilities {
            secure_context: self.secure_context,
            native: self
                .native
                .as_ref()
                .map(|native| Arc::clone(native) as Arc<dyn NativeClipboard>),
            document: Arc::new(self.document.clone()),
        }
    }

    pub fn clipboard_service(&self) -> ClipboardService {
        ClipboardService::from_capabilities(self.capabilities())
    }
}
