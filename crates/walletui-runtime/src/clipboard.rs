//! Copy text to the system clipboard.
//!
//! Two strategies exist. Secure contexts that expose a native clipboard get
//! [`CopyStrategy::Native`]; everything else goes through the legacy
//! document route: a hidden text area is attached, selected and copied with
//! the document's copy command, then removed. The strategy is chosen once
//! when the service is built.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use walletui_types::{ClipboardError, ClipboardPayload};

/// Asynchronous clipboard write exposed by secure contexts
#[async_trait]
pub trait NativeClipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Editable element created by a [`LegacyDocument`]
pub trait TextArea: Send {
    fn set_value(&mut self, value: &str);

    /// Make the element invisible and move it out of the viewport
    fn hide_off_screen(&mut self);

    /// Attach the element to the document body
    fn attach(&mut self) -> Result<(), ClipboardError>;

    fn focus(&mut self);

    fn select_all(&mut self);

    /// Detach the element from the document
    fn remove(&mut self);
}

/// Document capabilities needed by the legacy copy route
pub trait LegacyDocument: Send + Sync {
    fn create_text_area(&self) -> Result<Box<dyn TextArea>, ClipboardError>;

    /// Run the document copy command on the current selection. `true` on success.
    fn exec_copy(&self) -> bool;
}

/// What the host environment offers
#[derive(Clone)]
pub struct HostCapabilities {
    pub secure_context: bool,
    pub native: Option<Arc<dyn NativeClipboard>>,
    pub document: Arc<dyn LegacyDocument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStrategy {
    Native,
    Legacy,
}

enum Backend {
    Native(Arc<dyn NativeClipboard>),
    Legacy(Arc<dyn LegacyDocument>),
}

pub struct ClipboardService {
    backend: Backend,
}

impl fmt::Debug for ClipboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardService")
            .field("strategy", &self.strategy())
            .finish()
    }
}

impl ClipboardService {
    /// Pick the native route when the context is secure and a native clipboard exists
    pub fn from_capabilities(capabilities: HostCapabilities) -> Self {
        let service = match capabilities.native {
            Some(native) if capabilities.secure_context => Self::native(native),
            _ => Self::legacy(capabilities.document),
        };
        debug!(
            secure_context = capabilities.secure_context,
            strategy = ?service.strategy(),
            "selected clipboard strategy"
        );
        service
    }

    pub fn native(clipboard: Arc<dyn NativeClipboard>) -> Self {
        Self {
            backend: Backend::Native(clipboard),
        }
    }

    pub fn legacy(document: Arc<dyn LegacyDocument>) -> Self {
        Self {
            backend: Backend::Legacy(document),
        }
    }

    pub fn strategy(&self) -> CopyStrategy {
        match self.backend {
            Backend::Native(_) => CopyStrategy::Native,
            Backend::Legacy(_) => CopyStrategy::Legacy,
        }
    }

    /// Copy `payload` (stringified now) to the clipboard.
    ///
    /// Makes exactly one attempt. On the legacy route the temporary text
    /// area is removed whether or not the copy command succeeds.
    pub async fn copy<P: Into<ClipboardPayload>>(&self, payload: P) -> Result<(), ClipboardError> {
        let text = payload.into().into_text();

        match &self.backend {
            Backend::Native(clipboard) => {
                let result = clipboard.write_text(&text).await;
                if let Err(err) = &result {
                    warn!(error = %err, "native clipboard write rejected");
                }
                result
            }
            Backend::Legacy(document) => legacy_copy(document.as_ref(), &text),
        }
    }
}

/// Removes the text area when dropped, on every exit path
struct AttachedTextArea(Box<dyn TextArea>);

impl Drop for AttachedTextArea {
    fn drop(&mut self) {
        self.0.remove();
        debug!("removed temporary text area");
    }
}

fn legacy_copy(document: &dyn LegacyDocument, text: &str) -> Result<(), ClipboardError> {
    let mut area = document.create_text_area()?;
    area.set_value(text);
    area.hide_off_screen();
    area.attach()?;

    let mut area = AttachedTextArea(area);
    area.0.focus();
    area.0.select_all();

    if document.exec_copy() {
        debug!(chars = text.chars().count(), "legacy copy command succeeded");
        Ok(())
    } else {
        warn!("legacy copy command reported failure");
        Err(ClipboardError::CopyCommandFailed)
    }
}
