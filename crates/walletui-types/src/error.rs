use std::fmt;

/// Errors raised by the exact amount conversion path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Input could not be read as a decimal number
    Parse { input: String },

    /// Scaled value does not fit the decimal or integer range
    Overflow { input: String },
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Parse { input } => write!(f, "Invalid amount '{}': not a number", input),
            AmountError::Overflow { input } => {
                write!(f, "Amount '{}' is out of the representable range", input)
            }
        }
    }
}

impl std::error::Error for AmountError {}

/// Errors raised while writing to the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The native clipboard rejected the write
    NativeWriteFailed(String),

    /// The legacy copy command reported failure
    CopyCommandFailed,

    /// The document could not host the temporary text area
    DocumentUnavailable(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::NativeWriteFailed(msg) => {
                write!(f, "Clipboard write rejected: {}", msg)
            }
            ClipboardError::CopyCommandFailed => write!(f, "Copy command reported failure"),
            ClipboardError::DocumentUnavailable(msg) => {
                write!(f, "Document unavailable for copy: {}", msg)
            }
        }
    }
}

impl std::error::Error for ClipboardError {}
