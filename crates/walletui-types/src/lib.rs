pub mod amount;
pub mod clipboard;
pub mod error;
pub mod surface;

pub use amount::*;
pub use clipboard::*;
pub use error::{AmountError, ClipboardError};
pub use surface::*;
