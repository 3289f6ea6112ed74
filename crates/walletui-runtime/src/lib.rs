pub mod clipboard;
pub mod config;
pub mod error;
pub mod surface;
pub mod timer;

pub use clipboard::{
    ClipboardService, CopyStrategy, HostCapabilities, LegacyDocument, NativeClipboard, TextArea,
};
pub use config::{Config, DateConfig, TextConfig};
pub use error::{Error, Result};
pub use surface::{
    LocationProvider, SharedLocation, StaticLocation, SurfacePages, UiSurfaceDetector,
};
pub use timer::{sleep, sleep_secs};
