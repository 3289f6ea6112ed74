//! Testing infrastructure for walletui.
//!
//! This crate provides host doubles for the environment-facing components:
//! - `TestHost`: fluent builder for clipboard capabilities
//! - `clipboard`: in-memory native clipboard and a DOM-recording legacy document
//! - `assertions`: checks for the legacy copy sequence

pub mod assertions;
pub mod clipboard;
pub mod world;

pub use clipboard::{DomStep, MemoryClipboard, RecordingDocument};
pub use world::TestHost;
