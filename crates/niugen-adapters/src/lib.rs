//! Infrastructure adapters for niugen.
//!
//! This crate implements the ports defined in
//! `niugen-core::application::ports`. It contains all external dependencies
//! and I/O operations: the real filesystem, the built-in template set, and
//! the external formatter process.

pub mod filesystem;
pub mod formatter;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use formatter::{PrettierFormatter, RecordingFormatter};
pub use renderer::BuiltinRenderer;
