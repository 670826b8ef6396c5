//! Template rendering adapters.

pub mod builtin;

pub use builtin::BuiltinRenderer;
