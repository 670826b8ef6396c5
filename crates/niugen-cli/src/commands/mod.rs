//! Command handlers.

pub mod completions;
pub mod package;
