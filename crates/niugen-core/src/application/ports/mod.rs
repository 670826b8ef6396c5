//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `niugen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   infrastructure — `Filesystem`, `TemplateRenderer`, `Formatter`.
//! - **Driving (Input) Ports**: called by the external world (the CLI's
//!   prompt sequence), implemented by services.

pub mod output;

pub use output::{Filesystem, Formatter, TemplateRenderer};
