//! Niugen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the niugen
//! workspace package generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           niugen-cli (CLI)              │
//! │   (args, prompts, output, exit codes)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! │       Runs the action pipeline          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, TemplateRenderer,        │
//! │    Formatter)                           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    niugen-adapters (Infrastructure)     │
//! │  (LocalFilesystem, BuiltinRenderer,     │
//! │   PrettierFormatter)                    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (name normalization, PackageKind,      │
//! │   destination resolution, action plan)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use niugen_core::domain::{GeneratorAnswers, PackageKind, dest};
//!
//! let answers = GeneratorAnswers::new("niu", "foo-bar", PackageKind::Lib, None, false).unwrap();
//! let derived = dest::resolve(&answers).unwrap();
//! assert_eq!(derived.package_dir, "packages/foo-bar");
//! assert_eq!(derived.scoped_name, "@niu/foo-bar");
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ActionOutcome, GenerateReport, GenerateService,
        ports::{Filesystem, Formatter, TemplateRenderer},
    };
    pub use crate::domain::{
        Action, DerivedPaths, GeneratorAnswers, PackageKind, TemplateContext, TemplateId,
    };
    pub use crate::error::{NiugenError, NiugenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
