//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "generate a workspace package".

pub mod generate_service;

pub use generate_service::{ActionOutcome, GenerateReport, GenerateService};
