//! Recording formatter for testing.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use niugen_core::{
    application::{ApplicationError, ports::Formatter},
    error::NiugenResult,
};

/// Test double that records every batch it is asked to format.
#[derive(Debug, Clone, Default)]
pub struct RecordingFormatter {
    calls: Arc<Mutex<Vec<Vec<PathBuf>>>>,
    fail: bool,
}

impl RecordingFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A formatter that fails every batch, for failure-path tests.
    pub fn failing() -> Self {
        Self {
            calls: Arc::default(),
            fail: true,
        }
    }

    /// Batches received so far.
    pub fn calls(&self) -> Vec<Vec<PathBuf>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Formatter for RecordingFormatter {
    fn format(&self, files: &[PathBuf]) -> NiugenResult<()> {
        self.calls.lock().unwrap().push(files.to_vec());
        if self.fail {
            return Err(ApplicationError::FormatterFailed {
                reason: "recording formatter set to fail".into(),
            }
            .into());
        }
        Ok(())
    }
}
