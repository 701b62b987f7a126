//! Configuration options for loading event sources.

use serde::{Deserialize, Serialize};

/// What a load does when its source file does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingSourceMode {
    /// Return an empty record set and a warning.
    #[default]
    Degrade,
    /// Fail the load.
    Fail,
}

/// Options controlling source loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    pub missing_source: MissingSourceMode,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that turn missing files into errors.
    pub fn strict() -> Self {
        Self {
            missing_source: MissingSourceMode::Fail,
        }
    }

    pub fn with_missing_source(mut self, mode: MissingSourceMode) -> Self {
        self.missing_source = mode;
        self
    }
}
