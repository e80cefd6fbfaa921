use serde::{Deserialize, Serialize};

use crate::core::CheckModel;
use crate::error::{TreeError, TreeResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load tree setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeEngineConfig {
    #[serde(default)]
    pub check_model: CheckModel,
    /// Forces every node to resolve as disabled at flatten time.
    #[serde(default)]
    pub disabled: bool,
    /// Makes every toggle independent: no downward or upward propagation and
    /// no disabled inheritance.
    #[serde(default)]
    pub no_cascade: bool,
}

impl TreeEngineConfig {
    #[must_use]
    pub fn new(check_model: CheckModel) -> Self {
        Self {
            check_model,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_check_model(mut self, check_model: CheckModel) -> Self {
        self.check_model = check_model;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_no_cascade(mut self, no_cascade: bool) -> Self {
        self.no_cascade = no_cascade;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> TreeResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TreeError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TreeResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TreeError::InvalidData(format!("failed to parse config: {e}")))
    }
}
