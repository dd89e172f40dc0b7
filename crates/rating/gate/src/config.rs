//! Gate configuration

use crate::error::{GateError, Result};
use serde::{Deserialize, Serialize};

/// Settings for an [`crate::AccessGate`].
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Log every granted and denied decision
    pub emit_audit_events: bool,
    /// Name of the synthetic viewer built by the legacy entry point
    pub legacy_viewer_name: String,
    /// Age of the synthetic viewer built by the legacy entry point
    pub legacy_viewer_age: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            emit_audit_events: true,
            legacy_viewer_name: "legacy_user".to_string(),
            legacy_viewer_age: 18,
        }
    }
}

impl GateConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GateError::InvalidConfiguration(e.to_string()))
    }

    pub fn with_emit_audit_events(mut self, emit: bool) -> Self {
        self.emit_audit_events = emit;
        self
    }
}
