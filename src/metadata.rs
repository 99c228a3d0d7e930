// TuniFia ⚡ AGPL-3.0 License

//! Model artifact metadata.
//!
//! The training pipeline stamps a metadata block into every exported
//! artifact. None of it affects scoring; it exists so `--verbose` runs and
//! library callers can report what they loaded.

use serde::{Deserialize, Serialize};

/// Output key the CLI emits, and the target an exported artifact is
/// expected to have been fitted against.
pub const DEFAULT_TARGET: &str = "predicted_kwh";

/// Metadata block embedded in a model artifact.
///
/// Every field is optional in the artifact; absent fields fall back to the
/// defaults below so old exports keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelMetadata {
    /// Model name as exported by the training pipeline.
    pub name: String,
    /// Version of the training pipeline that produced the artifact.
    pub version: String,
    /// Export timestamp (RFC 3339, as written by the trainer).
    pub trained_at: String,
    /// Name of the regression target the model was fitted against.
    pub target: String,
    /// Free-form description.
    pub description: String,
}

impl ModelMetadata {
    /// Display name for diagnostics, with a fallback for artifacts that
    /// left `name` empty.
    #[must_use]
    pub fn model_name(&self) -> &str {
        if self.name.is_empty() {
            "regression model"
        } else {
            &self.name
        }
    }
}

impl Default for ModelMetadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            trained_at: String::new(),
            target: DEFAULT_TARGET.to_string(),
            description: String::new(),
        }
    }
}
