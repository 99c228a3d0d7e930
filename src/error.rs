// TuniFia ⚡ AGPL-3.0 License

//! Error types for the prediction pipeline.

use thiserror::Error;

/// Result type alias for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;

/// Main error type for the prediction pipeline.
///
/// Library callers can tell load-time problems from inference-time ones;
/// the binary flattens every variant into a single `Prediction failed: ...`
/// line on stderr.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Error loading the model artifact from disk.
    #[error("Model load error: {0}")]
    ModelLoad(String),

    /// The artifact parsed but violates a structural invariant.
    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// The artifact's feature schema names a column this program cannot supply.
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Error while scoring an inference request.
    #[error("Inference error: {0}")]
    Inference(String),

    /// Wrapped I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
