// TuniFia ⚡ AGPL-3.0 License

//! Regression model loading and inference.
//!
//! This module provides the main [`EnergyModel`] struct for loading
//! serialized regression artifacts and scoring single-row inference
//! requests.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::metadata::ModelMetadata;
use crate::request::InferenceRequest;
use crate::schema::{FeatureColumn, ENERGY_TYPE_FEATURE};

/// Artifact format revision this build can read.
pub const SUPPORTED_FORMAT: u32 = 1;

/// A fitted investment-to-energy regression pipeline.
///
/// The artifact bundles the feature schema (column order, scaler statistics,
/// one-hot categories) with the fitted coefficients, so a loaded model is
/// self-contained: encoding and scoring need nothing beyond the request.
///
/// # Example
///
/// ```no_run
/// use energy_predictor::{EnergyModel, InferenceRequest};
///
/// let model = EnergyModel::from_file("investment_energy_regression.json").unwrap();
/// let kwh = model.predict(&InferenceRequest::new(2500.0, "Solar")).unwrap();
/// println!("predicted {kwh:.1} kWh");
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct EnergyModel {
    /// Artifact format revision.
    format: u32,
    /// Training-side metadata block.
    #[serde(default)]
    metadata: ModelMetadata,
    /// Ordered training columns.
    features: Vec<FeatureColumn>,
    /// One coefficient per encoded slot, in column order.
    coefficients: Vec<f64>,
    /// Regression intercept.
    intercept: f64,
}

impl EnergyModel {
    /// Load a model from a serialized artifact on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::ModelLoad`] if the file is missing, unreadable
    /// or not a parsable artifact, and [`PredictError::InvalidArtifact`] if
    /// it parsed but violates a structural invariant.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PredictError::ModelLoad(format!(
                "Model file not found: {}",
                path.display()
            )));
        }
        let bytes = std::fs::read(path).map_err(|e| {
            PredictError::ModelLoad(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_slice(&bytes)
    }

    /// Deserialize and validate a model from raw artifact bytes.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`EnergyModel::from_file`], minus the file
    /// system ones.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let model: Self = serde_json::from_slice(bytes).map_err(|e| {
            PredictError::ModelLoad(format!("Failed to parse model artifact: {e}"))
        })?;
        model.validate()?;
        Ok(model)
    }

    /// Check artifact invariants once at load time, so scoring can assume a
    /// well-formed model.
    fn validate(&self) -> Result<()> {
        if self.format != SUPPORTED_FORMAT {
            return Err(PredictError::InvalidArtifact(format!(
                "unsupported artifact format {} (supported: {SUPPORTED_FORMAT})",
                self.format
            )));
        }
        if self.features.is_empty() {
            return Err(PredictError::InvalidArtifact(
                "feature schema must not be empty".to_string(),
            ));
        }
        for (idx, feature) in self.features.iter().enumerate() {
            feature.validate().map_err(PredictError::InvalidArtifact)?;
            if self.features[..idx]
                .iter()
                .any(|f| f.name() == feature.name())
            {
                return Err(PredictError::InvalidArtifact(format!(
                    "duplicate feature column '{}'",
                    feature.name()
                )));
            }
        }
        let width = self.encoded_width();
        if self.coefficients.len() != width {
            return Err(PredictError::InvalidArtifact(format!(
                "coefficient count {} does not match encoded width {width}",
                self.coefficients.len()
            )));
        }
        if self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(PredictError::InvalidArtifact(
                "coefficients contain non-finite values".to_string(),
            ));
        }
        if !self.intercept.is_finite() {
            return Err(PredictError::InvalidArtifact(
                "intercept is not finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Score a single request.
    ///
    /// Encodes the request against the artifact's feature schema, then
    /// applies the fitted linear form. Repeat calls with the same request
    /// return the same value.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Inference`] for an energy type outside the
    /// fitted categories or a non-finite result, and
    /// [`PredictError::SchemaMismatch`] when the artifact expects a column
    /// this request type cannot supply.
    pub fn predict(&self, request: &InferenceRequest) -> Result<f64> {
        let mut row = Vec::with_capacity(self.encoded_width());
        for feature in &self.features {
            feature.encode_into(request, &mut row)?;
        }

        let mut sum = self.intercept;
        for (coefficient, value) in self.coefficients.iter().zip(&row) {
            sum += coefficient * value;
        }

        if !sum.is_finite() {
            return Err(PredictError::Inference(format!(
                "prediction is not finite ({sum})"
            )));
        }
        Ok(sum)
    }

    /// Artifact metadata block.
    #[must_use]
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Ordered training columns.
    #[must_use]
    pub fn features(&self) -> &[FeatureColumn] {
        &self.features
    }

    /// Number of training columns.
    #[must_use]
    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    /// Total width of the encoded row (and of the coefficient vector).
    #[must_use]
    pub fn encoded_width(&self) -> usize {
        self.features.iter().map(FeatureColumn::width).sum()
    }

    /// Energy categories the model was fitted on, or an empty slice when the
    /// artifact carries no categorical energy column.
    #[must_use]
    pub fn energy_types(&self) -> &[String] {
        for feature in &self.features {
            if let FeatureColumn::Categorical { name, categories } = feature {
                if name == ENERGY_TYPE_FEATURE {
                    return categories;
                }
            }
        }
        &[]
    }
}

impl fmt::Debug for EnergyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnergyModel")
            .field("name", &self.metadata.model_name())
            .field("format", &self.format)
            .field("num_features", &self.num_features())
            .field("encoded_width", &self.encoded_width())
            .field("intercept", &self.intercept)
            .finish()
    }
}
