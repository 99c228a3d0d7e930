// TuniFia ⚡ AGPL-3.0 License

//! Feature schema for model artifacts.
//!
//! An artifact declares the tabular columns it was trained on, in order.
//! Encoding a request walks the columns and concatenates their encodings:
//! one slot for a numeric column (z-scored when the artifact carries scaler
//! statistics), one slot per category for a categorical column (one-hot).
//! The coefficient vector of the artifact lines up with that encoded row.

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::request::InferenceRequest;

/// Training column holding the investment amount.
pub const AMOUNT_FEATURE: &str = "amount_of_investment";

/// Training column holding the energy segment.
pub const ENERGY_TYPE_FEATURE: &str = "type_of_energy";

/// A single column of the model's training schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureColumn {
    /// Floating-point column, optionally z-scored with training statistics.
    Numeric {
        name: String,
        /// Scaler mean; present only when the trainer standardized the column.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mean: Option<f64>,
        /// Scaler standard deviation; paired with `mean`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        std: Option<f64>,
    },
    /// String column one-hot encoded over the fitted category list.
    Categorical {
        name: String,
        categories: Vec<String>,
    },
}

impl FeatureColumn {
    /// Column name as it appeared in the training frame.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric { name, .. } | Self::Categorical { name, .. } => name,
        }
    }

    /// Number of slots this column occupies in the encoded row.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Numeric { .. } => 1,
            Self::Categorical { categories, .. } => categories.len(),
        }
    }

    /// Check the column definition for internal consistency.
    ///
    /// Returns a plain message; callers wrap it into their own error type.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name().is_empty() {
            return Err("feature column name must not be empty".to_string());
        }
        match self {
            Self::Numeric { name, mean, std } => match (mean, std) {
                (Some(mean), Some(std)) => {
                    if !mean.is_finite() {
                        return Err(format!("column '{name}': scaler mean must be finite"));
                    }
                    if !std.is_finite() || *std <= 0.0 {
                        return Err(format!(
                            "column '{name}': scaler std must be finite and > 0"
                        ));
                    }
                    Ok(())
                }
                (None, None) => Ok(()),
                _ => Err(format!(
                    "column '{name}': scaler mean and std must be provided together"
                )),
            },
            Self::Categorical { name, categories } => {
                if categories.is_empty() {
                    return Err(format!("column '{name}': category list must not be empty"));
                }
                for (idx, category) in categories.iter().enumerate() {
                    if category.is_empty() {
                        return Err(format!("column '{name}': category {idx} is empty"));
                    }
                    if categories[..idx].contains(category) {
                        return Err(format!(
                            "column '{name}': duplicate category '{category}'"
                        ));
                    }
                }
                Ok(())
            }
        }
    }

    /// Append this column's encoding of `request` to `row`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::SchemaMismatch`] when the column name is not
    /// one this request type can supply, and [`PredictError::Inference`]
    /// when the requested energy type is not among the fitted categories.
    pub fn encode_into(&self, request: &InferenceRequest, row: &mut Vec<f64>) -> Result<()> {
        match self {
            Self::Numeric { name, mean, std } if name == AMOUNT_FEATURE => {
                let mut value = request.amount;
                if let (Some(mean), Some(std)) = (mean, std) {
                    value = (value - mean) / std;
                }
                row.push(value);
                Ok(())
            }
            Self::Categorical { name, categories } if name == ENERGY_TYPE_FEATURE => {
                match categories.iter().position(|c| c == &request.energy_type) {
                    Some(hit) => {
                        for idx in 0..categories.len() {
                            row.push(if idx == hit { 1.0 } else { 0.0 });
                        }
                        Ok(())
                    }
                    None => Err(PredictError::Inference(format!(
                        "unknown energy type '{}' (model was trained on: {})",
                        request.energy_type,
                        categories.join(", ")
                    ))),
                }
            }
            other => Err(PredictError::SchemaMismatch(format!(
                "model expects feature column '{}' which this input cannot supply",
                other.name()
            ))),
        }
    }
}
