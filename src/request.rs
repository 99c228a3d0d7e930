// TuniFia ⚡ AGPL-3.0 License

//! Single-record inference input.

/// One row of input for the regression model.
///
/// Mirrors the record the training frame was built from: an investment
/// amount plus the energy segment it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    /// Investment amount, in the currency the model was trained on.
    pub amount: f64,
    /// Energy segment the investment targets. Must be one of the categories
    /// the artifact declares.
    pub energy_type: String,
}

impl InferenceRequest {
    /// Create a new request.
    #[must_use]
    pub fn new(amount: f64, energy_type: impl Into<String>) -> Self {
        Self {
            amount,
            energy_type: energy_type.into(),
        }
    }
}
