// TuniFia ⚡ AGPL-3.0 License

//! Sentinel-framed JSON output.
//!
//! The web backend spawns this binary and cuts the payload out of captured
//! stdout between two sentinel lines, so a successful run writes exactly
//! three lines and nothing else on stdout. Diagnostics belong on stderr.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};

/// Opening sentinel line of the stdout frame.
pub const JSON_START: &str = "__JSON_START__";

/// Closing sentinel line of the stdout frame.
pub const JSON_END: &str = "__JSON_END__";

/// Prediction payload emitted between the sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted energy production in kWh.
    pub predicted_kwh: f64,
}

impl Prediction {
    /// Create a payload.
    #[must_use]
    pub const fn new(predicted_kwh: f64) -> Self {
        Self { predicted_kwh }
    }

    /// Render the framed payload: sentinel, JSON body, sentinel, each on its
    /// own line.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not finite (serde_json would
    /// render it as `null`, breaking the numeric payload) or when
    /// serialization fails.
    pub fn to_framed(&self) -> Result<String> {
        if !self.predicted_kwh.is_finite() {
            return Err(PredictError::Inference(format!(
                "prediction is not finite ({})",
                self.predicted_kwh
            )));
        }
        let body = serde_json::to_string(self)?;
        Ok(format!("{JSON_START}\n{body}\n{JSON_END}\n"))
    }
}

/// Write the framed payload to `writer` and flush it.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_framed<W: Write>(writer: &mut W, prediction: &Prediction) -> Result<()> {
    writer.write_all(prediction.to_framed()?.as_bytes())?;
    writer.flush()?;
    Ok(())
}
