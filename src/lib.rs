// TuniFia ⚡ AGPL-3.0 License

//! Investment-to-energy regression inference for the TuniFia
//! sustainable-energy desk.
//!
//! This crate loads a serialized regression artifact exported by the
//! training pipeline and scores a single investment record against it. It
//! ships as a library plus the `energy-predictor` binary the web backend
//! spawns per request.
//!
//! # Quick Start
//!
//! ```no_run
//! use energy_predictor::{EnergyModel, InferenceRequest};
//!
//! fn main() -> energy_predictor::Result<()> {
//!     let model = EnergyModel::from_file("investment_energy_regression.json")?;
//!     let request = InferenceRequest::new(2500.0, "Solar");
//!     let kwh = model.predict(&request)?;
//!     println!("predicted {kwh:.1} kWh");
//!     Ok(())
//! }
//! ```
//!
//! # Command line
//!
//! ```bash
//! energy-predictor --model investment_energy_regression.json \
//!     --amount 2500 --energy_type Solar
//! ```
//!
//! On success the binary writes exactly three lines to stdout:
//!
//! ```text
//! __JSON_START__
//! {"predicted_kwh":3140.0}
//! __JSON_END__
//! ```
//!
//! On any failure it writes a single line to stderr, `Prediction failed:`
//! followed by the details, and exits with status 1. Consumers can treat
//! the sentinels as the only stdout contract; all diagnostics (including
//! `--verbose` output) go to stderr.
//!
//! # Backend integration
//!
//! The frame exists so a spawning process can extract the payload without
//! trusting the rest of stdout:
//!
//! ```javascript
//! const stdout = await runPredictor(args);
//! const start = stdout.indexOf("__JSON_START__");
//! const end = stdout.indexOf("__JSON_END__");
//! const payload = JSON.parse(stdout.slice(start + 14, end).trim());
//! ```
//!
//! # Model artifacts
//!
//! An artifact is a JSON document bundling the feature schema with the
//! fitted weights:
//!
//! ```json
//! {
//!   "format": 1,
//!   "metadata": {"name": "investment_energy_regression", "version": "2024.3"},
//!   "features": [
//!     {"kind": "numeric", "name": "amount_of_investment"},
//!     {"kind": "categorical", "name": "type_of_energy",
//!      "categories": ["Wind", "Solar", "Hydro", "Biomass"]}
//!   ],
//!   "coefficients": [1.2, 150.0, 90.0, 120.0, 60.0],
//!   "intercept": 50.0
//! }
//! ```
//!
//! Artifacts are validated on load; scoring the same request against the
//! same artifact always returns the same value.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`model`] | Artifact loading, validation and scoring |
//! | [`schema`] | Feature columns and request encoding |
//! | [`metadata`] | Training-side metadata block |
//! | [`request`] | Single-record inference input |
//! | [`output`] | Sentinel-framed JSON payload |
//! | [`error`] | Error types |
//! | [`cli`] | Argument parsing, diagnostics, prediction driver |

pub mod cli;
pub mod error;
pub mod metadata;
pub mod model;
pub mod output;
pub mod request;
pub mod schema;

pub use error::{PredictError, Result};
pub use metadata::ModelMetadata;
pub use model::EnergyModel;
pub use output::{write_framed, Prediction, JSON_END, JSON_START};
pub use request::InferenceRequest;
pub use schema::FeatureColumn;

/// Version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
