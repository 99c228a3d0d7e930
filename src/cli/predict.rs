// TuniFia ⚡ AGPL-3.0 License

//! Prediction pipeline driven by the CLI arguments.

use std::time::Instant;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::metadata::DEFAULT_TARGET;
use crate::model::EnergyModel;
use crate::output::Prediction;
use crate::request::InferenceRequest;
use crate::{verbose, warn};

/// Run one prediction against a serialized model artifact.
///
/// Loads the artifact named by the arguments, builds the single-row input
/// and scores it. The caller owns output framing and exit-code mapping.
///
/// # Errors
///
/// Propagates every load and inference failure; the messages are shaped so
/// the binary can prefix them with `Prediction failed:` unchanged.
pub fn run_prediction(args: &Cli) -> Result<Prediction> {
    let load_start = Instant::now();
    let model = EnergyModel::from_file(&args.model)?;
    let load_ms = load_start.elapsed().as_secs_f64() * 1000.0;

    verbose!(
        "Loaded {} ({} feature columns, encoded width {})",
        model.metadata().model_name(),
        model.num_features(),
        model.encoded_width()
    );
    if args.verbose && model.metadata().target != DEFAULT_TARGET {
        warn!(
            "artifact was fitted against '{}', output key stays '{DEFAULT_TARGET}'",
            model.metadata().target
        );
    }

    let request = InferenceRequest::new(args.amount, args.energy_type.as_str());

    let inference_start = Instant::now();
    let predicted_kwh = model.predict(&request)?;
    let inference_ms = inference_start.elapsed().as_secs_f64() * 1000.0;

    verbose!("Speed: {load_ms:.1}ms load, {inference_ms:.1}ms inference");

    Ok(Prediction::new(predicted_kwh))
}
