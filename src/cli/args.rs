// TuniFia ⚡ AGPL-3.0 License

//! Command-line argument definitions.

use clap::Parser;

/// Predict energy production for a renewable-energy investment.
///
/// The flag spelling matches the backend that spawns this binary, including
/// the underscore in `--energy_type`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Output protocol:
    On success stdout carries exactly three lines:
        __JSON_START__
        {\"predicted_kwh\": <number>}
        __JSON_END__
    On failure stderr carries one line starting with 'Prediction failed:'
    and the exit status is 1.

Examples:
    energy-predictor --model investment_energy_regression.json --amount 2500 --energy_type Solar
    energy-predictor --model models/regression.json --amount 10000 --energy_type Wind --verbose
    ENERGY_MODEL=models/regression.json energy-predictor --amount 500 --energy_type Hydro")]
pub struct Cli {
    /// Path to the serialized model artifact
    #[arg(short, long, env = "ENERGY_MODEL", value_name = "PATH")]
    pub model: String,

    /// Investment amount to score
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub amount: f64,

    /// Energy segment the investment targets (e.g. Wind, Solar, Hydro, Biomass)
    #[arg(long = "energy_type", value_name = "STRING")]
    pub energy_type: String,

    /// Write diagnostic output to stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
