// TuniFia ⚡ AGPL-3.0 License

//! Binary entry point for the energy prediction CLI.

use std::io;
use std::process;

use clap::Parser;

use energy_predictor::cli::args::Cli;
use energy_predictor::cli::logging;
use energy_predictor::cli::predict::run_prediction;
use energy_predictor::output;

fn main() {
    let cli = Cli::parse();
    logging::set_verbose(cli.verbose);

    let result = run_prediction(&cli)
        .and_then(|prediction| output::write_framed(&mut io::stdout().lock(), &prediction));

    if let Err(e) = result {
        eprintln!("Prediction failed: {e}");
        process::exit(1);
    }
}
