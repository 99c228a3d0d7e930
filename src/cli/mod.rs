// TuniFia ⚡ AGPL-3.0 License

//! CLI surface: argument parsing, diagnostics and the prediction driver.

pub mod args;
pub mod logging;
pub mod predict;
