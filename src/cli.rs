use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "trenadenn",
    about = "Compute workout summaries (running, walking, swimming) from raw sensor packages"
)]
pub struct Cli {
    /// JSON file with sensor packages:
    /// `[{"code": "RUN", "data": [15000, 1, 75]}, ...]`.
    ///
    /// Without a file, the built-in demo packages are processed.
    #[arg(value_name = "PACKAGES")]
    pub packages: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
