use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Optimizes a weighted level strip packing instance
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance to solve (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder to write the solution (JSON and SVG) to, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Optimizer configuration (JSON), defaults are used if undefined
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the `prng_seed` of the configuration
    #[arg(long, value_name = "SEED")]
    pub prng_seed: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
