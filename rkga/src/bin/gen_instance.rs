use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rkga::io;
use wlsp::io::export_instance;
use wlsp::io::generator::{GeneratorConfig, generate_instance};

/// Generates a random weighted strip packing instance
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct GenCli {
    /// Seed for the PRNG, entropy is used if undefined
    #[arg(short, long)]
    seed: Option<u64>,
    /// Output file, the instance is printed to stdout if undefined
    #[arg(short, long, value_name = "FILE")]
    output_file: Option<PathBuf>,
    /// Generator configuration (JSON), defaults are used if undefined
    #[arg(short, long, value_name = "FILE")]
    config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = GenCli::parse();
    io::init_stderr_logger(args.log_level)?;

    let config: GeneratorConfig = match &args.config_file {
        None => GeneratorConfig::default(),
        Some(path) => {
            let file = File::open(path).context("could not open generator config file")?;
            serde_json::from_reader(BufReader::new(file))
                .context("incorrect generator config file format")?
        }
    };
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let instance = generate_instance(&mut rng, &config);
    let name = match args.seed {
        Some(seed) => format!("generated_{seed}"),
        None => "generated".to_string(),
    };
    info!("[GEN] generated instance with {} items", instance.n_items());
    let ext_instance = export_instance(&instance, &name);

    match &args.output_file {
        Some(path) => io::write_json(&ext_instance, path)?,
        None => println!("{}", serde_json::to_string_pretty(&ext_instance)?),
    }
    Ok(())
}
