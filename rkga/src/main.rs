use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rkga::config::RkgaConfig;
use rkga::io::cli::Cli;
use rkga::io::output::Output;
use rkga::io::{read_config, read_instance};
use rkga::opt::rkga_optimizer::RkgaOptimizer;
use rkga::{EPOCH, io};
use wlsp::io::svg::solution_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RkgaConfig::default()
        }
        Some(config_file) => read_config(config_file)?,
    };
    if let Some(seed) = args.prng_seed {
        config.prng_seed = Some(seed);
    }

    info!("[MAIN] Successfully parsed RkgaConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = read_instance(&args.input_file)?;
    let instance = wlsp::io::import(&ext_instance)?;
    info!(
        "[MAIN] Imported instance {:?} with {} items",
        ext_instance.name,
        instance.n_items()
    );

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let sol = RkgaOptimizer::new(instance.clone(), config, rng).solve();

    {
        let output = Output {
            instance: ext_instance,
            solution: wlsp::io::export(&instance, &sol, *EPOCH),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let svg = solution_to_svg(&instance, &sol, config.svg_draw_options, &input_file_stem);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
