use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;
use wlsp::io::ext_repr::ExtInstance;

use crate::EPOCH;
use crate::config::RkgaConfig;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path).context("could not open instance file")?;
    serde_json::from_reader(BufReader::new(file))
        .context("not a valid weighted strip packing instance (ExtInstance)")
}

pub fn read_config(path: &Path) -> Result<RkgaConfig> {
    let file = File::open(path).context("could not open config file")?;
    let config: RkgaConfig =
        serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")?;
    config.validate()?;
    Ok(config)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)?;
    info!("[IO] json written to file://{}", fs::canonicalize(path)?.to_str().unwrap_or("?"));
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)?;
    info!("[IO] svg written to file://{}", fs::canonicalize(path)?.to_str().unwrap_or("?"));
    Ok(())
}

/// Installs the global logger, writing to stdout.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    dispatch(level_filter).chain(std::io::stdout()).apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}

/// Installs the global logger, writing to stderr. For binaries that print their result to stdout.
pub fn init_stderr_logger(level_filter: LevelFilter) -> Result<()> {
    dispatch(level_filter).chain(std::io::stderr()).apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}

fn dispatch(level_filter: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
}
