use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use cell_layout::io::ext_repr::ExtInstance;
use cell_layout::io::tsv;
use log::{Level, LevelFilter, info, log, warn};
use ndarray::Array2;
use serde::Serialize;

use crate::EPOCH;
use crate::config::PHCConfig;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

/// Reads and validates the optimizer configuration, falling back to the default one when no file is given.
pub fn read_config(path: Option<&Path>) -> Result<PHCConfig> {
    let config: PHCConfig = match path {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            PHCConfig::default()
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")?
        }
    };
    config.validate()?;
    Ok(config)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Writes a matrix as tab-separated text, see [`cell_layout::io::tsv::write_tsv`].
pub fn write_tsv(values: &Array2<f64>, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open matrix file: {}", path.display()))?;
    tsv::write_tsv(values, BufWriter::new(file))
        .with_context(|| format!("could not write matrix file: {}", path.display()))?;

    info!("matrix written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Logs to stdout, prefixed with the level, the time elapsed since [`EPOCH`] and the thread.
/// Rayon workers are unnamed, they are identified by their thread id instead.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread = match handle.name() {
                Some(name) => name.to_string(),
                None => format!("{:?}", handle.id()),
            };

            let elapsed = EPOCH.elapsed();
            let (secs, millis) = (elapsed.as_secs(), elapsed.subsec_millis());
            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}.{millis:0>3}] <{thread}>",
                record.level(),
                secs / 3600,
                (secs / 60) % 60,
                secs % 60,
            );

            out.finish(format_args!("{prefix:<40}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    log!(Level::Info, "Epoch: {}", jiff::Timestamp::now());
    Ok(())
}
