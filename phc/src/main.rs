use std::fs;

use anyhow::{Context, Result};
use cell_layout::io::{export, import};
use clap::Parser as ClapParser;
use log::info;
use phc::EPOCH;
use phc::io;
use phc::io::cli::Cli;
use phc::io::output::PHCOutput;
use phc::opt::PHCOptimizer;
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::read_config(args.config_file.as_deref())?;
    info!("[MAIN] using {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import(&ext_instance)?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut optimizer = PHCOptimizer::new(instance, config, rng)?;
    let sol = optimizer.solve()?;

    let output = PHCOutput {
        instance: ext_instance,
        initial_solution: export(&optimizer.instance, &sol.initial, *EPOCH),
        solution: export(&optimizer.instance, &sol.improved, *EPOCH),
        config,
    };
    let folder = &args.solution_folder;
    io::write_json(&output, &folder.join(format!("sol_{input_stem}.json")))?;
    io::write_tsv(
        optimizer.flow.values(),
        &folder.join(format!("flow_{input_stem}.tsv")),
    )?;
    io::write_tsv(
        optimizer.distances.values(),
        &folder.join(format!("distance_{input_stem}.tsv")),
    )?;

    Ok(())
}
