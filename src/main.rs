use std::path::Path;

use anyhow::Context;
use clap::Parser;
use log::info;

use chunk_mean::available_workers;
use chunk_mean::cli::BenchArgs;
use chunk_mean::harness::run_benchmark;
use chunk_mean::output::json::{write_json, JsonReport};
use chunk_mean::output::progress::BenchProgress;
use chunk_mean::output::summary::comparison_lines;
use chunk_mean::output::table::render_table;

fn main() -> anyhow::Result<()> {
    let args = BenchArgs::parse();
    pretty_env_logger::formatted_builder()
        .filter_level(args.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    let config = args.bench_config(available_workers())?;
    info!(
        "sizes {:?}, runs {}, warmup {}, workers {}, seed {}",
        config.sizes, config.runs, config.warmup, config.workers, config.seed
    );

    let progress = if args.no_progress {
        BenchProgress::hidden()
    } else {
        BenchProgress::new()
    };
    let cb = progress.callback();
    let results = run_benchmark(&config, Some(&cb)).context("benchmark failed")?;
    progress.finish();

    for dp in &results {
        for line in comparison_lines(dp) {
            println!("{line}");
        }
        println!();
    }
    render_table(&results);

    if let Some(ref path) = args.json_file {
        let report = JsonReport {
            workers: config.workers,
            seed: config.seed,
            runs: config.runs,
            warmup: config.warmup,
            results,
        };
        write_json(Path::new(path), &report)?;
        println!("JSON results written to: {path}");
    }

    println!("Computation completed.");
    Ok(())
}
