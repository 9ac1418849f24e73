//! # mudae-stats CLI
//!
//! Command-line interface for the mudae-stats library.

use std::io::Write;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{error, info};

use mudae_stats::MudaeError;
use mudae_stats::cli::Args;
use mudae_stats::core::{Pipeline, ShowFrequencies, create_csv_writer};
use mudae_stats::export::load_export;
use mudae_stats::logging;
use mudae_stats::report::render_summary;

fn main() {
    let args = <Args as ClapParser>::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), MudaeError> {
    let start = Instant::now();
    let config = args.pipeline_config();

    // Fail fast on everything that can be checked before the traversal.
    let pipeline = Pipeline::new(&config)?;
    let export_path = args.export_path()?;
    let export = load_export(export_path)?;
    let mut writer = create_csv_writer(&args.output, config.profile)?;

    info!(
        profile = %config.profile,
        timezone = %config.timezone,
        output = %args.output.display(),
        "writing rows"
    );

    let mut frequencies = ShowFrequencies::new();
    let stats = pipeline.run(&export, &mut writer, &mut frequencies)?;
    writer.finish()?.flush()?;
    stats.log_summary();
    info!(
        rows = stats.written,
        elapsed_ms = start.elapsed().as_millis(),
        "output saved to {}",
        args.output.display()
    );

    if args.summary {
        print!("{}", render_summary(&frequencies, config.top_n));
    }

    Ok(())
}
