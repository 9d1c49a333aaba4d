use crate::cli::EvalArgs;
use crate::config::{self, AppConfig};
use crate::error::Result;
use crate::utils::output::write_evaluations;
use crate::utils::progress::CliProgressHandler;
use mbpoly::core::io::{CoefficientSet, CoordinateSet};
use mbpoly::engine::progress::ProgressReporter;
use mbpoly::workflows::evaluate::{self, Evaluation};
use std::fs::File;
use std::io::BufWriter;
use tracing::{debug, info};

pub fn run(args: EvalArgs, show_progress: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = config::build_config(&args)?;
    debug!("Resolved configuration: {:?}", &config);

    let evaluations = evaluate_from_config(&config, show_progress)?;

    match &config.output_path {
        Some(path) => {
            info!("Writing {} energies to {:?}", evaluations.len(), path);
            let file = BufWriter::new(File::create(path)?);
            write_evaluations(file, &evaluations, &config.output)?;

            match evaluate::summarize(&evaluations) {
                Some(summary) => eprintln!(
                    "✓ {} energies written to {} (min {:.6}, max {:.6}, mean {:.6})",
                    summary.count,
                    path.display(),
                    summary.min,
                    summary.max,
                    summary.mean
                ),
                None => eprintln!("✓ No configurations found; wrote {}", path.display()),
            }
        }
        None => {
            let stdout = std::io::stdout();
            write_evaluations(stdout.lock(), &evaluations, &config.output)?;
        }
    }

    Ok(())
}

fn evaluate_from_config(config: &AppConfig, show_progress: bool) -> Result<Vec<Evaluation>> {
    info!("Loading coefficients from {:?}", &config.coefficients_path);
    let coefficients = CoefficientSet::load(&config.coefficients_path)?;
    info!("Using coefficient set '{}'.", coefficients.label());

    info!("Loading configurations from {:?}", &config.input_path);
    let coordinates = CoordinateSet::load(&config.input_path)?;

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let evaluations = evaluate::run(&coefficients, &coordinates, &reporter);
    debug!(
        "Progress bar counted {} completed evaluation(s).",
        progress_handler.completed()
    );
    Ok(evaluations)
}
