use crate::core::io::{CoefficientSet, CoordinateSet};
use crate::core::polynomial::PolyModel;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub index: usize,
    pub energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Evaluates every configuration in `coordinates` with one coefficient set.
///
/// Results are returned in input order, one per row.
#[instrument(skip_all, name = "evaluate_workflow", fields(coefficients = coefficients.label()))]
pub fn run(
    coefficients: &CoefficientSet,
    coordinates: &CoordinateSet,
    reporter: &ProgressReporter,
) -> Vec<Evaluation> {
    if coordinates.is_empty() {
        warn!("No configurations to evaluate.");
        reporter.report(Progress::Message(
            "No configurations to evaluate.".to_string(),
        ));
        return Vec::new();
    }

    info!("Evaluating {} configuration(s).", coordinates.len());
    reporter.report(Progress::TaskStart {
        total_steps: coordinates.len() as u64,
    });

    let a = coefficients.as_array();
    let evaluations: Vec<Evaluation> = coordinates
        .iter()
        .enumerate()
        .map(|(index, x)| {
            let energy = PolyModel::eval_direct(a, x);
            trace!(index, energy, "Evaluated configuration.");
            reporter.report(Progress::TaskIncrement);
            Evaluation { index, energy }
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    if let Some(summary) = summarize(&evaluations) {
        info!(
            "Evaluation finished: min {:.6}, max {:.6}, mean {:.6}.",
            summary.min, summary.max, summary.mean
        );
    }
    evaluations
}

pub fn summarize(evaluations: &[Evaluation]) -> Option<EnergySummary> {
    if evaluations.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for e in evaluations {
        min = min.min(e.energy);
        max = max.max(e.energy);
        sum += e.energy;
    }
    Some(EnergySummary {
        count: evaluations.len(),
        min,
        max,
        mean: sum / evaluations.len() as f64,
    })
}
