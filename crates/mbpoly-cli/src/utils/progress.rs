use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mbpoly::engine::progress::{Progress, ProgressCallback};
use tracing::info;

const BAR_TEMPLATE: &str = "{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, eta {eta})";

/// Draws the evaluation workflow's task events as a progress bar on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    /// A handler whose bar is only drawn when `visible` is set.
    pub fn new(visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let pb = ProgressBar::with_draw_target(Some(0), target)
            .with_style(Self::bar_style())
            .with_message("Evaluating");

        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::TaskStart { total_steps } => {
                pb.reset();
                pb.set_length(total_steps);
                pb.set_position(0);
            }
            Progress::TaskIncrement => pb.inc(1),
            Progress::TaskFinish => {
                let length = pb.length().unwrap_or(0);
                if pb.position() < length {
                    pb.set_position(length);
                }
                pb.finish_and_clear();
            }
            Progress::Message(msg) => {
                if pb.length().unwrap_or(0) > 0 && !pb.is_finished() {
                    pb.println(format!("  {}", msg));
                } else {
                    info!("{}", msg);
                }
            }
        })
    }

    /// Number of configurations the bar has counted so far.
    pub fn completed(&self) -> u64 {
        self.pb.position()
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}
