use crate::config::OutputConfig;
use crate::error::Result;
use mbpoly::workflows::evaluate::Evaluation;
use std::io::Write;

pub fn write_evaluations(
    writer: impl Write,
    evaluations: &[Evaluation],
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(writer);

    if config.header {
        writer.write_record(["index", "energy"])?;
    }
    for evaluation in evaluations {
        writer.write_record([
            evaluation.index.to_string(),
            format!("{:.*}", config.precision, evaluation.energy),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
