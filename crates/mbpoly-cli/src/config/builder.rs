use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputConfig};
use crate::cli::EvalArgs;
use crate::error::{CliError, Result};
use std::path::PathBuf;

pub fn build_config(args: &EvalArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let coefficients_path = args
        .coefficients
        .clone()
        .or(file_config.coefficients.take())
        .ok_or_else(|| {
            CliError::Config(
                "A coefficient file is required either via --coefficients or in the config file."
                    .to_string(),
            )
        })?;

    let output_file = file_config.output.take().unwrap_or_default();
    let precision = args
        .precision
        .or(output_file.precision)
        .unwrap_or(defaults.precision);
    let delimiter = args
        .delimiter
        .or(output_file.delimiter)
        .unwrap_or(defaults.delimiter);
    let header = if args.no_header {
        false
    } else {
        output_file.header.unwrap_or(defaults.header)
    };

    Ok(AppConfig {
        coefficients_path,
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        output: OutputConfig {
            precision,
            delimiter: delimiter_byte(delimiter)?,
            header,
        },
    })
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    match delimiter {
        '"' | '\n' | '\r' | '.' => {}
        c if c.is_ascii() && !c.is_ascii_alphanumeric() => return Ok(c as u8),
        _ => {}
    }
    Err(CliError::Argument(format!(
        "Delimiter must be a single ASCII punctuation or whitespace character other than '.', '\"' or a line break, got {:?}.",
        delimiter
    )))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        }
        let key = parts[0];
        let value_str = parts[1];

        match key {
            "coefficients" => {
                config.coefficients = Some(PathBuf::from(value_str));
            }
            "output.precision" => {
                config.output.get_or_insert_with(Default::default).precision =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                    })?);
            }
            "output.delimiter" => {
                let mut chars = value_str.chars();
                let delimiter = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        return Err(CliError::Config(format!(
                            "Invalid character value for {}: {}",
                            key, value_str
                        )));
                    }
                };
                config.output.get_or_insert_with(Default::default).delimiter = Some(delimiter);
            }
            "output.header" => {
                config.output.get_or_insert_with(Default::default).header =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
