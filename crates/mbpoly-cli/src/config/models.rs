use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub precision: usize,
    pub delimiter: u8,
    pub header: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub coefficients_path: PathBuf,
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub output: OutputConfig,
}
