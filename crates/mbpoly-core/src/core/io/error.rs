use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Expected {expected} {what}, found {actual}")]
    InvalidLength {
        what: String,
        expected: usize,
        actual: usize,
    },
    #[error("Non-finite value in {what} at position {index}")]
    NonFinite { what: String, index: usize },
}
