use super::error::ParamLoadError;
use crate::core::polynomial::NUM_TERMS;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CoefficientFile {
    name: Option<String>,
    description: Option<String>,
    coefficients: Vec<f64>,
}

/// A validated vector of fitted coefficients, one per monomial of the basis.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet {
    pub name: Option<String>,
    pub description: Option<String>,
    values: [f64; NUM_TERMS],
}

impl CoefficientSet {
    pub fn new(values: Vec<f64>) -> Result<Self, ParamLoadError> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ParamLoadError::NonFinite {
                what: "coefficients".to_string(),
                index,
            });
        }
        let actual = values.len();
        let values: [f64; NUM_TERMS] = values.try_into().map_err(|_| ParamLoadError::InvalidLength {
            what: "coefficients".to_string(),
            expected: NUM_TERMS,
            actual,
        })?;
        Ok(Self {
            name: None,
            description: None,
            values,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    /// Parses a coefficient document. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &str) -> Result<Self, ParamLoadError> {
        let file: CoefficientFile = toml::from_str(content).map_err(|e| ParamLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        let mut set = Self::new(file.coefficients)?;
        set.name = file.name;
        set.description = file.description;
        Ok(set)
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; NUM_TERMS] {
        &self.values
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}
