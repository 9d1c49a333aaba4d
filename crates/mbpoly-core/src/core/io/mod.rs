//! Readers for the inputs of a polynomial evaluation.
//!
//! Coefficient sets are stored as small TOML documents, coordinate sets as
//! headerless CSV with one 15-column row per configuration.

pub mod coefficients;
pub mod coordinates;
pub mod error;

pub use coefficients::CoefficientSet;
pub use coordinates::CoordinateSet;
pub use error::ParamLoadError;
