use super::error::ParamLoadError;
use crate::core::polynomial::NUM_VARIABLES;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// An ordered batch of dimer configurations, one coordinate vector per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateSet {
    rows: Vec<[f64; NUM_VARIABLES]>,
}

impl CoordinateSet {
    pub fn new(rows: Vec<[f64; NUM_VARIABLES]>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[[f64; NUM_VARIABLES]] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64; NUM_VARIABLES]> {
        self.rows.iter()
    }

    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let file = File::open(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::read_from(file, &path.to_string_lossy())
    }

    /// Reads headerless CSV rows of exactly [`NUM_VARIABLES`] values.
    ///
    /// Lines starting with `#` and lines that are empty or hold only whitespace
    /// are skipped, and whitespace around fields is ignored. `origin` is only
    /// used in error messages, which name the 1-based line of the bad record.
    pub fn read_from(reader: impl Read, origin: &str) -> Result<Self, ParamLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .from_reader(reader.chain(&b"\n"[..]));

        let csv_error = |e: csv::Error| ParamLoadError::Csv {
            path: origin.to_string(),
            source: e,
        };

        let mut rows = Vec::new();
        let mut record = csv::StringRecord::new();
        while reader.read_record(&mut record).map_err(csv_error)? {
            if record.iter().all(str::is_empty) {
                continue;
            }
            // Every record ends on a consumed '\n', so the reader already sits on the next line.
            let line = reader.position().line().saturating_sub(1);
            let what = || format!("coordinates on line {} of '{}'", line, origin);

            let values: Vec<f64> = record.deserialize(None).map_err(csv_error)?;
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(ParamLoadError::NonFinite {
                    what: what(),
                    index,
                });
            }
            let actual = values.len();
            let values: [f64; NUM_VARIABLES] =
                values
                    .try_into()
                    .map_err(|_| ParamLoadError::InvalidLength {
                        what: what(),
                        expected: NUM_VARIABLES,
                        actual,
                    })?;
            rows.push(values);
        }
        Ok(Self { rows })
    }
}

impl From<Vec<[f64; NUM_VARIABLES]>> for CoordinateSet {
    fn from(rows: Vec<[f64; NUM_VARIABLES]>) -> Self {
        Self::new(rows)
    }
}
