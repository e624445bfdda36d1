//! Case files: which values to cast at which widths, stored as TOML (or any
//! other format the `config` crate understands).
//!
//! ```toml
//! width = 64
//! source_width = 8
//! values = [0, "0x7f", 255]
//! range = { start = 250, end = 255 }
//! ```

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use utos_cast::IntWidth;
use common::log_debug;

use crate::{args::parse_unsigned, error::DriverError, render::Row};

/// The largest number of values a range may expand to.
pub const MAX_RANGE_LEN: u64 = 1 << 16;

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub width: IntWidth,
    #[serde(default)]
    pub source_width: Option<IntWidth>,
    #[serde(default)]
    pub values: Vec<CaseValue>,
    #[serde(default)]
    pub range: Option<CaseRange>,
}

/// Either a plain integer or a string in any notation [`parse_unsigned`] reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CaseValue {
    Int(u64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseRange {
    pub start: CaseValue,
    pub end: CaseValue,
}

impl CaseValue {
    pub fn resolve(&self) -> Result<u64, DriverError> {
        match self {
            CaseValue::Int(value) => Ok(*value),
            CaseValue::Text(text) => {
                parse_unsigned(text).map_err(|source| DriverError::InvalidValue {
                    text: text.clone(),
                    source,
                })
            }
        }
    }
}

/// Values in `start..=end`, refusing ranges longer than [`MAX_RANGE_LEN`].
/// An empty range (`start > end`) is allowed.
pub fn bounded_range(start: u64, end: u64) -> Result<impl Iterator<Item = u64>, DriverError> {
    if end >= start && end - start >= MAX_RANGE_LEN {
        return Err(DriverError::RangeTooLarge {
            start,
            end,
            limit: MAX_RANGE_LEN,
        });
    }
    Ok(start..=end)
}

impl Case {
    pub fn load(path: &Path) -> Result<Self, DriverError> {
        log_debug!("Loading case {}", path.display());
        Ok(Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?)
    }

    pub fn parse(text: &str, format: FileFormat) -> Result<Self, DriverError> {
        Ok(Config::builder()
            .add_source(File::from_str(text, format))
            .build()?
            .try_deserialize()?)
    }

    /// Returns `(source, target)`.
    pub fn widths(&self) -> (IntWidth, IntWidth) {
        (self.source_width.unwrap_or(self.width), self.width)
    }

    /// The listed values followed by the range, in order.
    pub fn inputs(&self) -> Result<Vec<u64>, DriverError> {
        let mut inputs = self
            .values
            .iter()
            .map(CaseValue::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(range) = &self.range {
            inputs.extend(bounded_range(range.start.resolve()?, range.end.resolve()?)?);
        }
        Ok(inputs)
    }

    /// `origin` only names the case in errors.
    pub fn evaluate(&self, origin: &Path) -> Result<Vec<Row>, DriverError> {
        let inputs = self.inputs()?;
        if inputs.is_empty() {
            return Err(DriverError::EmptyCase {
                path: PathBuf::from(origin),
            });
        }
        let (source, target) = self.widths();
        Ok(Row::evaluate_all(source, target, inputs)?)
    }
}
