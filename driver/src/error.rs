use std::{io, num::ParseIntError, path::PathBuf};

use derive_more as dm;

use utos_cast::CastError;

#[derive(Debug, dm::Display, dm::Error, dm::From)]
pub enum DriverError {
    #[display("{_0}")]
    Cast(CastError),
    #[display("Invalid value `{text}`: {source}")]
    #[from(ignore)]
    InvalidValue { text: String, source: ParseIntError },
    #[display("Range {start}..={end} has more than {limit} values")]
    #[from(ignore)]
    RangeTooLarge { start: u64, end: u64, limit: u64 },
    #[display("Configuration error: {_0}")]
    Config(config::ConfigError),
    #[display("Failed to write output: {_0}")]
    Output(io::Error),
    #[display("I/O error on {}: {source}", path.display())]
    #[from(ignore)]
    Io { path: PathBuf, source: io::Error },
    #[display("Invalid case pattern: {_0}")]
    Pattern(glob::PatternError),
    #[display("{_0}")]
    Glob(glob::GlobError),
    #[display("Case {} has neither values nor a range", path.display())]
    #[from(ignore)]
    EmptyCase { path: PathBuf },
    #[display("Output of {} does not match {}", path.display(), blessed.display())]
    #[from(ignore)]
    Mismatch { path: PathBuf, blessed: PathBuf },
    #[display("{failed} of {total} bless cases failed")]
    #[from(ignore)]
    BlessFailed { failed: usize, total: usize },
}

impl DriverError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        move |source| DriverError::Io {
            path: path.into(),
            source,
        }
    }
}
