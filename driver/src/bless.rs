//! Bless tests: the rendered output of each case file must stay the same as the
//! last approved ("blessed") run, stored next to the case with an `.out`
//! extension. In update mode the blessed files are rewritten instead.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use glob::glob;

use common::{log_debug, log_info, log_trace, log_warn};

use crate::{case::Case, error::DriverError, render::render_text};

pub const CASE_EXTENSION: &str = "toml";
pub const BLESSED_EXTENSION: &str = "out";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlessOutcome {
    /// The output is the same as the blessed one.
    Matched,
    /// The blessed output was (re)written.
    Updated,
}

#[derive(Debug, Clone)]
pub struct BlessCase {
    pub name: String,
    pub source: PathBuf,
}

impl BlessCase {
    pub fn new(source: PathBuf) -> Self {
        let name = source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| source.display().to_string());
        Self { name, source }
    }

    pub fn blessed(&self) -> PathBuf {
        self.source.with_extension(BLESSED_EXTENSION)
    }

    pub fn generate(&self) -> Result<String, DriverError> {
        let case = Case::load(&self.source)?;
        let rows = case.evaluate(&self.source)?;
        Ok(render_text(&rows))
    }

    #[tracing::instrument(level = "debug", skip(self), fields(case = %self.name))]
    pub fn run(&self, update: bool) -> Result<BlessOutcome, DriverError> {
        let output = self.generate()?;
        log_trace!("Generated output:\n{}", output);
        let blessed = self.blessed();

        let current = match fs::read(&blessed) {
            Ok(current) => Some(current),
            Err(err) if update && err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(DriverError::io(&blessed)(err)),
        };

        if current.as_deref() == Some(output.as_bytes()) {
            return Ok(BlessOutcome::Matched);
        }

        if update {
            log_debug!("Writing blessed output to {}", blessed.display());
            fs::write(&blessed, output).map_err(DriverError::io(&blessed))?;
            Ok(BlessOutcome::Updated)
        } else {
            Err(DriverError::Mismatch {
                path: self.source.clone(),
                blessed,
            })
        }
    }
}

/// Case files directly under `dir`, sorted by path.
pub fn collect_cases(dir: &Path) -> Result<Vec<BlessCase>, DriverError> {
    let pattern = dir.join(format!("*.{CASE_EXTENSION}"));
    let mut sources = glob(&pattern.to_string_lossy())?.collect::<Result<Vec<_>, _>>()?;
    sources.sort();
    Ok(sources.into_iter().map(BlessCase::new).collect())
}

/// Runs every case under `dir`, reporting each one to `out`.
/// Fails if any case fails, after all of them have run.
pub fn run_all(dir: &Path, update: bool, mut out: impl Write) -> Result<(), DriverError> {
    let cases = collect_cases(dir)?;
    log_info!("Found {} bless cases in {}", cases.len(), dir.display());
    writeln!(out, "[BLESS] found {} cases", cases.len())?;

    let mut failed = 0;
    for case in &cases {
        write!(out, "{} {}... ", if update { "Blessing" } else { "Checking" }, case.name)?;
        match case.run(update) {
            Ok(BlessOutcome::Matched) => writeln!(out, "OK")?,
            Ok(BlessOutcome::Updated) => writeln!(out, "UPDATED")?,
            Err(err) => {
                log_warn!("Bless case {} failed: {}", case.name, err);
                writeln!(out, "FAILED: {err}")?;
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(DriverError::BlessFailed {
            failed,
            total: cases.len(),
        });
    }
    Ok(())
}
