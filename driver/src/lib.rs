pub mod args;
pub mod bless;
pub mod case;
pub mod config;
pub mod error;
pub mod render;

use std::io::Write;

use const_format::concatcp;

use common::log_debug;
use utos_cast::{classify, sample, IntWidth};

use self::{
    args::{Cli, Command},
    case::bounded_range,
    config::UtosConfig,
    error::DriverError,
    render::{render, Row},
};

pub const CONFIG_ENV_PREFIX: &str = "UTOS";
pub const LOG_ENV: &str = concatcp!(CONFIG_ENV_PREFIX, "_LOG");
/// When set, the bless tests rewrite the blessed outputs instead of checking them.
pub const BLESS_ENV: &str = concatcp!(CONFIG_ENV_PREFIX, "_BLESS");

/// Runs the command, writing its rows to `out`, and returns the exit status.
pub fn run(cli: Cli, config: &UtosConfig, mut out: impl Write) -> Result<i32, DriverError> {
    let format = cli.format.unwrap_or(config.output_format);
    log_debug!("Running {:?} with output format {:?}", cli.command, format);

    match cli.command {
        Command::Cast { widths, values } => {
            let (source, target) = widths.resolve(config.default_width);
            let rows = Row::evaluate_all(source, target, values)?;
            render(&rows, format, &mut out)?;
            Ok(0)
        }
        Command::Table { widths, start, end } => {
            let (source, target) = widths.resolve(config.default_width);
            let rows = Row::evaluate_all(source, target, bounded_range(start, end)?)?;
            render(&rows, format, &mut out)?;
            Ok(0)
        }
        Command::Sample { values } => {
            let rows = values.into_iter().map(sample_row).collect::<Vec<_>>();
            render(&rows, format, &mut out)?;
            Ok(sample::entry())
        }
        Command::Bless(args) => {
            let dir = args.dir.unwrap_or_else(|| config.bless_dir.clone());
            bless::run_all(&dir, args.bless, &mut out)?;
            Ok(0)
        }
    }
}

/// Row of `foo(x, 0, 0)`; `foo` zero-extends its byte before the cast.
fn sample_row(x: u8) -> Row {
    let widened = u64::from(x);
    Row {
        source: IntWidth::W8,
        target: IntWidth::W64,
        input: widened,
        output: sample::foo(x, 0, 0),
        branch: classify(widened),
    }
}
