use std::{error::Error, num::ParseIntError, path::PathBuf};

use clap::{Args, Parser, Subcommand};

use utos_cast::IntWidth;

use crate::render::OutputFormat;

/// Parses an unsigned integer in decimal or with a `0x`, `0o`, or `0b` prefix.
/// Underscores are allowed as digit separators.
pub fn parse_unsigned(text: &str) -> Result<u64, ParseIntError> {
    let cleaned = text.trim().replace('_', "");
    let (digits, radix) = match cleaned.get(..2) {
        Some("0x" | "0X") => (&cleaned[2..], 16),
        Some("0o" | "0O") => (&cleaned[2..], 8),
        Some("0b" | "0B") => (&cleaned[2..], 2),
        _ => (cleaned.as_str(), 10),
    };
    u64::from_str_radix(digits, radix)
}

fn parse_byte(text: &str) -> Result<u8, Box<dyn Error + Send + Sync>> {
    Ok(u8::try_from(parse_unsigned(text)?)?)
}

/// Casts unsigned integers to their signed counterparts of the same width.
#[derive(Parser, Debug)]
#[command(name = "utos", version)]
pub struct Cli {
    /// The format of the printed rows, overrides the configured one
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cast the given values
    Cast {
        #[command(flatten)]
        widths: WidthArgs,
        /// Values to cast (decimal, 0x.., 0o.., or 0b..)
        #[arg(required = true, value_parser = parse_unsigned)]
        values: Vec<u64>,
    },
    /// Cast every value of an inclusive range
    Table {
        #[command(flatten)]
        widths: WidthArgs,
        #[arg(long, value_parser = parse_unsigned)]
        start: u64,
        #[arg(long, value_parser = parse_unsigned)]
        end: u64,
    },
    /// Run `foo` of the sample program on each byte
    Sample {
        #[arg(required = true, value_parser = parse_byte)]
        values: Vec<u8>,
    },
    /// Check the case files against their blessed outputs
    Bless(BlessArgs),
}

#[derive(Args, Debug, Clone, Copy)]
pub struct WidthArgs {
    /// Width of the integer pair: 8, 16, 32, 64, or a type name such as u32
    #[arg(short, long)]
    pub width: Option<IntWidth>,
    /// Width of the inputs, zero-extended to the target width. Defaults to it.
    #[arg(short, long)]
    pub source_width: Option<IntWidth>,
}

impl WidthArgs {
    /// Returns `(source, target)`.
    pub fn resolve(self, default_width: IntWidth) -> (IntWidth, IntWidth) {
        let target = self.width.unwrap_or(default_width);
        (self.source_width.unwrap_or(target), target)
    }
}

#[derive(Args, Debug)]
pub struct BlessArgs {
    /// Directory holding the case files, defaults to the configured one
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Overwrite the blessed outputs instead of checking them
    #[arg(long, action)]
    pub bless: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_prefixed_values() {
        assert_eq!(parse_unsigned("255").unwrap(), 255);
        assert_eq!(parse_unsigned("0xff").unwrap(), 255);
        assert_eq!(parse_unsigned("0b1000_0000").unwrap(), 128);
        assert_eq!(parse_unsigned("0o777").unwrap(), 511);
        assert_eq!(parse_unsigned("18_446_744_073_709_551_615").unwrap(), u64::MAX);
        assert!(parse_unsigned("-1").is_err());
        assert!(parse_unsigned("0x").is_err());
        assert!(parse_unsigned("twelve").is_err());
    }

    #[test]
    fn bytes_reject_wide_values() {
        assert_eq!(parse_byte("0xff").unwrap(), 255);
        assert!(parse_byte("256").is_err());
    }

    #[test]
    fn parses_cast_command() {
        let cli = Cli::try_parse_from(["utos", "cast", "-w", "u8", "0x80", "255"]).unwrap();
        match cli.command {
            Command::Cast { widths, values } => {
                assert_eq!(widths.resolve(IntWidth::W64), (IntWidth::W8, IntWidth::W8));
                assert_eq!(values, vec![128, 255]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn width_falls_back_to_the_default() {
        let widths = WidthArgs {
            width: None,
            source_width: Some(IntWidth::W8),
        };
        assert_eq!(widths.resolve(IntWidth::W64), (IntWidth::W8, IntWidth::W64));
    }

    #[test]
    fn rejects_unsupported_width() {
        assert!(Cli::try_parse_from(["utos", "cast", "-w", "12", "1"]).is_err());
    }
}
