use std::{
    fmt::{self, Display, Formatter},
    io::{self, Write},
};

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};

use utos_cast::{CastBranch, CastError, IntWidth, UnsignedValue};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    #[value(alias("jsonl"))]
    #[serde(alias = "jsonl")]
    JsonLines,
}

/// One evaluated cast: `input` of the `source` unsigned type, zero-extended to
/// `target` when narrower, then cast to the signed type of `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Row {
    #[serde(serialize_with = "unsigned_name")]
    pub source: IntWidth,
    #[serde(serialize_with = "signed_name")]
    pub target: IntWidth,
    pub input: u64,
    pub output: i64,
    pub branch: CastBranch,
}

impl Row {
    pub fn evaluate(source: IntWidth, target: IntWidth, input: u64) -> Result<Self, CastError> {
        let value = UnsignedValue::new(source, input)?.widen(target)?;
        Ok(Row {
            source,
            target,
            input,
            output: value.to_signed().value(),
            branch: value.branch(),
        })
    }

    pub fn evaluate_all(
        source: IntWidth,
        target: IntWidth,
        inputs: impl IntoIterator<Item = u64>,
    ) -> Result<Vec<Self>, CastError> {
        inputs
            .into_iter()
            .map(|input| Row::evaluate(source, target, input))
            .collect()
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} => {} {} ({})",
            self.source.unsigned_name(),
            self.input,
            self.target.signed_name(),
            self.output,
            self.branch
        )
    }
}

fn unsigned_name<S: Serializer>(width: &IntWidth, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(width.unsigned_name())
}

fn signed_name<S: Serializer>(width: &IntWidth, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(width.signed_name())
}

/// The text form, one row per line. This is what blessed outputs hold.
pub fn render_text(rows: &[Row]) -> String {
    rows.iter().map(|row| format!("{row}\n")).join("")
}

pub fn render(rows: &[Row], format: OutputFormat, mut out: impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Text => out.write_all(render_text(rows).as_bytes()),
        OutputFormat::JsonLines => rows.iter().try_for_each(|row| {
            serde_json::to_writer(&mut out, row)?;
            writeln!(out)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_both_branches() {
        let rows = Row::evaluate_all(IntWidth::W8, IntWidth::W8, [0, 127, 128, 255]).unwrap();
        let outputs = rows.iter().map(|r| (r.output, r.branch)).collect_vec();
        assert_eq!(
            outputs,
            vec![
                (0, CastBranch::Direct),
                (127, CastBranch::Direct),
                (-128, CastBranch::Wrapped),
                (-1, CastBranch::Wrapped),
            ]
        );
    }

    #[test]
    fn widened_rows_keep_source_input() {
        let row = Row::evaluate(IntWidth::W8, IntWidth::W64, 255).unwrap();
        assert_eq!(row.output, 255);
        assert_eq!(row.to_string(), "u8 255 => i64 255 (direct)");
    }

    #[test]
    fn rejects_out_of_range_and_narrowing() {
        assert!(Row::evaluate(IntWidth::W8, IntWidth::W8, 256).is_err());
        assert!(Row::evaluate(IntWidth::W32, IntWidth::W16, 1).is_err());
    }

    #[test]
    fn renders_text_lines() {
        let rows = Row::evaluate_all(IntWidth::W8, IntWidth::W8, [127, 128]).unwrap();
        assert_eq!(
            render_text(&rows),
            "u8 127 => i8 127 (direct)\nu8 128 => i8 -128 (wrapped)\n"
        );
    }

    #[test]
    fn no_rows_render_as_nothing() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn renders_json_lines() {
        let rows = Row::evaluate_all(IntWidth::W16, IntWidth::W16, [0xffff]).unwrap();
        let mut out = Vec::new();
        render(&rows, OutputFormat::JsonLines, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"source\":\"u16\",\"target\":\"i16\",\"input\":65535,\"output\":-1,\"branch\":\"wrapped\"}\n"
        );
    }
}
