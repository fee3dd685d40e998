//! Result reporting in text or CSV form

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::coordinate::{Coordinate, CoordinateKind, Quadrant, DEFAULT_PRECISION};
use crate::errors::{ConvertError, ConvertResult};

/// Output format for converted coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per coordinate
    Text,
    /// Comma-separated values with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ConvertError::GenericError(format!("Unsupported output format: {}", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

/// How results should be written
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Output format
    pub format: OutputFormat,
    /// Decimal places for every value
    pub precision: usize,
    /// Whether to include the compass quadrant of each result
    pub details: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
            details: false,
        }
    }
}

/// Quadrant of a converted pair, taken from whichever side is rectangular
///
/// Classifying the entered northing/easting directly keeps points on an axis
/// from drifting into a neighbouring quadrant through a polar round trip.
fn pair_quadrant(input: &Coordinate, output: &Coordinate) -> Quadrant {
    match (input, output) {
        (Coordinate::Rectangular(rect), _) | (_, Coordinate::Rectangular(rect)) => rect.quadrant(),
        _ => input.to_rectangular().quadrant(),
    }
}

/// Writes conversion results to any `Write` sink
pub struct ReportWriter<'w, W: Write> {
    writer: &'w mut W,
    options: ReportOptions,
    written: usize,
}

impl<'w, W: Write> ReportWriter<'w, W> {
    /// Create a new report writer
    pub fn new(writer: &'w mut W, options: ReportOptions) -> Self {
        ReportWriter { writer, options, written: 0 }
    }

    /// Write the CSV header for results converted from `kind`
    ///
    /// Does nothing for text output.
    pub fn write_header(&mut self, kind: CoordinateKind) -> ConvertResult<()> {
        if self.options.format != OutputFormat::Csv {
            return Ok(());
        }

        let (in_a, in_b) = kind.field_names();
        let (out_a, out_b) = kind.opposite().field_names();
        write!(self.writer, "row,{},{},{},{}", in_a, in_b, out_a, out_b)?;
        if self.options.details {
            write!(self.writer, ",quadrant")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    /// Write one converted coordinate
    ///
    /// # Arguments
    /// * `row` - Row number shown in CSV output
    /// * `input` - The coordinate as entered
    /// * `output` - Its conversion
    pub fn write_result(&mut self, row: usize, input: &Coordinate, output: &Coordinate) -> ConvertResult<()> {
        let precision = self.options.precision;
        let quadrant = pair_quadrant(input, output);
        match self.options.format {
            OutputFormat::Text => {
                writeln!(self.writer, "{:.*}", precision, output)?;
                if self.options.details {
                    writeln!(self.writer, "  quadrant: {}", quadrant.description())?;
                }
            },
            OutputFormat::Csv => {
                let (in_a, in_b) = input.values();
                let (out_a, out_b) = output.values();
                write!(self.writer, "{},{:.*},{:.*},{:.*},{:.*}",
                       row, precision, in_a, precision, in_b, precision, out_a, precision, out_b)?;
                if self.options.details {
                    write!(self.writer, ",{}", quadrant)?;
                }
                writeln!(self.writer)?;
            },
        }
        self.written += 1;
        Ok(())
    }

    /// Write the closing summary line (text output only)
    pub fn write_summary(&mut self, rejected: usize) -> ConvertResult<()> {
        if self.options.format != OutputFormat::Text {
            return Ok(());
        }
        if rejected > 0 {
            writeln!(self.writer, "Converted {} coordinate(s), rejected {}", self.written, rejected)?;
        } else {
            writeln!(self.writer, "Converted {} coordinate(s)", self.written)?;
        }
        Ok(())
    }

    /// Number of results written so far
    pub fn written(&self) -> usize {
        self.written
    }
}
