//! Batch conversion command
//!
//! Reads coordinate pairs line by line from a stream, skipping comments and
//! rejecting malformed lines, and reports every converted row.

use std::io::{self, BufRead, Write};
use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::commands::options::CommandOptions;
use crate::coordinate::CoordinateKind;
use crate::errors::{ConvertError, ConvertResult};
use crate::input::parse_pair;
use crate::report::ReportWriter;
use crate::session::ConversionSession;
use crate::utils::progress::ProgressTracker;

/// Result of a batch run
#[derive(Debug)]
pub struct BatchOutcome {
    /// Converted coordinates, in input order
    pub session: ConversionSession,
    /// Input line number of every accepted coordinate
    pub rows: Vec<usize>,
    /// Input line numbers that were rejected
    pub rejected: Vec<usize>,
}

/// Command for converting coordinate pairs read from stdin
pub struct BatchCommand {
    options: CommandOptions,
}

impl BatchCommand {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches) -> ConvertResult<Self> {
        Ok(Self::with_options(CommandOptions::from_args(args)?))
    }

    /// Create the command from already assembled options
    pub fn with_options(options: CommandOptions) -> Self {
        BatchCommand { options }
    }

    /// Error for a data line that arrives before any coordinate system
    fn missing_system(line: &str) -> ConvertError {
        if parse_pair(line).is_ok() {
            ConvertError::MissingCoordinateSystem
        } else {
            ConvertError::UnknownCoordinateSystem(line.to_string())
        }
    }

    /// Report a rejected line on `err` and remember its number
    fn reject<E: Write>(err: &mut E, rejected: &mut Vec<usize>, line_number: usize, reason: &ConvertError) -> ConvertResult<()> {
        warn!("Skipping line {}: {}", line_number, reason);
        writeln!(err, "Line {} rejected: {}", line_number, reason)?;
        rejected.push(line_number);
        Ok(())
    }

    /// Convert every pair in `reader`
    ///
    /// Results go to `out`, rejected lines (including lines that are not
    /// UTF-8) are reported on `err` and skipped. Line numbers are 1-based and
    /// count blank and comment lines too.
    ///
    /// A line naming a coordinate system before any data selects it, or must
    /// agree with `--system` when that was given.
    pub fn run<R, W, E>(&self, reader: R, out: &mut W, err: &mut E) -> ConvertResult<BatchOutcome>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut lines = Vec::new();
        for chunk in reader.split(b'\n') {
            lines.push(String::from_utf8(chunk?).map_err(|_| ConvertError::InvalidEncoding));
        }
        debug!("Read {} line(s) of batch input", lines.len());

        let progress = if self.options.progress {
            ProgressTracker::new(lines.len() as u64, "Converting coordinates")
        } else {
            ProgressTracker::hidden()
        };

        let mut kind = self.options.system;
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            progress.increment(1);

            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    Self::reject(err, &mut rejected, line_number, &e)?;
                    continue;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if accepted.is_empty() {
                if let Ok(header) = trimmed.parse::<CoordinateKind>() {
                    match kind {
                        None => info!("Coordinate system from line {}: {}", line_number, header),
                        Some(selected) if selected == header => {
                            debug!("Line {} repeats the selected system {}", line_number, header)
                        },
                        Some(selected) => {
                            return Err(ConvertError::GenericError(format!(
                                "Line {} names the {} system but {} was selected",
                                line_number, header, selected)));
                        }
                    }
                    kind = Some(header);
                    continue;
                }
            }

            if kind.is_none() {
                return Err(Self::missing_system(trimmed));
            }

            match parse_pair(trimmed) {
                Ok((first, second)) => accepted.push((line_number, first, second)),
                Err(e) => Self::reject(err, &mut rejected, line_number, &e)?,
            }
        }
        progress.finish();

        let kind = kind.ok_or(ConvertError::MissingCoordinateSystem)?;
        let mut session = ConversionSession::new(kind);
        let mut rows = Vec::with_capacity(accepted.len());
        for (line_number, first, second) in accepted {
            session.add_pair(first, second);
            rows.push(line_number);
        }
        session.transform();

        let mut report = ReportWriter::new(out, self.options.report);
        report.write_header(kind)?;
        for (row, (input, output)) in rows.iter().zip(session.results()) {
            report.write_result(*row, input, output)?;
        }
        report.write_summary(rejected.len())?;

        info!("Converted {} {} coordinate(s), rejected {} line(s)",
              session.outputs().len(), kind, rejected.len());
        Ok(BatchOutcome { session, rows, rejected })
    }
}

impl Command for BatchCommand {
    fn execute(&self) -> ConvertResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        let mut out = stdout.lock();
        self.run(stdin.lock(), &mut out, &mut stderr.lock())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::report::OutputFormat;

    fn run(options: CommandOptions, input: &str) -> (ConvertResult<BatchOutcome>, String, String) {
        let command = BatchCommand::with_options(options);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = command.run(Cursor::new(input.as_bytes().to_vec()), &mut out, &mut err);
        (result, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_header_line_selects_system() {
        let (result, out, err) = run(CommandOptions::default(), "# survey\npolar\n5, 0\n\n10 0\n");
        let outcome = result.unwrap();

        assert_eq!(outcome.session.kind(), CoordinateKind::Polar);
        assert_eq!(outcome.rows, vec![3, 5]);
        assert!(outcome.rejected.is_empty());
        assert!(err.is_empty());
        assert_eq!(out, "<RectangularCoordinate, northing=5.0000, easting=0.0000>\n\
                         <RectangularCoordinate, northing=10.0000, easting=0.0000>\n\
                         Converted 2 coordinate(s)\n");
    }

    #[test]
    fn test_malformed_lines_are_rejected_and_skipped() {
        let options = CommandOptions { system: Some(CoordinateKind::Rectangular), ..CommandOptions::default() };
        let (result, out, err) = run(options, "3,4\nthree,four\n1;2;3\n0,4\n");
        let outcome = result.unwrap();

        assert_eq!(outcome.rows, vec![1, 4]);
        assert_eq!(outcome.rejected, vec![2, 3]);
        assert_eq!(outcome.session.outputs().len(), 2);
        assert!(err.contains("Line 2 rejected"));
        assert!(err.contains("Line 3 rejected"));
        assert!(out.contains("distance=4.0000, angle=1.5708"));
        assert!(out.ends_with("Converted 2 coordinate(s), rejected 2\n"));
    }

    #[test]
    fn test_csv_rows_use_input_line_numbers() {
        let mut options = CommandOptions { system: Some(CoordinateKind::Rectangular), ..CommandOptions::default() };
        options.report.format = OutputFormat::Csv;
        let (result, out, _) = run(options, "# header comment\n3,4\n");
        result.unwrap();

        assert_eq!(out, "row,northing,easting,distance,angle\n2,3.0000,4.0000,5.0000,0.9273\n");
    }

    #[test]
    fn test_data_without_system_is_an_error() {
        let (result, _, _) = run(CommandOptions::default(), "3, 4\n");
        assert!(matches!(result, Err(ConvertError::MissingCoordinateSystem)));
    }

    #[test]
    fn test_unknown_header_is_an_error() {
        let (result, _, _) = run(CommandOptions::default(), "spherical\n3, 4\n");
        assert!(matches!(result, Err(ConvertError::UnknownCoordinateSystem(_))));
    }

    #[test]
    fn test_empty_input_without_system_is_an_error() {
        let (result, _, _) = run(CommandOptions::default(), "");
        assert!(matches!(result, Err(ConvertError::MissingCoordinateSystem)));
    }

    fn run_bytes(options: CommandOptions, input: &[u8]) -> (ConvertResult<BatchOutcome>, String, String) {
        let command = BatchCommand::with_options(options);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = command.run(Cursor::new(input.to_vec()), &mut out, &mut err);
        (result, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_and_skipped() {
        let options = CommandOptions { system: Some(CoordinateKind::Rectangular), ..CommandOptions::default() };
        let (result, out, err) = run_bytes(options, b"3, 4\n\xff\xfe\n0, 4\n");
        let outcome = result.unwrap();

        assert_eq!(outcome.rows, vec![1, 3]);
        assert_eq!(outcome.rejected, vec![2]);
        assert!(err.contains("Line 2 rejected: Input is not valid UTF-8 text"));
        assert!(out.ends_with("Converted 2 coordinate(s), rejected 1\n"));
    }

    #[test]
    fn test_header_matching_system_option_is_accepted() {
        let options = CommandOptions { system: Some(CoordinateKind::Polar), ..CommandOptions::default() };
        let (result, _, err) = run(options, "Polar\n5, 0\n");
        let outcome = result.unwrap();

        assert_eq!(outcome.rows, vec![2]);
        assert!(outcome.rejected.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_header_conflicting_with_system_option_is_an_error() {
        let options = CommandOptions { system: Some(CoordinateKind::Polar), ..CommandOptions::default() };
        let (result, _, _) = run(options, "rectangular\n3, 4\n");
        match result {
            Err(ConvertError::GenericError(msg)) => assert!(msg.contains("Line 1")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_system_name_after_data_is_a_rejected_line() {
        let (result, _, err) = run(CommandOptions::default(), "polar\n5, 0\nrectangular\n");
        let outcome = result.unwrap();

        assert_eq!(outcome.session.kind(), CoordinateKind::Polar);
        assert_eq!(outcome.rejected, vec![3]);
        assert!(err.contains("Line 3 rejected"));
    }
}
