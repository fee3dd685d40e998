//! Options shared by all commands, read from the command line

use clap::ArgMatches;
use log::debug;

use crate::coordinate::{CoordinateKind, DEFAULT_PRECISION};
use crate::errors::{ConvertError, ConvertResult};
use crate::report::{OutputFormat, ReportOptions};

/// Largest accepted `--precision`
const MAX_PRECISION: usize = 15;

/// Run configuration assembled from CLI arguments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandOptions {
    /// Preselected input coordinate system
    pub system: Option<CoordinateKind>,
    /// Preselected number of coordinates (interactive mode)
    pub count: Option<usize>,
    /// How results are written
    pub report: ReportOptions,
    /// Whether to draw a progress bar (batch mode)
    pub progress: bool,
}

impl Default for CommandOptions {
    fn default() -> Self {
        CommandOptions {
            system: None,
            count: None,
            report: ReportOptions::default(),
            progress: false,
        }
    }
}

impl CommandOptions {
    /// Read options from parsed CLI arguments
    ///
    /// Invalid values are configuration errors and are returned, not
    /// re-prompted.
    pub fn from_args(args: &ArgMatches) -> ConvertResult<Self> {
        let system = match args.get_one::<String>("system") {
            Some(name) => Some(name.parse::<CoordinateKind>()?),
            None => None,
        };

        let count = match args.get_one::<String>("count") {
            Some(text) => Some(crate::input::parse_count(text)?),
            None => None,
        };

        let format = match args.get_one::<String>("format") {
            Some(name) => name.parse::<OutputFormat>()?,
            None => OutputFormat::Text,
        };

        let precision = match args.get_one::<String>("precision") {
            Some(text) => text.trim().parse::<usize>()
                .ok()
                .filter(|p| *p <= MAX_PRECISION)
                .ok_or_else(|| ConvertError::GenericError(format!(
                    "Invalid precision: {} (expected 0 to {})", text, MAX_PRECISION)))?,
            None => DEFAULT_PRECISION,
        };

        let options = CommandOptions {
            system,
            count,
            report: ReportOptions {
                format,
                precision,
                details: args.get_flag("details"),
            },
            progress: args.get_flag("progress"),
        };
        debug!("Command options: {:?}", options);
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;

    fn options_for(args: &[&str]) -> ConvertResult<CommandOptions> {
        let mut argv = vec!["polarkit"];
        argv.extend_from_slice(args);
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        CommandOptions::from_args(&matches)
    }

    #[test]
    fn test_default_options() {
        assert_eq!(options_for(&[]).unwrap(), CommandOptions::default());
    }

    #[test]
    fn test_all_options() {
        let options = options_for(&[
            "--system", "Rect", "--count", "3", "--format", "csv",
            "--precision", "2", "--details", "--progress",
        ]).unwrap();
        assert_eq!(options.system, Some(CoordinateKind::Rectangular));
        assert_eq!(options.count, Some(3));
        assert_eq!(options.report.format, OutputFormat::Csv);
        assert_eq!(options.report.precision, 2);
        assert!(options.report.details);
        assert!(options.progress);
    }

    #[test]
    fn test_invalid_options_are_errors() {
        assert!(matches!(options_for(&["--system", "cartesian"]),
                         Err(ConvertError::UnknownCoordinateSystem(_))));
        assert!(matches!(options_for(&["--count", "many"]), Err(ConvertError::InvalidCount(_))));
        assert!(options_for(&["--format", "xml"]).is_err());
        assert!(options_for(&["--precision", "99"]).is_err());
    }
}
