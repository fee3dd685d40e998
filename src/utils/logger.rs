//! Logger setup for application-wide logging
//!
//! Installs an `env_logger` backend for the `log` facade. The level comes
//! from the command line only; environment variables are not consulted.

use std::io::Write;
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::errors::{ConvertError, ConvertResult};

/// Global logger configuration
pub struct Logger;

impl Logger {
    /// Level used for a given verbosity setting
    pub fn level_for(verbose: bool) -> LevelFilter {
        if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Static method to initialize the global logger
    ///
    /// Diagnostics go to stderr as `[LEVEL] message` so they never mix with
    /// converted results on stdout.
    pub fn init_global_logger(verbose: bool) -> ConvertResult<()> {
        Builder::new()
            .filter_level(Self::level_for(verbose))
            .target(Target::Stderr)
            .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
            .try_init()
            .map_err(|e| ConvertError::GenericError(format!("Failed to set up logger: {}", e)))
    }
}
