//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod options;
pub mod interactive_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use options::CommandOptions;
pub use interactive_command::InteractiveCommand;
pub use batch_command::{BatchCommand, BatchOutcome};

use clap::ArgMatches;
use crate::errors::ConvertResult;

/// Factory for creating command instances based on CLI arguments
pub struct PolarkitCommandFactory;

impl PolarkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PolarkitCommandFactory
    }
}

impl Default for PolarkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for PolarkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> ConvertResult<Box<dyn Command>> {
        if args.get_flag("batch") {
            Ok(Box::new(BatchCommand::new(args)?))
        } else {
            // Default to the interactive prompt
            Ok(Box::new(InteractiveCommand::new(args)?))
        }
    }
}
