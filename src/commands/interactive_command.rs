//! Interactive conversion command
//!
//! Prompts for a coordinate system and a batch of values, converts them and
//! reports the results.

use std::io::{self, BufRead, Write};
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::options::CommandOptions;
use crate::errors::ConvertResult;
use crate::input::{collect_coordinates, Prompter};
use crate::report::ReportWriter;
use crate::session::ConversionSession;

/// Command for converting coordinates entered at a prompt
pub struct InteractiveCommand {
    options: CommandOptions,
}

impl InteractiveCommand {
    /// Create a new interactive command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new InteractiveCommand instance or an error
    pub fn new(args: &ArgMatches) -> ConvertResult<Self> {
        Ok(Self::with_options(CommandOptions::from_args(args)?))
    }

    /// Create the command from already assembled options
    pub fn with_options(options: CommandOptions) -> Self {
        InteractiveCommand { options }
    }

    /// Run the prompt/convert/report cycle against the given streams
    ///
    /// # Returns
    /// The session with its retained outputs
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> ConvertResult<ConversionSession> {
        let mut prompter = Prompter::new(reader, &mut *writer);
        let mut session = collect_coordinates(&mut prompter, self.options.system, self.options.count)?;
        session.transform();

        let mut report = ReportWriter::new(prompter.writer(), self.options.report);
        report.write_header(session.kind())?;
        for (index, (input, output)) in session.results().enumerate() {
            report.write_result(index + 1, input, output)?;
        }
        report.write_summary(0)?;

        info!("Converted {} {} coordinate(s) to {}",
              session.outputs().len(), session.kind(), session.kind().opposite());
        Ok(session)
    }
}

impl Command for InteractiveCommand {
    fn execute(&self) -> ConvertResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run(stdin.lock(), &mut out)?;
        out.flush()?;
        Ok(())
    }
}
