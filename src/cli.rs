//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the argument parser for the `polarkit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("polarkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert coordinates between polar (distance, angle) and rectangular (northing, easting) form")
        .arg(
            Arg::new("system")
                .short('s')
                .long("system")
                .help("Coordinate system of the input (polar or rectangular)")
                .value_name("SYSTEM")
                .required(false),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .help("Number of coordinates to enter interactively")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Read one 'a, b' pair per line from stdin instead of prompting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (text or csv)")
                .value_name("FORMAT")
                .default_value("text")
                .required(false),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Decimal places in the output")
                .value_name("DIGITS")
                .default_value("4")
                .required(false),
        )
        .arg(
            Arg::new("details")
                .short('d')
                .long("details")
                .help("Show the compass quadrant of each result")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show a progress bar on stderr in batch mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
