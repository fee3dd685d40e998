//! Line-oriented input handling
//!
//! Parsing of numeric text and the interactive prompt used to collect
//! coordinates from a user.

pub mod parser;
pub mod prompt;

pub use parser::{parse_count, parse_number, parse_pair};
pub use prompt::{collect_coordinates, Prompter};
