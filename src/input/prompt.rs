//! Interactive prompt for collecting coordinates
//!
//! The prompter is generic over its reader and writer so the same flow runs
//! against a terminal or against in-memory buffers.

use std::io::{BufRead, Write};
use log::{debug, info};

use crate::coordinate::CoordinateKind;
use crate::errors::{ConvertError, ConvertResult};
use crate::session::ConversionSession;
use super::parser::{parse_count, parse_number};

/// Line-oriented prompt over a reader/writer pair
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    /// Mutable access to the output side, for reporting between prompts
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the prompter and return the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Show a message and read one line of input
    ///
    /// # Returns
    /// The line without surrounding whitespace, `InvalidEncoding` for a line
    /// that is not UTF-8, or `UnexpectedEndOfInput` once the reader is
    /// exhausted
    pub fn prompt_line(&mut self, message: &str) -> ConvertResult<String> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Err(ConvertError::UnexpectedEndOfInput);
        }
        let line = String::from_utf8(bytes).map_err(|_| ConvertError::InvalidEncoding)?;
        Ok(line.trim().to_string())
    }

    /// Prompt until `parser` accepts the answer
    ///
    /// Every rejected answer, including one that is not UTF-8, is reported
    /// to the user and the prompt is shown again. Only I/O failures and end
    /// of input end the loop early.
    pub fn prompt_parsed<T, F>(&mut self, message: &str, parser: F) -> ConvertResult<T>
    where
        F: Fn(&str) -> ConvertResult<T>,
    {
        loop {
            let answer = match self.prompt_line(message) {
                Ok(answer) => answer,
                Err(ConvertError::InvalidEncoding) => {
                    debug!("Rejected answer that is not UTF-8");
                    writeln!(self.writer, "Rejected: {}", ConvertError::InvalidEncoding)?;
                    continue;
                },
                Err(e) => return Err(e),
            };
            match parser(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected answer '{}': {}", answer, e);
                    writeln!(self.writer, "Rejected: {}", e)?;
                }
            }
        }
    }
}

/// Capitalise a field name for use in a prompt
fn prompt_label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collect a batch of coordinates interactively
///
/// Asks for the coordinate system and the number of coordinates unless they
/// are preset, then for both fields of every coordinate.
///
/// # Arguments
/// * `prompter` - Prompt to read answers from
/// * `preset_kind` - Coordinate system chosen up front, if any
/// * `preset_count` - Number of coordinates chosen up front, if any
///
/// # Returns
/// A session holding the collected (not yet converted) coordinates
pub fn collect_coordinates<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset_kind: Option<CoordinateKind>,
    preset_count: Option<usize>,
) -> ConvertResult<ConversionSession> {
    let kind = match preset_kind {
        Some(kind) => kind,
        None => prompter.prompt_parsed(
            "Coordinate system (Rectangular | Polar): ",
            |answer| answer.parse::<CoordinateKind>(),
        )?,
    };

    let count = match preset_count {
        Some(count) => count,
        None => prompter.prompt_parsed("Number of coordinates: ", parse_count)?,
    };

    info!("Collecting {} {} coordinate(s)", count, kind);

    let (first_field, second_field) = kind.field_names();
    let first_label = prompt_label(first_field);
    let second_label = prompt_label(second_field);

    let mut session = ConversionSession::new(kind);
    for index in 1..=count {
        let first = prompter.prompt_parsed(
            &format!("{} ({}): ", first_label, index),
            |answer| parse_number(first_field, answer),
        )?;
        let second = prompter.prompt_parsed(
            &format!("{} ({}): ", second_label, index),
            |answer| parse_number(second_field, answer),
        )?;
        session.add_pair(first, second);
    }

    Ok(session)
}
