use std::io::{BufRead, Write};

use crate::core::error::InputError;

pub const INVALID_ENTRY_MESSAGE: &str = "Invalid entry, please enter a non-negative value.";

pub fn parse_non_negative(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotFinite(value));
    }
    if value < 0.0 {
        return Err(InputError::Negative(value));
    }
    Ok(value)
}

pub fn is_valid_non_negative(input: &str) -> bool {
    parse_non_negative(input).is_ok()
}

pub fn read_non_negative<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<f64, InputError> {
    writeln!(writer, "{prompt}")?;
    loop {
        writeln!(writer)?;
        writer.flush()?;

        let mut line = String::new();
        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(InputError::UnexpectedEof);
        }

        match parse_non_negative(&line) {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() => {
                tracing::debug!(entry = line.trim(), %err, "rejected console entry");
                writeln!(writer, "{INVALID_ENTRY_MESSAGE}")?;
            }
            Err(err) => return Err(err),
        }
    }
}
