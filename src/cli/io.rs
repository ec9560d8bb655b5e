use std::io::BufRead;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::errors::CliError;

/// Reads newline-terminated values from a buffered source.
pub struct LineReader<R> {
    inner: R,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: String::new(),
        }
    }

    /// Next line without its terminator; end of input is an error because
    /// every caller is waiting for a value.
    pub fn next_line(&mut self) -> Result<String, CliError> {
        self.buffer.clear();
        let read = self.inner.read_line(&mut self.buffer)?;
        if read == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(self.buffer.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

/// Parses an integer, tolerating surrounding whitespace.
pub fn parse_int<T>(raw: &str) -> Result<T, CliError>
where
    T: FromStr<Err = ParseIntError>,
{
    raw.trim().parse::<T>().map_err(|source| CliError::Parse {
        input: raw.trim().to_string(),
        source,
    })
}

/// Splits `day month year` into integers. Tokens past the third are ignored.
pub fn parse_date_fields(line: &str) -> Result<(i32, i32, i32), CliError> {
    let mut tokens = line.split_whitespace();
    let mut next = |field: &'static str| -> Result<i32, CliError> {
        let token = tokens.next().ok_or_else(|| CliError::MissingField {
            field,
            line: line.to_string(),
        })?;
        parse_int(token)
    };
    let day = next("day")?;
    let month = next("month")?;
    let year = next("year")?;
    Ok((day, month, year))
}
