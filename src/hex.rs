//! Hexadecimal text form of the gamma table.

use crate::table::{GammaTable, TABLE_LEN};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};
use thiserror::Error;

/// Number of values written on each line.
pub const VALUES_PER_LINE: usize = 16;

const TOKEN_SEPARATOR: &str = ", ";
const TOKEN_PREFIX: &str = "0x";

/// Error of the hex table parsing.
#[allow(missing_docs)]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Indicate a token which is not `0x` followed by two uppercase hex digits.
    #[error("line {line}, token {token}: '{text}' is not a `0xHH` value")]
    InvalidToken {
        line: usize,
        token: usize,
        text: String,
    },

    /// Indicate a line which doesn't hold the expected number of values.
    #[error("line {line}: expected {} values, found {found}", VALUES_PER_LINE)]
    LineLength { line: usize, found: usize },

    /// Indicate a table which doesn't hold one value per level.
    #[error("expected {} values, found {found}", TABLE_LEN)]
    TableLength { found: usize },
}

/// Render values as `0xHH` tokens separated by `", "`.
#[must_use]
pub fn format_line(values: &[u8]) -> String {
    values
        .iter()
        .map(|value| format!("{TOKEN_PREFIX}{value:02X}"))
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR)
}

/// Write `table` as lines of [`VALUES_PER_LINE`] values, each ended by a newline.
///
/// # Errors
///
/// Will forward any error returned by `writer`.
#[profiling::function]
pub fn write_table<W: Write>(writer: &mut W, table: &GammaTable) -> io::Result<()> {
    table
        .as_slice()
        .chunks(VALUES_PER_LINE)
        .try_for_each(|chunk| writeln!(writer, "{}", format_line(chunk)))
}

/// Create or truncate the file at `path` and write `table` in it.
///
/// # Errors
///
/// Will return the error of the file creation, or of any write or the final flush.
pub fn write_table_file(path: &Path, table: &GammaTable) -> io::Result<()> {
    let file = File::create(path)?;
    let mut stream = BufWriter::new(file);
    write_table(&mut stream, table)?;
    // `BufWriter` drop swallows errors, flush to get them.
    stream.flush()
}

/// Parse a table in the format written by [`write_table`].
///
/// Blank lines are ignored.
///
/// # Errors
///
/// Will return [`ParseError::InvalidToken`] if a value isn't `0x` followed by two uppercase hex digits.
/// Will return [`ParseError::LineLength`] if a line doesn't hold [`VALUES_PER_LINE`] values.
/// Will return [`ParseError::TableLength`] if the text doesn't hold [`TABLE_LEN`] values.
#[profiling::function]
pub fn parse_table(text: &str) -> Result<GammaTable, ParseError> {
    let mut values = [0; TABLE_LEN];
    let mut count = 0;

    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_num = line_idx + 1;
        let tokens = line.split(TOKEN_SEPARATOR).collect::<Vec<_>>();
        if tokens.len() != VALUES_PER_LINE {
            return Err(ParseError::LineLength {
                line: line_num,
                found: tokens.len(),
            });
        }
        for (token_idx, token) in tokens.into_iter().enumerate() {
            let value = parse_token(token).ok_or_else(|| ParseError::InvalidToken {
                line: line_num,
                token: token_idx + 1,
                text: token.into(),
            })?;
            if let Some(slot) = values.get_mut(count) {
                *slot = value;
            }
            count += 1;
        }
    }

    if count == TABLE_LEN {
        Ok(GammaTable::from(values))
    } else {
        Err(ParseError::TableLength { found: count })
    }
}

fn parse_token(token: &str) -> Option<u8> {
    let digits = token.strip_prefix(TOKEN_PREFIX)?;
    let is_upper_hex = |c: char| c.is_ascii_digit() || ('A'..='F').contains(&c);
    if digits.len() != 2 || !digits.chars().all(is_upper_hex) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}
