//! Puzzle-file reading.
//!
//! A puzzle file is a sequence of whitespace-delimited single-character
//! tokens in row-major order: digits '1'-'9' for givens and '.' for blanks.
//! Exactly 81 tokens are expected; anything after the 81st is ignored with a
//! logged warning, and any other token is a fatal parse error.

use std::{fs, io, path::Path};

use snapdoku_core::{Cell, Digit, Grid};

/// An error produced while reading a puzzle file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum ReadPuzzleError {
    /// The file could not be read.
    #[display("cannot read {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A token was neither a digit nor a blank marker.
    #[display("invalid token {token:?}: expected '.' or a digit 1-9")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// The file ended before 81 cell values were read.
    #[display("expected 81 cells, found {count}")]
    TooFewCells {
        /// Number of cell values found.
        count: usize,
    },
}

/// Reads and parses the puzzle file at `path`.
pub(crate) fn read_puzzle(path: &Path) -> Result<Grid, ReadPuzzleError> {
    let text = fs::read_to_string(path).map_err(|source| ReadPuzzleError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_puzzle(&text)
}

fn parse_puzzle(text: &str) -> Result<Grid, ReadPuzzleError> {
    let mut cells = [None; Cell::COUNT];
    let mut count = 0;
    let mut extra = 0_usize;
    for token in text.split_whitespace() {
        if count == Cell::COUNT {
            extra += 1;
            continue;
        }
        cells[count] = parse_token(token)?;
        count += 1;
    }
    if extra > 0 {
        log::warn!("ignoring {extra} extra token(s) after the 81st cell");
    }
    if count < Cell::COUNT {
        return Err(ReadPuzzleError::TooFewCells { count });
    }
    Ok(Grid::from_cells(cells))
}

fn parse_token(token: &str) -> Result<Option<Digit>, ReadPuzzleError> {
    match token.as_bytes() {
        &[b'.'] => Ok(None),
        &[byte @ b'1'..=b'9'] => Ok(Some(Digit::from_value(byte - b'0'))),
        _ => Err(ReadPuzzleError::InvalidToken {
            token: token.to_owned(),
        }),
    }
}
