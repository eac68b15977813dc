//! Line-oriented text persistence for matrices.
//!
//! Layout: the first line holds `rows cols`, then one line per row of
//! space-separated element values. Reading is whitespace-driven, so a
//! value stream that wraps across lines still parses; anything short of
//! `rows * cols` values is rejected rather than left uninitialized.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

/// Writes a matrix to a stream in the line-oriented text format.
///
/// # Errors
///
/// Returns an error if writing to the stream fails.
pub fn write_matrix<W: Write>(matrix: &Matrix<f64>, writer: &mut W) -> Result<()> {
    writeln!(writer, "{} {}", matrix.n_rows(), matrix.n_cols())?;
    for i in 0..matrix.n_rows() {
        let line: Vec<String> = matrix.row(i).iter().map(ToString::to_string).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Reads a matrix from a stream in the line-oriented text format.
///
/// Exactly `rows * cols` values are consumed; trailing values are
/// ignored.
///
/// # Errors
///
/// Returns an error if the stream cannot be read, the header is missing
/// or names a zero dimension, a token is not a number, or the stream
/// ends before `rows * cols` values.
pub fn read_matrix<R: Read>(reader: &mut R) -> Result<Matrix<f64>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let rows = parse_dimension(tokens.next(), "rows")?;
    let cols = parse_dimension(tokens.next(), "cols")?;
    if rows == 0 || cols == 0 {
        return Err(MatrizError::FormatError {
            message: format!("header names a {rows}x{cols} matrix"),
        });
    }

    let mut data = Vec::with_capacity(rows * cols);
    for k in 0..rows * cols {
        let token = tokens.next().ok_or_else(|| MatrizError::FormatError {
            message: format!("expected {} values, found {k}", rows * cols),
        })?;
        let value: f64 = token.parse().map_err(|_| MatrizError::FormatError {
            message: format!("invalid value {token:?} at position {k}"),
        })?;
        data.push(value);
    }

    Matrix::from_vec(rows, cols, data)
}

fn parse_dimension(token: Option<&str>, name: &str) -> Result<usize> {
    let token = token.ok_or_else(|| MatrizError::FormatError {
        message: format!("missing {name} in header"),
    })?;
    token.parse().map_err(|_| MatrizError::FormatError {
        message: format!("invalid {name} {token:?} in header"),
    })
}

impl Matrix<f64> {
    /// Saves the matrix to a file in the text format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_matrix(self, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Loads a matrix from a file in the text format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        read_matrix(&mut reader)
    }
}

#[cfg(test)]
#[path = "serialization_tests.rs"]
mod tests;
