//! Labeled pixel-record loading.
//!
//! Parses row-oriented record files where each line is
//! `label, v_0, v_1, …, v_783`, one 28x28 sample per line, with a single
//! header line before the first record. Pixel values are normalized to
//! `[0, 1]` by dividing by 255.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

/// Side length of one sample matrix.
pub const IMAGE_SIDE: usize = 28;

/// Pixel count of one sample.
pub const IMAGE_PIXELS: usize = IMAGE_SIDE * IMAGE_SIDE;

/// Largest raw pixel value; the normalization divisor.
pub const PIXEL_MAX: f64 = 255.0;

/// One labeled sample: the class label and its normalized pixel matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledImage {
    /// Class label from the first field of the record.
    pub label: u8,
    /// 28x28 matrix of pixel values in `[0, 1]`.
    pub pixels: Matrix<f64>,
}

/// Reads up to `count` labeled samples from a record stream.
///
/// The first line is a header and is skipped. Blank lines between
/// records are ignored. Pixel `k` of a record lands at position
/// `(k / 28, k % 28)` of the sample matrix.
///
/// # Errors
///
/// Returns an error if the stream cannot be read or a record has a
/// malformed label or a pixel count other than 784.
pub fn read_images<R: BufRead>(reader: R, count: usize) -> Result<Vec<LabeledImage>> {
    let mut lines = reader.lines();
    if lines.next().transpose()?.is_none() {
        return Ok(Vec::new());
    }

    let mut images = Vec::with_capacity(count);
    for line in lines {
        if images.len() == count {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        images.push(parse_record(&line)?);
    }
    Ok(images)
}

/// Reads up to `count` labeled samples from a record file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a record is
/// malformed.
pub fn load_images<P: AsRef<Path>>(path: P, count: usize) -> Result<Vec<LabeledImage>> {
    let reader = BufReader::new(File::open(path)?);
    read_images(reader, count)
}

fn parse_record(line: &str) -> Result<LabeledImage> {
    let mut fields = line.split(',');

    let label_field = fields.next().unwrap_or("").trim();
    let label: u8 = label_field.parse().map_err(|_| MatrizError::FormatError {
        message: format!("invalid label {label_field:?}"),
    })?;

    let mut pixels = Matrix::zeros(IMAGE_SIDE, IMAGE_SIDE)?;
    let mut k = 0;
    for field in fields {
        if k == IMAGE_PIXELS {
            return Err(MatrizError::FormatError {
                message: format!("record has more than {IMAGE_PIXELS} pixels"),
            });
        }
        let field = field.trim();
        let value: f64 = field.parse().map_err(|_| MatrizError::FormatError {
            message: format!("invalid pixel {field:?} at index {k}"),
        })?;
        pixels.set(k / IMAGE_SIDE, k % IMAGE_SIDE, value / PIXEL_MAX);
        k += 1;
    }

    if k != IMAGE_PIXELS {
        return Err(MatrizError::FormatError {
            message: format!("record has {k} pixels, expected {IMAGE_PIXELS}"),
        });
    }

    Ok(LabeledImage { label, pixels })
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
