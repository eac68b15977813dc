//! Core compute primitive (Matrix).
//!
//! The dense row-major matrix type underneath every engine operation.

mod matrix;

pub use matrix::Matrix;
