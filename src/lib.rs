//! Matriz: dense double-precision matrix engine in pure Rust.
//!
//! Matriz provides an owned, row-major `f64` matrix with element-wise
//! and product arithmetic, a cofactor-expansion determinant, an
//! element-wise function-application primitive, and a line-oriented text
//! persistence format, plus a loader for labeled 28x28 pixel records.
//!
//! Every fallible operation returns a [`error::Result`]; shape and
//! precondition violations are reported to the caller, never panicked
//! on. With the default `parallel` feature, independent per-row and
//! per-element loops run on the rayon thread pool; results are identical
//! to the serial build.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 3.0, 2.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![7.0, 8.0, 9.0, 0.0]).unwrap();
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.get(0, 0), 34.0);
//!
//! let det = a.det().unwrap();
//! assert!((det + 2.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core Matrix type and its operations
//! - [`serialization`]: text-format save/load over streams and files
//! - [`data`]: labeled pixel-record loading (28x28 samples)
//! - [`error`]: error type and result alias

pub mod data;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod serialization;
