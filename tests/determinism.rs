//! Determinant determinism under repeated evaluation.
//!
//! The cofactor terms may be computed on the rayon pool, but they are
//! always summed in column order, so every evaluation must produce the
//! same bits as every other and match the known serial value.

use matriz::prelude::*;

#[test]
fn determinant_is_bitwise_repeatable() {
    let m = Matrix::from_vec(
        4,
        4,
        vec![
            7.0, 8.0, 9.0, 0.0, //
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 3.0, 4.0, 2.0,
        ],
    )
    .expect("test data has correct dimensions: 4*4=16 elements");

    let first = m.det().expect("4x4 is square");
    for _ in 0..100 {
        let det = m.det().expect("4x4 is square");
        assert_eq!(det.to_bits(), first.to_bits());
    }

    // Integer-valued entries make the expansion exact, so the parallel
    // reduction must land on the serial answer exactly.
    assert_eq!(first, -280.0);
}

#[test]
fn determinant_is_repeatable_on_larger_input() {
    let n = 7;
    let data: Vec<f64> = (0..n * n)
        .map(|k| ((k * 31 + 7) % 23) as f64 - 11.0)
        .collect();
    let m = Matrix::from_vec(n, n, data).expect("test data has correct dimensions");

    let first = m.det().expect("7x7 is square");
    for _ in 0..10 {
        let det = m.det().expect("7x7 is square");
        assert_eq!(det.to_bits(), first.to_bits());
    }
}
