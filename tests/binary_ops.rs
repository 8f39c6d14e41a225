mod common;

use approx::assert_relative_eq;
use common::init_logger;
use lazy_linalg::{emul, matrix, Error, Mat2, Mat4, Matrix, MatrixExpr};

#[test]
fn sum_chain() {
    init_logger();

    let a = matrix![1i32, 2; 3, 4];
    let b = matrix![6i32, 7; 8, 9];
    let sum: Mat2<i32> = (&a + &b + &b).into();
    assert_eq!(sum, matrix![13, 16; 19, 22]);

    let a = matrix![1.0f32, 2.0; 3.0, 4.0];
    let b = matrix![6.6f32, 7.7; 8.8, 9.9];
    let sum = (&a + &b + &b).eval();
    assert_relative_eq!(sum, matrix![14.2, 17.4; 20.6, 23.8], max_relative = 1e-5);
}

#[test]
fn difference_chain() {
    init_logger();

    let a = matrix![1i32, 2; 3, 4];
    let b = matrix![6i32, 7; 8, 9];
    assert_eq!((&a - &b - &b).eval(), matrix![-11, -12; -13, -14]);

    let a = matrix![1.0f32, 2.0; 3.0, 4.0];
    let b = matrix![6.6f32, 7.7; 8.8, 9.9];
    let diff = (&a - &b - &b).eval();
    assert_relative_eq!(diff, matrix![-12.2, -13.4; -14.6, -15.8], max_relative = 1e-5);
}

#[test]
fn scalar_multiplication() {
    init_logger();

    let ints = matrix![1i32, 2; 3, 4];
    assert_eq!((&ints * 3i32).eval(), matrix![3, 6; 9, 12]);
    assert_eq!((3i32 * &ints).eval(), matrix![3, 6; 9, 12]);

    // Mixing in a float scalar produces float elements.
    let scaled: Mat2<f32> = (&ints * 2.0f32).eval();
    assert_eq!(scaled, matrix![2.0, 4.0; 6.0, 8.0]);

    let floats = matrix![1.1f32, 2.2; 3.3, 4.4];
    let by_int: Mat2<f32> = (&floats * 2i32).eval();
    let by_float: Mat2<f32> = (&floats * 2.0f32).eval();
    assert_eq!(by_int, matrix![2.2, 4.4; 6.6, 8.8]);
    assert_eq!(by_int, by_float);
}

#[test]
fn scalar_division() -> anyhow::Result<()> {
    init_logger();

    let ints = matrix![1i32, 2; 3, 4];
    let quarter: Mat2<f64> = ints.expr().checked_div(4i32)?.eval();
    assert_eq!(quarter, matrix![0.25, 0.5; 0.75, 1.0]);
    assert_eq!((&ints / 4u8).eval(), quarter);

    let err = ints.expr().checked_div(0i32).unwrap_err();
    assert_eq!(err, Error::DivideByZero);
    assert_eq!(err.to_string(), "attempt to divide a matrix by zero");
    Ok(())
}

#[test]
#[should_panic(expected = "attempt to divide a matrix by zero")]
fn scalar_division_by_zero_panics() {
    let m = matrix![1.0f32, 2.0; 3.0, 4.0];
    let _ = (&m + &m) / 0.0f32;
}

#[test]
fn scalar_division_with_wider_divisor() {
    init_logger();

    let bytes = matrix![1u8, 2];
    let by_256: Matrix<f64, 1, 2> = (&bytes / 256i32).eval();
    assert_relative_eq!(by_256, matrix![0.00390625, 0.0078125]);

    let negated: Matrix<f64, 1, 2> = (&bytes / -2i32).eval();
    assert_eq!(negated, matrix![-0.5, -1.0]);

    let small: Matrix<f64, 1, 1> = (&matrix![10i32] / 5_000_000_000i64).eval();
    assert_relative_eq!(small[0], 2e-9, max_relative = 1e-12);

    let halves: Matrix<f32, 1, 2> = (bytes.expr() / 2.0f32).eval();
    assert_eq!(halves, matrix![0.5, 1.0]);
}

#[test]
fn scalar_multiplication_with_wider_scalar() {
    let m = matrix![1i8, -1];
    assert_eq!((&m * 100i64).eval(), matrix![100i8, -100]);
    assert_eq!((3u32 * &matrix![2u64]).eval(), matrix![6u64]);
}

#[test]
#[should_panic(expected = "scalar 1000 does not fit in the `i8` element type")]
fn scalar_multiplication_overflow_panics() {
    let m = matrix![1i8, -1];
    let _ = (&m * 1000i32).eval();
}

#[test]
fn product_plus_sum() {
    init_logger();

    let a = matrix![1i32, 2; 3, 4];
    let b = matrix![6i32, 7; 8, 9];
    assert_eq!((&a * &b + &b).eval(), matrix![28, 32; 58, 66]);
    assert_eq!((&b + &a * &b).eval(), matrix![28, 32; 58, 66]);
}

#[test]
fn triple_product() {
    init_logger();

    let a = matrix![1.0f32, 2.0; 3.0, 4.0];
    let b = matrix![6.6f32, 7.7; 8.8, 9.9];
    let c = matrix![5.5f32, 4.4; 3.3, 2.2];
    let product = (&a * &b * &c).eval();
    assert_relative_eq!(
        product,
        matrix![223.85, 166.98; 509.41, 379.94],
        max_relative = 1e-5
    );
}

#[rustfmt::skip]
#[test]
fn mixed_chain() {
    init_logger();

    let mat1 = matrix![
        1.2, 5.4, 3.3, 6.4;
        1.3, 2.5, 7.6, 9.9;
        3.3, 6.3, 2.5, 1.6;
        7.5, 6.6, 1.3, 5.2;
    ];
    let mat2 = matrix![
        7.0, 6.0, 2.0, 5.0;
        8.0, 9.0, 5.0, 2.0;
        1.0, 3.0, 5.0, 7.0;
        9.0, 8.0, 4.0, 1.0;
    ];
    let mat3 = matrix![
        6.9, 8.1, 7.2, 6.3;
        4.9, 8.7, 1.2, 6.9;
        3.8, 4.7, 6.1, 2.9;
        3.4, 6.1, 9.2, 3.1;
    ];

    let result: Mat4<f64> =
        (&mat3 - (&mat1 * (&mat3 + &mat2 - &mat1) * &mat2 * (&mat2 - &mat1 - &mat3))).into();

    let expected = matrix![
        10599.6, 42363.3, 44611.7, 61768.1;
        14197.7, 51564.2, 53526.5, 72157.9;
        8774.53, 39373.7, 42050.4, 59595.3;
        14297.7, 61323.6, 65321.8, 91666.5;
    ];
    assert_relative_eq!(result, expected, max_relative = 1e-5);
}

#[test]
fn elementwise() {
    init_logger();

    let a = matrix![1i32, -2; 3, 4];
    let b = matrix![5i32, 6; -7, 8];
    assert_eq!(emul(&a, &b).eval(), matrix![5, -12; -21, 32]);
    assert_eq!(a.expr().ediv(&b).eval(), matrix![0, 0; 0, 0]);
    assert_eq!(b.expr().ediv(&a).eval(), matrix![5, -3; -2, 2]);
}

#[test]
fn rectangular_product() {
    init_logger();

    let a = Matrix::<i64, 2, 4>::from_fn(|row, col| (row * 4 + col) as i64);
    let b = Matrix::<i64, 4, 3>::from_fn(|row, col| (row as i64) - (col as i64));
    let product: Matrix<i64, 2, 3> = (&a * &b).eval();
    for (row, col) in [(0, 0), (0, 2), (1, 1)] {
        let expected: i64 = (0..4).map(|k| a[(row, k)] * b[(k, col)]).sum();
        assert_eq!(product[(row, col)], expected);
    }
    assert_eq!(product.transpose().eval(), (b.transpose() * a.transpose()).eval());
}
