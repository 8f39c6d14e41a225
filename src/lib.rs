//! Fixed-size matrices with lazily evaluated expression trees.
//!
//! # Motivation
//!
//! Chained matrix arithmetic like `a - b * (c + d)` is usually evaluated one operator at a time,
//! allocating a temporary matrix for every intermediate result. This library instead turns every
//! operator into a small typed node that borrows its operands. Nothing is computed until the
//! resulting tree is evaluated into a [`Matrix`], at which point every element is pulled through
//! the whole tree in a single pass.
//!
//! ```
//! # use lazy_linalg::*;
//! let a = matrix![1.0, 2.0; 3.0, 4.0];
//! let b = matrix![0.5, 0.0; 0.0, 0.5];
//!
//! // Builds a tree, computes nothing.
//! let expr = (&a + &b).transpose() * 2.0f64;
//!
//! // Pulls each element through the tree.
//! assert_eq!(expr.eval(), matrix![3.0, 6.0; 4.0, 9.0]);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized matrices. Dimensions are const generic parameters, so shape
//!   mismatches (adding a 2x3 to a 3x2, multiplying incompatible matrices, inverting a non-square
//!   matrix) are compile errors.
//! - Support only a single, row-major, unpadded data layout.
//! - Be generic over the primitive numeric element types, but don't try to support non-[`Copy`]
//!   numeric types (eg. "big decimals").
//! - Expression trees borrow their leaves. The borrow checker guarantees that no tree outlives its
//!   operands and that no operand is mutated while a tree referring to it exists.
//! - Nodes whose elements depend on the whole operand (minors, cofactors, adjugates, inverses and
//!   matrix products) compute that dependency once, when the node is built.
//! - No decompositions beyond determinants and inverses.
//!
//! # Logging
//!
//! The library logs through the [`log`] facade and never installs a logger itself.

/// Creates a [`Matrix`] from a row-major literal list.
///
/// Elements within a row are separated by `,`, rows are separated by `;`. Every row must have the
/// same length.
///
/// # Examples
///
/// ```
/// # use lazy_linalg::*;
/// let mat = matrix![
///     1, 2, 3;
///     4, 5, 6;
/// ];
/// assert_eq!(mat, Matrix::from_rows([[1, 2, 3], [4, 5, 6]]));
/// ```
#[macro_export]
macro_rules! matrix {
    ($($($elem:expr),+ $(,)?);+ $(;)?) => {
        $crate::Matrix::from_rows([$([$($elem),+]),+])
    };
}

mod det;
mod error;
pub mod expr;
mod matrix;
mod traits;

pub use error::Error;
pub use expr::{
    adjugate, cofactor, ediv, emul, inverse, minor, sqrt, transpose, try_inverse, Expr, IntoExpr,
    InvertExpr, MatrixExpr, NegateExpr, TransposeExpr,
};
pub use matrix::*;
pub use traits::*;
