//! Nodes whose elements depend on every element of their source.
//!
//! These evaluate their source once, when they are built, and serve elements from the result.
//! Reading an element of a lazily computed minor would otherwise cost a full sub-determinant.

use super::{impl_involutions, InvertExpr, MatrixExpr};
use crate::{det, Error, Float, Matrix, Number, Scalar, Sqrt};

/// The matrix of minors of a square expression.
///
/// Element `(row, col)` is the determinant of the source with row `row` and column `col` removed.
/// The minor matrix of a 1x1 matrix is `[1]`.
#[derive(Clone, Copy, Debug)]
pub struct Minor<T, const D: usize>(Matrix<T, D, D>);

impl<T: Number, const D: usize> Minor<T, D> {
    pub(crate) fn new<E: MatrixExpr<D, D, Elem = T>>(source: E) -> Self {
        log::trace!("computing minors of a {D}x{D} expression");
        Self(det::minor_matrix(source.eval().as_rows()))
    }
}

/// The cofactor matrix of a square expression.
///
/// Each element is the corresponding [`Minor`], negated where `row + col` is odd.
#[derive(Clone, Copy, Debug)]
pub struct Cofactor<T, const D: usize>(Matrix<T, D, D>);

impl<T: Number, const D: usize> Cofactor<T, D> {
    pub(crate) fn new<E: MatrixExpr<D, D, Elem = T>>(source: E) -> Self {
        log::trace!("computing cofactors of a {D}x{D} expression");
        Self(det::cofactor_matrix(source.eval().as_rows()))
    }
}

/// The adjugate (transposed cofactor matrix) of a square expression.
#[derive(Clone, Copy, Debug)]
pub struct Adjugate<T, const D: usize>(Matrix<T, D, D>);

impl<T: Number, const D: usize> Adjugate<T, D> {
    pub(crate) fn new<E: MatrixExpr<D, D, Elem = T>>(source: E) -> Self {
        log::trace!("computing adjugate of a {D}x{D} expression");
        Self(det::adjugate_matrix(source.eval().as_rows()))
    }
}

macro_rules! cached_node {
    ($($node:ident),+) => {
        $(
            impl<T: Copy, const D: usize> MatrixExpr<D, D> for $node<T, D> {
                type Elem = T;

                #[inline]
                fn elem(&self, row: usize, col: usize) -> T {
                    self.0[(row, col)]
                }

                fn eval(&self) -> Matrix<T, D, D> {
                    self.0
                }
            }

            impl_involutions!([T, const D: usize,] $node<T, D>);
        )+
    };
}
cached_node!(Minor, Cofactor, Adjugate);

/// The inverse of a square expression, computed as the adjugate divided by the determinant.
///
/// The source is converted to its floating-point type `F` before anything is computed. The
/// determinant is obtained from the first row of the source and the first column of the adjugate,
/// so the cofactor expansion only runs once.
///
/// The node keeps its source, so inverting it again returns the source unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Inverse<E, F, const D: usize> {
    source: E,
    adjugate: Matrix<F, D, D>,
    inv_det: F,
}

impl<E, F, const D: usize> Inverse<E, F, D>
where
    E: MatrixExpr<D, D>,
    E::Elem: Scalar<Float = F>,
    F: Float,
{
    /// Builds the node, and returns whether the source is singular.
    ///
    /// The determinant is compared against `EPSILON` times the product of the row lengths, which
    /// bounds its magnitude (Hadamard's inequality). Scaling the matrix scales both sides the same
    /// way.
    fn build(source: E) -> (Self, bool) {
        let m = source.eval().map(<E::Elem as Scalar>::to_float);
        let adjugate = det::adjugate_matrix(m.as_rows());
        let det = (0..D).fold(F::ZERO, |acc, col| acc + m[(0, col)] * adjugate[(col, 0)]);
        let bound = m.as_rows().iter().fold(F::ONE, |acc, row| {
            acc * row.iter().fold(F::ZERO, |sum, &x| sum + x * x).sqrt()
        });
        log::trace!("inverting {D}x{D} expression with determinant {det:?} (bound {bound:?})");

        let inverse = Self {
            source,
            adjugate,
            inv_det: F::ONE / det,
        };
        (inverse, det.abs() <= F::EPSILON * bound)
    }

    pub(crate) fn new(source: E) -> Self {
        let (inverse, singular) = Self::build(source);
        if singular {
            log::warn!(
                "inverting a singular {D}x{D} matrix (1/det = {:?})",
                inverse.inv_det
            );
        }
        inverse
    }

    pub(crate) fn try_new(source: E) -> Result<Self, Error> {
        let (inverse, singular) = Self::build(source);
        if singular {
            return Err(Error::Singular);
        }
        Ok(inverse)
    }
}

impl<E, F, const D: usize> Inverse<E, F, D> {
    /// Returns the expression this node inverts.
    pub fn source(&self) -> &E {
        &self.source
    }

    /// Returns the reciprocal of the determinant of the source.
    pub fn inv_det(&self) -> F
    where
        F: Copy,
    {
        self.inv_det
    }
}

impl<E, F: Float, const D: usize> MatrixExpr<D, D> for Inverse<E, F, D> {
    type Elem = F;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> F {
        self.inv_det * self.adjugate[(row, col)]
    }

    fn eval(&self) -> Matrix<F, D, D> {
        self.adjugate.map(|elem| self.inv_det * elem)
    }
}

impl<E, F, const D: usize> InvertExpr<D> for Inverse<E, F, D>
where
    E: MatrixExpr<D, D>,
    F: Float,
{
    type Output = E;

    #[inline]
    fn invert_expr(self) -> E {
        self.source
    }

    #[inline]
    fn try_invert_expr(self) -> Result<E, Error> {
        Ok(self.source)
    }
}

impl_involutions!(@transpose [E, F, const D: usize,] Inverse<E, F, D>);
impl_involutions!(@negate [E, F, const D: usize,] Inverse<E, F, D>);
