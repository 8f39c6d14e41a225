//! Nodes combining two expressions, or an expression and a scalar.

use std::ops;

use super::{impl_involutions, MatrixExpr};
use crate::{Error, FloatOf, Matrix, Promote, Scalar};

macro_rules! elementwise {
    ($($(#[$attr:meta])* $node:ident => $op:ident::$method:ident;)+) => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, Debug)]
            pub struct $node<A, B> {
                lhs: A,
                rhs: B,
            }

            impl<A, B> $node<A, B> {
                #[inline]
                pub(crate) fn new(lhs: A, rhs: B) -> Self {
                    Self { lhs, rhs }
                }
            }

            impl<A, B, T, const R: usize, const C: usize> MatrixExpr<R, C> for $node<A, B>
            where
                A: MatrixExpr<R, C, Elem = T>,
                B: MatrixExpr<R, C, Elem = T>,
                T: Copy + ops::$op<Output = T>,
            {
                type Elem = T;

                #[inline]
                fn elem(&self, row: usize, col: usize) -> T {
                    ops::$op::$method(self.lhs.elem(row, col), self.rhs.elem(row, col))
                }
            }

            impl_involutions!([A, B,] $node<A, B>);
        )+
    };
}

elementwise! {
    /// Elementwise sum of two equally shaped expressions.
    Sum => Add::add;
    /// Elementwise difference of two equally shaped expressions.
    Difference => Sub::sub;
    /// Elementwise (Hadamard) product of two equally shaped expressions.
    ElemMul => Mul::mul;
    /// Elementwise quotient of two equally shaped expressions.
    ElemDiv => Div::div;
}

/// Multiplies every element of an expression by a scalar.
///
/// The element type is the [`Promote`]d type of the matrix element and the scalar.
#[derive(Clone, Copy, Debug)]
pub struct ScalarMul<E, S> {
    inner: E,
    scalar: S,
}

impl<E, S> ScalarMul<E, S> {
    #[inline]
    pub(crate) fn new(inner: E, scalar: S) -> Self {
        Self { inner, scalar }
    }
}

impl<E, S, const R: usize, const C: usize> MatrixExpr<R, C> for ScalarMul<E, S>
where
    E: MatrixExpr<R, C>,
    E::Elem: Promote<S>,
    S: Scalar,
{
    type Elem = <E::Elem as Promote<S>>::Promoted;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        <E::Elem as Promote<S>>::promote(self.inner.elem(row, col))
            * <E::Elem as Promote<S>>::promote_scalar(self.scalar)
    }
}

impl_involutions!([E, S,] ScalarMul<E, S>);

/// Divides every element of an expression by a non-zero scalar.
///
/// Elements are always produced in the floating-point type of the [`Promote`]d type, so integer
/// matrices divide without truncation. The divisor is converted straight to that floating-point
/// type, so it is never narrowed to the element type.
#[derive(Clone, Copy, Debug)]
pub struct ScalarDiv<E, S> {
    inner: E,
    divisor: S,
}

impl<E, S: Scalar> ScalarDiv<E, S> {
    pub(crate) fn new(inner: E, divisor: S) -> Result<Self, Error> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Self { inner, divisor })
    }
}

impl<E, S, const R: usize, const C: usize> MatrixExpr<R, C> for ScalarDiv<E, S>
where
    E: MatrixExpr<R, C>,
    E::Elem: Promote<S>,
    S: Scalar,
{
    type Elem = FloatOf<E::Elem, S>;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        let elem = <E::Elem as Promote<S>>::promote(self.inner.elem(row, col));
        elem.to_float() / <E::Elem as Promote<S>>::promote_divisor(self.divisor)
    }
}

impl_involutions!([E, S,] ScalarDiv<E, S>);

/// The matrix product of an `M`x`K` and a `K`x`P` expression.
///
/// Every element of the product reads a whole row and column of the operands, so both operands
/// are evaluated into matrices when the node is built.
#[derive(Clone, Copy, Debug)]
pub struct Product<T, const M: usize, const K: usize, const P: usize> {
    lhs: Matrix<T, M, K>,
    rhs: Matrix<T, K, P>,
}

impl<T: Scalar, const M: usize, const K: usize, const P: usize> Product<T, M, K, P> {
    pub(crate) fn new<A, B>(lhs: A, rhs: B) -> Self
    where
        A: MatrixExpr<M, K, Elem = T>,
        B: MatrixExpr<K, P, Elem = T>,
    {
        log::trace!("evaluating operands of a {M}x{K} by {K}x{P} product");
        Self {
            lhs: lhs.eval(),
            rhs: rhs.eval(),
        }
    }
}

impl<T: Scalar, const M: usize, const K: usize, const P: usize> MatrixExpr<M, P>
    for Product<T, M, K, P>
{
    type Elem = T;

    fn elem(&self, row: usize, col: usize) -> T {
        (0..K).fold(T::ZERO, |acc, k| acc + self.lhs[(row, k)] * self.rhs[(k, col)])
    }
}

impl_involutions!([T, const M: usize, const K: usize, const P: usize,] Product<T, M, K, P>);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{
        expr::{ediv, emul},
        Error, Matrix, MatrixExpr,
    };

    #[test]
    fn sum_and_difference() {
        let a = matrix![1, 2; 3, 4];
        let b = matrix![6, 7; 8, 9];
        assert_eq!((&a + &b).eval(), matrix![7, 9; 11, 13]);
        assert_eq!((&b - &a).eval(), matrix![5, 5; 5, 5]);
        assert_eq!((&a + &b - &a).eval(), b);
        assert_eq!((&a - &b + &b - &a).eval(), Matrix::<i32, 2, 2>::zeros());
    }

    #[test]
    fn elementwise_mul_div() {
        let a = matrix![1.0, 2.0; 3.0, 4.0];
        let b = matrix![2.0, 4.0; 6.0, 8.0];
        assert_eq!(emul(&a, &b).eval(), matrix![2.0, 8.0; 18.0, 32.0]);
        assert_eq!(ediv(&b, &a).eval(), matrix![2.0, 2.0; 2.0, 2.0]);
        assert_eq!(a.expr().emul(a.transpose()).eval(), matrix![1.0, 6.0; 6.0, 16.0]);

        let zero = Matrix::<f64, 2, 2>::zeros();
        let quotient = ediv(&a, &zero).eval();
        assert!(quotient.iter().all(|elem| elem.is_infinite()));
    }

    #[test]
    fn scalar_mul_promotes() {
        let m = matrix![1i32, 2; 3, 4];
        assert_eq!((&m * 3i32).eval(), matrix![3, 6; 9, 12]);
        assert_eq!((2u8 * &matrix![1u8, 2]).eval(), matrix![2u8, 4]);

        let scaled: Matrix<f32, 2, 2> = (&m * 0.5f32).eval();
        assert_eq!(scaled, matrix![0.5, 1.0; 1.5, 2.0]);

        let scaled: Matrix<f64, 1, 1> = (&matrix![1.5f32] * 2.0f64).eval();
        assert_eq!(scaled, matrix![3.0]);
    }

    #[test]
    fn scalar_div() {
        let m = matrix![1i32, 2; 3, 4];
        let half: Matrix<f64, 2, 2> = (&m / 2i32).eval();
        assert_eq!(half, matrix![0.5, 1.0; 1.5, 2.0]);

        let third = (&matrix![1.0f32] / 3.0f32).eval();
        assert_relative_eq!(third[0], 1.0 / 3.0);

        let wide: Matrix<f64, 1, 2> = (&matrix![1u8, 2] / 256i32).eval();
        assert_eq!(wide, matrix![1.0 / 256.0, 2.0 / 256.0]);

        assert_eq!(m.expr().checked_div(0u8).unwrap_err(), Error::DivideByZero);
        assert_eq!(m.expr().checked_div(1e-9f32).unwrap_err(), Error::DivideByZero);
    }

    #[test]
    #[should_panic(expected = "attempt to divide a matrix by zero")]
    fn scalar_div_by_zero_panics() {
        let m = matrix![1.0, 2.0];
        let _ = &m / 0.0f64;
    }

    #[test]
    #[should_panic(expected = "does not fit in the `i8` element type")]
    fn scalar_mul_overflow_panics() {
        let m = matrix![1i8, 2];
        let _ = (&m * 1000i32).eval();
    }

    #[rustfmt::skip]
    #[test]
    fn product() {
        let a = matrix![1, 2, 3; 4, 5, 6];
        let b = matrix![7, 8; 9, 10; 11, 12];
        assert_eq!((&a * &b).eval(), matrix![58, 64; 139, 154]);
        assert_eq!((&b * &a).eval(), matrix![
            39,  54,  69;
            49,  68,  87;
            59,  82, 105;
        ]);

        let id = Matrix::identity();
        assert_eq!((&a * &id).eval(), a);

        let row = matrix![1, 2, 3];
        let col = matrix![4; 5; 6];
        assert_eq!((&row * &col).eval(), matrix![32]);
        assert_eq!((&row * &col).eval()[0], row.dot(&col.transpose().eval()));
    }
}
