//! Operator overloads on [`Expr`] and `&Matrix`.
//!
//! Every operator builds a node and returns it wrapped in an [`Expr`]. Operands are taken by value
//! (expressions) or by reference (matrices), so building a tree never copies a matrix.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{
    Difference, Expr, MatrixExpr, NegateExpr, Negated, Product, ScalarDiv, ScalarMul, Sum,
};
use crate::{Matrix, Scalar};

macro_rules! elementwise_op {
    ($($op:ident::$method:ident => $node:ident),+) => {
        $(
            impl<A, B, const R: usize, const C: usize> $op<Expr<B, R, C>> for Expr<A, R, C>
            where
                $node<A, B>: MatrixExpr<R, C>,
            {
                type Output = Expr<$node<A, B>, R, C>;

                fn $method(self, rhs: Expr<B, R, C>) -> Self::Output {
                    Expr::new($node::new(self.0, rhs.0))
                }
            }

            impl<'b, A, T, const R: usize, const C: usize> $op<&'b Matrix<T, R, C>>
                for Expr<A, R, C>
            where
                $node<A, &'b Matrix<T, R, C>>: MatrixExpr<R, C>,
            {
                type Output = Expr<$node<A, &'b Matrix<T, R, C>>, R, C>;

                fn $method(self, rhs: &'b Matrix<T, R, C>) -> Self::Output {
                    Expr::new($node::new(self.0, rhs))
                }
            }

            impl<'a, B, T, const R: usize, const C: usize> $op<Expr<B, R, C>>
                for &'a Matrix<T, R, C>
            where
                $node<&'a Matrix<T, R, C>, B>: MatrixExpr<R, C>,
            {
                type Output = Expr<$node<&'a Matrix<T, R, C>, B>, R, C>;

                fn $method(self, rhs: Expr<B, R, C>) -> Self::Output {
                    Expr::new($node::new(self, rhs.0))
                }
            }

            impl<'a, 'b, T, const R: usize, const C: usize> $op<&'b Matrix<T, R, C>>
                for &'a Matrix<T, R, C>
            where
                $node<&'a Matrix<T, R, C>, &'b Matrix<T, R, C>>: MatrixExpr<R, C>,
            {
                type Output = Expr<$node<&'a Matrix<T, R, C>, &'b Matrix<T, R, C>>, R, C>;

                fn $method(self, rhs: &'b Matrix<T, R, C>) -> Self::Output {
                    Expr::new($node::new(self, rhs))
                }
            }
        )+
    };
}

elementwise_op!(Add::add => Sum, Sub::sub => Difference);

impl<A, B, T, const M: usize, const K: usize, const P: usize> Mul<Expr<B, K, P>> for Expr<A, M, K>
where
    A: MatrixExpr<M, K, Elem = T>,
    B: MatrixExpr<K, P, Elem = T>,
    T: Scalar,
{
    type Output = Expr<Product<T, M, K, P>, M, P>;

    fn mul(self, rhs: Expr<B, K, P>) -> Self::Output {
        Expr::new(Product::new(self.0, rhs.0))
    }
}

impl<'b, A, T, const M: usize, const K: usize, const P: usize> Mul<&'b Matrix<T, K, P>>
    for Expr<A, M, K>
where
    A: MatrixExpr<M, K, Elem = T>,
    T: Scalar,
{
    type Output = Expr<Product<T, M, K, P>, M, P>;

    fn mul(self, rhs: &'b Matrix<T, K, P>) -> Self::Output {
        Expr::new(Product::new(self.0, rhs))
    }
}

impl<'a, B, T, const M: usize, const K: usize, const P: usize> Mul<Expr<B, K, P>>
    for &'a Matrix<T, M, K>
where
    B: MatrixExpr<K, P, Elem = T>,
    T: Scalar,
{
    type Output = Expr<Product<T, M, K, P>, M, P>;

    fn mul(self, rhs: Expr<B, K, P>) -> Self::Output {
        Expr::new(Product::new(self, rhs.0))
    }
}

impl<'a, 'b, T, const M: usize, const K: usize, const P: usize> Mul<&'b Matrix<T, K, P>>
    for &'a Matrix<T, M, K>
where
    T: Scalar,
{
    type Output = Expr<Product<T, M, K, P>, M, P>;

    fn mul(self, rhs: &'b Matrix<T, K, P>) -> Self::Output {
        Expr::new(Product::new(self, rhs))
    }
}

/// Scalar multiplication and division, for every primitive scalar type.
///
/// These can't be generic over the scalar type, since `Expr * Expr` is matrix multiplication.
macro_rules! scalar_ops {
    ($($s:ty),+) => {
        $(
            impl<A, const R: usize, const C: usize> Mul<$s> for Expr<A, R, C>
            where
                ScalarMul<A, $s>: MatrixExpr<R, C>,
            {
                type Output = Expr<ScalarMul<A, $s>, R, C>;

                fn mul(self, scalar: $s) -> Self::Output {
                    Expr::new(ScalarMul::new(self.0, scalar))
                }
            }

            impl<'a, T, const R: usize, const C: usize> Mul<$s> for &'a Matrix<T, R, C>
            where
                ScalarMul<&'a Matrix<T, R, C>, $s>: MatrixExpr<R, C>,
            {
                type Output = Expr<ScalarMul<&'a Matrix<T, R, C>, $s>, R, C>;

                fn mul(self, scalar: $s) -> Self::Output {
                    Expr::new(ScalarMul::new(self, scalar))
                }
            }

            impl<A, const R: usize, const C: usize> Mul<Expr<A, R, C>> for $s
            where
                ScalarMul<A, $s>: MatrixExpr<R, C>,
            {
                type Output = Expr<ScalarMul<A, $s>, R, C>;

                fn mul(self, rhs: Expr<A, R, C>) -> Self::Output {
                    Expr::new(ScalarMul::new(rhs.0, self))
                }
            }

            impl<'a, T, const R: usize, const C: usize> Mul<&'a Matrix<T, R, C>> for $s
            where
                ScalarMul<&'a Matrix<T, R, C>, $s>: MatrixExpr<R, C>,
            {
                type Output = Expr<ScalarMul<&'a Matrix<T, R, C>, $s>, R, C>;

                fn mul(self, rhs: &'a Matrix<T, R, C>) -> Self::Output {
                    Expr::new(ScalarMul::new(rhs, self))
                }
            }

            impl<A, const R: usize, const C: usize> Div<$s> for Expr<A, R, C>
            where
                ScalarDiv<A, $s>: MatrixExpr<R, C>,
            {
                type Output = Expr<ScalarDiv<A, $s>, R, C>;

                /// # Panics
                ///
                /// Panics if `divisor` is zero. Use [`Expr::checked_div`] to handle that case.
                #[track_caller]
                fn div(self, divisor: $s) -> Self::Output {
                    match ScalarDiv::new(self.0, divisor) {
                        Ok(node) => Expr::new(node),
                        Err(e) => panic!("{e}"),
                    }
                }
            }

            impl<'a, T, const R: usize, const C: usize> Div<$s> for &'a Matrix<T, R, C>
            where
                T: Copy,
                ScalarDiv<&'a Matrix<T, R, C>, $s>: MatrixExpr<R, C>,
            {
                type Output = Expr<ScalarDiv<&'a Matrix<T, R, C>, $s>, R, C>;

                #[track_caller]
                fn div(self, divisor: $s) -> Self::Output {
                    self.expr() / divisor
                }
            }
        )+
    };
}

scalar_ops!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<A, const R: usize, const C: usize> Neg for Expr<A, R, C>
where
    A: NegateExpr<R, C>,
{
    type Output = Expr<<A as NegateExpr<R, C>>::Output, R, C>;

    /// Negates every element. Negating a negation returns the original expression.
    fn neg(self) -> Self::Output {
        Expr::new(self.0.negate_expr())
    }
}

impl<'a, T, const R: usize, const C: usize> Neg for &'a Matrix<T, R, C>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Expr<Negated<&'a Matrix<T, R, C>>, R, C>;

    fn neg(self) -> Self::Output {
        Expr::new(Negated::new(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mat2, Matrix, MatrixExpr};

    #[test]
    fn operand_combinations() {
        let a = matrix![1, 2; 3, 4];
        let b = matrix![5, 6; 7, 8];
        let expected = matrix![6, 8; 10, 12];
        assert_eq!((&a + &b).eval(), expected);
        assert_eq!((a.expr() + &b).eval(), expected);
        assert_eq!((&a + b.expr()).eval(), expected);
        assert_eq!((a.expr() + b.expr()).eval(), expected);

        assert_eq!((b.expr() - a.expr()).eval(), matrix![4, 4; 4, 4]);
        assert_eq!((&a * b.expr()).eval(), (a.expr() * &b).eval());
    }

    #[test]
    fn scalar_on_either_side() {
        let m = matrix![1.5f32, -2.0];
        assert_eq!((&m * 2.0f32).eval(), (2.0f32 * &m).eval());
        assert_eq!((3i32 * m.expr()).eval(), matrix![4.5, -6.0]);
        assert_eq!((m.expr() / 0.5f32).eval(), matrix![3.0, -4.0]);
    }

    #[test]
    fn precedence() {
        let a = matrix![1i32, 2; 3, 4];
        let b = matrix![0, 1; 1, 0];
        // `*` binds tighter than `+`, and unary `-` tighter than both.
        let expr = &a + &b * &a;
        assert_eq!(expr.eval(), matrix![4, 6; 4, 6]);
        let expr = -&a * 2i32 + &b;
        assert_eq!(expr.eval(), matrix![-2, -3; -5, -8]);
    }

    #[test]
    fn long_chain() {
        let a = matrix![1.0, 2.0; 3.0, 4.0];
        let b = matrix![5.0, 6.0; 7.0, 8.0];
        let result: Mat2<f64> = ((&a + &b).transpose() * 2.0f64 - &a * &b + -&a).eval();
        let expected: Mat2<f64> = Matrix::from_fn(|row, col| {
            let sum_t = a[(col, row)] + b[(col, row)];
            let product = (0..2).map(|k| a[(row, k)] * b[(k, col)]).sum::<f64>();
            sum_t * 2.0 - product - a[(row, col)]
        });
        assert_eq!(result, expected);
    }
}
