//! Nodes that read through to a single child expression.

use std::{marker::PhantomData, ops::Neg};

use num_traits::AsPrimitive;

use super::{impl_involutions, MatrixExpr, NegateExpr, TransposeExpr};
use crate::{Scalar, Sqrt};

/// Swaps the rows and columns of its child.
///
/// Element `(row, col)` is element `(col, row)` of the child.
#[derive(Clone, Copy, Debug)]
pub struct Transposed<E>(E);

impl<E> Transposed<E> {
    #[inline]
    pub(crate) fn new(inner: E) -> Self {
        Self(inner)
    }
}

impl<E: MatrixExpr<C, R>, const R: usize, const C: usize> MatrixExpr<R, C> for Transposed<E> {
    type Elem = E::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        self.0.elem(col, row)
    }
}

impl<E: MatrixExpr<C, R>, const R: usize, const C: usize> TransposeExpr<R, C> for Transposed<E> {
    type Output = E;

    #[inline]
    fn transpose_expr(self) -> E {
        self.0
    }
}

impl_involutions!(@negate [E,] Transposed<E>);
impl_involutions!(@invert [E,] Transposed<E>);

/// Negates every element of its child.
#[derive(Clone, Copy, Debug)]
pub struct Negated<E>(E);

impl<E> Negated<E> {
    #[inline]
    pub(crate) fn new(inner: E) -> Self {
        Self(inner)
    }
}

impl<E, const R: usize, const C: usize> MatrixExpr<R, C> for Negated<E>
where
    E: MatrixExpr<R, C>,
    E::Elem: Neg<Output = E::Elem>,
{
    type Elem = E::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        -self.0.elem(row, col)
    }
}

impl<E, const R: usize, const C: usize> NegateExpr<R, C> for Negated<E>
where
    E: MatrixExpr<R, C>,
    E::Elem: Neg<Output = E::Elem>,
{
    type Output = E;

    #[inline]
    fn negate_expr(self) -> E {
        self.0
    }
}

impl_involutions!(@transpose [E,] Negated<E>);
impl_involutions!(@invert [E,] Negated<E>);

/// A rectangular window into an `SR`x`SC` child, with its top-left corner at `(R0, C0)`.
///
/// The size of the window is the dimension of the [`Expr`][super::Expr] holding the node, and is
/// checked against the child when the block is created with [`Expr::block`][super::Expr::block].
#[derive(Clone, Copy, Debug)]
pub struct Block<E, const SR: usize, const SC: usize, const R0: usize, const C0: usize>(E);

impl<E, const SR: usize, const SC: usize, const R0: usize, const C0: usize>
    Block<E, SR, SC, R0, C0>
{
    #[inline]
    pub(crate) fn new(inner: E) -> Self {
        Self(inner)
    }
}

impl<E, const SR: usize, const SC: usize, const R0: usize, const C0: usize, const R: usize, const C: usize>
    MatrixExpr<R, C> for Block<E, SR, SC, R0, C0>
where
    E: MatrixExpr<SR, SC>,
{
    type Elem = E::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        self.0.elem(R0 + row, C0 + col)
    }
}

impl_involutions!(
    [E, const SR: usize, const SC: usize, const R0: usize, const C0: usize,]
    Block<E, SR, SC, R0, C0>
);

/// An `SR`x`SC` child with one row and one column removed.
#[derive(Clone, Copy, Debug)]
pub struct SubMatrix<E, const SR: usize, const SC: usize> {
    inner: E,
    row: usize,
    col: usize,
}

impl<E, const SR: usize, const SC: usize> SubMatrix<E, SR, SC> {
    #[track_caller]
    pub(crate) fn new(inner: E, row: usize, col: usize) -> Self {
        assert!(
            row < SR && col < SC,
            "cannot remove row {row} and column {col} from a {SR}x{SC} matrix"
        );
        Self { inner, row, col }
    }

    /// Returns the row and column of the child that this node skips.
    pub fn removed(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<E, const SR: usize, const SC: usize, const R: usize, const C: usize> MatrixExpr<R, C>
    for SubMatrix<E, SR, SC>
where
    E: MatrixExpr<SR, SC>,
{
    type Elem = E::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        let row = if row < self.row { row } else { row + 1 };
        let col = if col < self.col { col } else { col + 1 };
        self.inner.elem(row, col)
    }
}

impl_involutions!([E, const SR: usize, const SC: usize,] SubMatrix<E, SR, SC>);

/// Converts every element of its child to `U` with an `as` cast.
#[derive(Clone, Copy, Debug)]
pub struct Cast<E, U> {
    inner: E,
    _target: PhantomData<fn() -> U>,
}

impl<E, U> Cast<E, U> {
    #[inline]
    pub(crate) fn new(inner: E) -> Self {
        Self {
            inner,
            _target: PhantomData,
        }
    }
}

impl<E, U, const R: usize, const C: usize> MatrixExpr<R, C> for Cast<E, U>
where
    E: MatrixExpr<R, C>,
    E::Elem: AsPrimitive<U>,
    U: Copy + 'static,
{
    type Elem = U;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> U {
        self.inner.elem(row, col).as_()
    }
}

impl_involutions!([E, U,] Cast<E, U>);

/// Takes the square root of every element of its child.
///
/// Elements are converted to their floating-point type first, so integer matrices produce [`f64`]
/// elements. Negative elements produce NaN.
#[derive(Clone, Copy, Debug)]
pub struct ElemSqrt<E>(E);

impl<E> ElemSqrt<E> {
    #[inline]
    pub(crate) fn new(inner: E) -> Self {
        Self(inner)
    }
}

impl<E, const R: usize, const C: usize> MatrixExpr<R, C> for ElemSqrt<E>
where
    E: MatrixExpr<R, C>,
    E::Elem: Scalar,
{
    type Elem = <E::Elem as Scalar>::Float;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        Sqrt::sqrt(self.0.elem(row, col).to_float())
    }
}

impl_involutions!([E,] ElemSqrt<E>);
