//! Determinant kernels shared by [`Matrix`] and the eagerly evaluated expression nodes.
//!
//! The recursive expansion never materializes a smaller matrix type. Sub-matrices are described by
//! the set of source rows and columns they keep, so a single monomorphized function handles every
//! level of the recursion.

use std::iter;

use crate::{Float, Matrix, Number};

/// A set of row or column indices still present in a sub-matrix.
#[derive(Clone, Copy)]
struct IndexSet(u64);

impl IndexSet {
    fn full(len: usize) -> Self {
        if len == 64 {
            Self(u64::MAX)
        } else {
            Self((1 << len) - 1)
        }
    }

    fn len(self) -> u32 {
        self.0.count_ones()
    }

    fn without(self, index: usize) -> Self {
        Self(self.0 & !(1 << index))
    }

    /// Smallest index in the set. Must not be called on the empty set.
    fn first(self) -> usize {
        self.0.trailing_zeros() as usize
    }

    fn iter(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(index)
        })
    }
}

struct SupportedSize<const N: usize>;

impl<const N: usize> SupportedSize<N> {
    const OK: () = assert!(
        N > 0 && N <= 64,
        "cofactor expansion supports square matrices between 1x1 and 64x64"
    );
}

/// Determinant of the sub-matrix of `m` formed by `rows` and `cols` (which have equal length).
///
/// Expands along the first remaining row. The empty sub-matrix has determinant 1.
fn expand<T: Number, const N: usize>(m: &[[T; N]; N], rows: IndexSet, cols: IndexSet) -> T {
    match cols.len() {
        0 => T::ONE,
        1 => m[rows.first()][cols.first()],
        2 => {
            let (r0, c0) = (rows.first(), cols.first());
            let (r1, c1) = (rows.without(r0).first(), cols.without(c0).first());
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        }
        _ => {
            let row = rows.first();
            let rest = rows.without(row);
            cols.iter()
                .enumerate()
                .fold(T::ZERO, |det, (pos, col)| {
                    let term = m[row][col] * expand(m, rest, cols.without(col));
                    if pos % 2 == 0 {
                        det + term
                    } else {
                        det - term
                    }
                })
        }
    }
}

fn signed<T: Number>(value: T, row: usize, col: usize) -> T {
    if (row + col) % 2 == 0 {
        value
    } else {
        -value
    }
}

/// Computes the determinant by recursive cofactor expansion along the first row.
pub(crate) fn cofactor_expansion<T: Number, const N: usize>(m: &[[T; N]; N]) -> T {
    let () = SupportedSize::<N>::OK;
    let all = IndexSet::full(N);
    expand(m, all, all)
}

/// Determinant of `m` with row `row` and column `col` removed.
pub(crate) fn minor<T: Number, const N: usize>(m: &[[T; N]; N], row: usize, col: usize) -> T {
    let () = SupportedSize::<N>::OK;
    let all = IndexSet::full(N);
    expand(m, all.without(row), all.without(col))
}

pub(crate) fn minor_matrix<T: Number, const N: usize>(m: &[[T; N]; N]) -> Matrix<T, N, N> {
    Matrix::from_fn(|row, col| minor(m, row, col))
}

pub(crate) fn cofactor_matrix<T: Number, const N: usize>(m: &[[T; N]; N]) -> Matrix<T, N, N> {
    Matrix::from_fn(|row, col| signed(minor(m, row, col), row, col))
}

/// The transposed cofactor matrix, computed without a separate transpose pass.
pub(crate) fn adjugate_matrix<T: Number, const N: usize>(m: &[[T; N]; N]) -> Matrix<T, N, N> {
    Matrix::from_fn(|row, col| signed(minor(m, col, row), row, col))
}

/// Reduces `m` to row-echelon form in place by forward elimination with partial pivoting.
///
/// For each column, the row with the largest magnitude at or below the diagonal becomes the
/// pivot. Columns whose candidates are all exactly zero are left as they are.
///
/// Returns the number of row exchanges performed.
pub(crate) fn eliminate<F: Float, const R: usize, const C: usize>(m: &mut Matrix<F, R, C>) -> usize {
    let mut swaps = 0;
    for col in 0..R.min(C) {
        let mut pivot = col;
        for row in col + 1..R {
            if m[(row, col)].abs() > m[(pivot, col)].abs() {
                pivot = row;
            }
        }

        if m[(pivot, col)] == F::ZERO {
            log::trace!("no usable pivot in column {col}, leaving it in place");
            continue;
        }
        if pivot != col {
            m.swap_rows(pivot, col);
            swaps += 1;
        }

        let denom = m[(col, col)];
        for row in col + 1..R {
            let ratio = m[(row, col)] / denom;
            m.subtract_row(row, col, ratio);
        }
    }
    swaps
}

/// Computes the determinant from the diagonal of the row-echelon form.
pub(crate) fn elimination<F: Float, const N: usize>(mut m: Matrix<F, N, N>) -> F {
    let swaps = eliminate(&mut m);
    let det = (0..N).fold(F::ONE, |acc, i| acc * m[(i, i)]);
    if swaps % 2 == 0 {
        det
    } else {
        -det
    }
}
