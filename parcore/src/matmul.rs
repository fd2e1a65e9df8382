// ============================================================================
// This code is part of ParBench.
// ----------------------------------------------------------------------------
// MIT License
//
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use num_traits::PrimInt;
use rayon::prelude::*;

use crate::error::ParError;
use crate::partition::chunk_ranges;

/// row-major matrix, the shape the benchmark inputs arrive in. Rows are
/// assumed rectangular.
pub type Matrix<T> = Vec<Vec<T>>;

fn dims<T>(m: &[Vec<T>]) -> (usize, usize) {
    (m.len(), m.first().map_or(0, Vec::len))
}

fn check_dims<T>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<(), ParError> {
    let (left_rows, left_cols) = dims(a);
    let (right_rows, right_cols) = dims(b);
    if left_cols != right_rows {
        return Err(ParError::DimensionMismatch {
            left_rows,
            left_cols,
            right_rows,
            right_cols,
        });
    }
    Ok(())
}

// Transposing the right operand turns every dot product into a pair of
// contiguous row scans.
fn transpose<T>(m: &[Vec<T>]) -> Matrix<T>
where
    T: Copy,
{
    let (rows, cols) = dims(m);
    (0..cols)
        .map(|j| (0..rows).map(|i| m[i][j]).collect())
        .collect()
}

fn row_block<T>(a_rows: &[Vec<T>], bt: &[Vec<T>]) -> Matrix<T>
where
    T: PrimInt,
{
    a_rows
        .iter()
        .map(|row| {
            bt.iter()
                .map(|col| {
                    row.iter()
                        .zip(col.iter())
                        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
                })
                .collect()
        })
        .collect()
}

/// serial dense multiply; the correctness oracle for `par_matmul`.
pub fn matmul<T>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<Matrix<T>, ParError>
where
    T: PrimInt,
{
    check_dims(a, b)?;
    let bt = transpose(b);
    Ok(row_block(a, &bt))
}

/// multiplies contiguous row blocks of `a` in parallel against the shared
/// transpose of `b`, then concatenates the blocks in order. Ceil-division
/// chunking guarantees no remainder row is ever dropped when the row count
/// does not divide evenly by the worker count.
pub fn par_matmul<T>(a: &[Vec<T>], b: &[Vec<T>], workers: usize) -> Result<Matrix<T>, ParError>
where
    T: PrimInt + Send + Sync,
{
    if workers < 1 {
        return Err(ParError::InvalidWorkerCount(workers));
    }
    check_dims(a, b)?;
    let bt = transpose(b);

    let blocks: Vec<Matrix<T>> = chunk_ranges(a.len(), workers)
        .into_par_iter()
        .map(|r| row_block(&a[r], &bt))
        .collect();

    Ok(blocks.into_iter().flatten().collect())
}
