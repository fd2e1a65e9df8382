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

/// inclusive prefix sum by a serial running accumulation.
pub fn scan<T>(inp: &[T]) -> Vec<T>
where
    T: PrimInt,
{
    let mut out = Vec::with_capacity(inp.len());
    let mut acc = T::zero();
    for &x in inp {
        acc = acc + x;
        out.push(acc);
    }
    out
}

/// two-pass chunked prefix sum: chunk totals in parallel, a serial exclusive
/// scan of the totals for per-chunk offsets, then per-chunk inclusive scans
/// in parallel. Integer addition is associative, so the output equals `scan`
/// exactly.
pub fn par_scan<T>(inp: &[T], workers: usize) -> Result<Vec<T>, ParError>
where
    T: PrimInt + Send + Sync,
{
    if workers < 1 {
        return Err(ParError::InvalidWorkerCount(workers));
    }

    let ranges = chunk_ranges(inp.len(), workers);

    let totals: Vec<T> = ranges
        .par_iter()
        .map(|r| inp[r.clone()].iter().fold(T::zero(), |acc, &x| acc + x))
        .collect();

    let mut offsets = Vec::with_capacity(totals.len());
    let mut acc = T::zero();
    for t in totals {
        offsets.push(acc);
        acc = acc + t;
    }

    let parts: Vec<Vec<T>> = ranges
        .into_par_iter()
        .zip(offsets)
        .map(|(r, offset)| {
            let mut acc = offset;
            inp[r]
                .iter()
                .map(|&x| {
                    acc = acc + x;
                    acc
                })
                .collect()
        })
        .collect();

    Ok(parts.into_iter().flatten().collect())
}
