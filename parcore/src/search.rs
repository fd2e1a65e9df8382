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

use rayon::prelude::*;

use crate::error::ParError;
use crate::partition::chunk_ranges;

/// index of the last occurrence of `value` in `arr`, scanning the whole
/// slice without early exit.
pub fn search<T>(arr: &[T], value: T) -> Option<usize>
where
    T: Copy + Eq,
{
    let mut result = None;
    for i in 0..arr.len() {
        if arr[i] == value {
            result = Some(i);
        }
    }
    result
}

/// chunked scan over the shared read-only slice. Each worker reports the
/// last occurrence inside its range as a global index; the hit from the
/// highest-indexed chunk wins so the answer always equals `search`.
pub fn par_search<T>(arr: &[T], value: T, workers: usize) -> Result<Option<usize>, ParError>
where
    T: Copy + Eq + Send + Sync,
{
    if workers < 1 {
        return Err(ParError::InvalidWorkerCount(workers));
    }

    let per_chunk: Vec<Option<usize>> = chunk_ranges(arr.len(), workers)
        .into_par_iter()
        .map(|r| {
            let mut hit = None;
            for i in r {
                if arr[i] == value {
                    hit = Some(i);
                }
            }
            hit
        })
        .collect();

    Ok(per_chunk.into_iter().rev().find_map(|hit| hit))
}
