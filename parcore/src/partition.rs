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

use std::ops::Range;

/// splits `[0, len)` into `workers` contiguous half-open ranges of
/// `ceil(len / workers)` elements each. Every index lands in exactly one
/// range; when `len < workers` the trailing ranges are empty rather than
/// shrinking the worker count.
pub fn chunk_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    debug_assert!(workers >= 1);
    let chunk_size = (len + workers - 1) / workers;
    (0..workers)
        .map(|i| {
            let start = (i * chunk_size).min(len);
            let end = ((i + 1) * chunk_size).min(len);
            start..end
        })
        .collect()
}

/// copies `inp` into one privately owned chunk per worker. Chunks are
/// handed to tasks by value, so no chunk is ever shared or mutated by two
/// workers at once.
pub fn partition<T>(inp: &[T], workers: usize) -> Vec<Vec<T>>
where
    T: Copy,
{
    chunk_ranges(inp.len(), workers)
        .into_iter()
        .map(|r| inp[r].to_vec())
        .collect()
}
