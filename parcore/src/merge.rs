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

/// merges two sorted slices into one sorted vector, taking from `left` on
/// ties so the interleaving is stable and identical on every run.
///
/// Precondition: both inputs are non-decreasing. Passing an unsorted slice is
/// a contract violation; it is caught by `debug_assert!` in debug builds and
/// never silently repaired.
pub fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Copy + Ord,
{
    debug_assert!(left.windows(2).all(|w| w[0] <= w[1]));
    debug_assert!(right.windows(2).all(|w| w[0] <= w[1]));

    let (n1, n2) = (left.len(), right.len());
    let mut out = Vec::with_capacity(n1 + n2);
    let (mut i, mut j) = (0, 0);

    loop {
        if i == n1 { // left has no more elements
            out.extend_from_slice(&right[j..]);
            break;
        }
        if j == n2 { // right has no more elements
            out.extend_from_slice(&left[i..]);
            break;
        }

        if right[j] < left[i] {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }
    out
}
