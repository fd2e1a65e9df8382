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

use parcore::partition::{chunk_ranges, partition};
use parcore::random::rand_seq;

// the partition invariant: ranges are adjacent, disjoint, and cover [0, len)
// exactly, for every (len, workers) pair.
#[test]
fn ranges_cover_exactly() {
    for len in 0..=64usize {
        for workers in 1..=12usize {
            let ranges = chunk_ranges(len, workers);
            assert_eq!(ranges.len(), workers, "len={len} workers={workers}");
            assert_eq!(ranges[0].start, 0);
            for i in 1..ranges.len() {
                assert_eq!(
                    ranges[i].start,
                    ranges[i - 1].end,
                    "gap or overlap at chunk {i}, len={len} workers={workers}"
                );
            }
            assert_eq!(ranges.last().unwrap().end, len);
        }
    }
}

#[test]
fn chunk_size_is_ceil_div() {
    let ranges = chunk_ranges(10, 3);
    assert_eq!(ranges, vec![0..4, 4..8, 8..10]);
}

#[test]
fn more_workers_than_elements_gives_empty_chunks() {
    // ceil(3 / 5) = 1, so the first three chunks take one element each and
    // the last two are empty.
    let ranges = chunk_ranges(3, 5);
    assert_eq!(ranges, vec![0..1, 1..2, 2..3, 3..3, 3..3]);
}

#[test]
fn empty_input_gives_all_empty_chunks() {
    let ranges = chunk_ranges(0, 4);
    assert_eq!(ranges, vec![0..0, 0..0, 0..0, 0..0]);
}

#[test]
fn partition_concatenates_to_input() {
    for len in [0usize, 1, 7, 100] {
        let s = rand_seq(len as u64, len, 1000);
        for workers in 1..=8usize {
            let chunks = partition(&s, workers);
            assert_eq!(chunks.len(), workers);
            let rejoined: Vec<i32> = chunks.into_iter().flatten().collect();
            assert_eq!(rejoined, s, "len={len} workers={workers}");
        }
    }
}
