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

use parcore::merge::merge;
use parcore::merge_sort::{merge_sort, par_merge_sort};
use parcore::random::rand_seq;
use parcore::ParError;

fn std_sorted(inp: &[i32]) -> Vec<i32> {
    let mut v = inp.to_vec();
    v.sort();
    v
}

#[test]
fn merge_interleaves() {
    assert_eq!(merge(&[1, 3, 5], &[2, 3, 4]), vec![1, 2, 3, 3, 4, 5]);
}

#[test]
fn merge_empty_sides() {
    assert_eq!(merge(&[], &[1, 2]), vec![1, 2]);
    assert_eq!(merge(&[1, 2], &[]), vec![1, 2]);
    assert_eq!(merge::<i32>(&[], &[]), Vec::<i32>::new());
}

#[test]
fn merge_appends_exhausted_tail() {
    assert_eq!(merge(&[1, 2], &[10, 11, 12]), vec![1, 2, 10, 11, 12]);
    assert_eq!(merge(&[10, 11, 12], &[1, 2]), vec![1, 2, 10, 11, 12]);
}

#[test]
fn merge_all_equal() {
    assert_eq!(merge(&[7, 7], &[7, 7, 7]), vec![7; 5]);
}

#[test]
fn sorts_small_input() {
    // S = [5,3,8,1,9,2], w = 3
    let s = [5, 3, 8, 1, 9, 2];
    assert_eq!(merge_sort(&s), vec![1, 2, 3, 5, 8, 9]);
    assert_eq!(par_merge_sort(&s, 3).unwrap(), vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn sorted_input_unchanged() {
    let s: Vec<i32> = (0..100).collect();
    assert_eq!(merge_sort(&s), s);
    assert_eq!(par_merge_sort(&s, 4).unwrap(), s);
}

#[test]
fn empty_and_singleton() {
    for w in 1..=5 {
        assert_eq!(par_merge_sort(&[] as &[i32], w).unwrap(), Vec::<i32>::new());
        assert_eq!(par_merge_sort(&[42], w).unwrap(), vec![42]);
    }
    assert_eq!(merge_sort(&[] as &[i32]), Vec::<i32>::new());
    assert_eq!(merge_sort(&[42]), vec![42]);
}

#[test]
fn more_workers_than_elements() {
    // S = [7,7,7], w = 4: the trailing chunk is empty and must be a no-op.
    assert_eq!(par_merge_sort(&[7, 7, 7], 4).unwrap(), vec![7, 7, 7]);
    assert_eq!(par_merge_sort(&[3, 1, 2], 100).unwrap(), vec![1, 2, 3]);
}

#[test]
fn duplicates_single_worker() {
    assert_eq!(par_merge_sort(&[9, 1, 1, 9, 1], 1).unwrap(), vec![1, 1, 1, 9, 9]);
}

#[test]
fn permutation_and_sortedness() {
    let s = rand_seq(0, 1000, 50);
    let r = merge_sort(&s);
    assert!(r.windows(2).all(|w| w[0] <= w[1]));
    // same multiset: a sorted permutation equals the std-sorted input.
    assert_eq!(r, std_sorted(&s));
}

#[test]
fn serial_parallel_parity() {
    for n in [0usize, 1, 2, 3, 10, 97, 1000] {
        let s = rand_seq(n as u64, n, 20);
        let serial = merge_sort(&s);
        assert_eq!(serial, std_sorted(&s));
        for w in [1usize, 2, 3, 4, 7, 16] {
            assert_eq!(par_merge_sort(&s, w).unwrap(), serial, "n={n} w={w}");
        }
    }
}

#[test]
fn parity_with_heavy_duplicates() {
    // few distinct values force ties across chunk boundaries.
    let s = rand_seq(7, 500, 2);
    let serial = merge_sort(&s);
    for w in 1..=9 {
        assert_eq!(par_merge_sort(&s, w).unwrap(), serial, "w={w}");
    }
}

#[test]
fn zero_workers_rejected() {
    assert_eq!(
        par_merge_sort(&[1, 2, 3], 0),
        Err(ParError::InvalidWorkerCount(0))
    );
}

// an Ord implementation that panics on a sentinel value, to make a chunk
// task fail mid-sort.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Tripwire(i32);

impl PartialOrd for Tripwire {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tripwire {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.0 == i32::MIN || other.0 == i32::MIN {
            panic!("comparison tripped");
        }
        self.0.cmp(&other.0)
    }
}

#[test]
fn failed_worker_surfaces_as_single_error() {
    // w = 2: the first chunk sorts cleanly, the second panics while merging
    // its halves. The whole call must report one aggregate failure and no
    // partial result.
    let inp = [
        Tripwire(3),
        Tripwire(1),
        Tripwire(i32::MIN),
        Tripwire(2),
    ];
    assert_eq!(par_merge_sort(&inp, 2), Err(ParError::WorkerFailed));
}
