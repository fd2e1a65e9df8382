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

use parcore::matmul::{matmul, par_matmul};
use parcore::random::{rand_matrix, rand_seq};
use parcore::scan::{par_scan, scan};
use parcore::search::{par_search, search};
use parcore::ParError;

/* -------------------- search -------------------- */

#[test]
fn search_finds_last_occurrence() {
    assert_eq!(search(&[9, 1, 1, 9, 1], 1), Some(4));
    assert_eq!(search(&[9, 1, 1, 9, 1], 9), Some(3));
    assert_eq!(search(&[9, 1, 1, 9, 1], 5), None);
    assert_eq!(search(&[] as &[i32], 5), None);
}

#[test]
fn par_search_matches_serial() {
    let s = rand_seq(11, 500, 25);
    for &value in &[s[0], s[250], s[499], 26, -26] {
        let serial = search(&s, value);
        for w in 1..=9 {
            assert_eq!(par_search(&s, value, w).unwrap(), serial, "value={value} w={w}");
        }
    }
}

#[test]
fn par_search_with_more_workers_than_elements() {
    assert_eq!(par_search(&[7, 7, 7], 7, 10).unwrap(), Some(2));
    assert_eq!(par_search(&[] as &[i32], 1, 4).unwrap(), None);
}

#[test]
fn par_search_rejects_zero_workers() {
    assert_eq!(par_search(&[1], 1, 0), Err(ParError::InvalidWorkerCount(0)));
}

/* -------------------- matmul -------------------- */

#[test]
fn matmul_known_product() {
    let a = vec![vec![1i64, 2], vec![3, 4]];
    let b = vec![vec![5i64, 6], vec![7, 8]];
    let c = vec![vec![19i64, 22], vec![43, 50]];
    assert_eq!(matmul(&a, &b).unwrap(), c);
    assert_eq!(par_matmul(&a, &b, 2).unwrap(), c);
}

#[test]
fn matmul_identity() {
    let a = vec![vec![2i64, -3, 5]];
    let id = vec![
        vec![1i64, 0, 0],
        vec![0, 1, 0],
        vec![0, 0, 1],
    ];
    assert_eq!(matmul(&a, &id).unwrap(), a);
}

#[test]
fn par_matmul_matches_serial() {
    let a = rand_matrix(1, 17, 23);
    let b = rand_matrix(2, 23, 9);
    let serial = matmul(&a, &b).unwrap();
    for w in 1..=8 {
        assert_eq!(par_matmul(&a, &b, w).unwrap(), serial, "w={w}");
    }
}

#[test]
fn par_matmul_keeps_remainder_rows() {
    // 5 rows over 3 workers: ceil division gives blocks of 2, 2, 1.
    let a = rand_matrix(3, 5, 4);
    let b = rand_matrix(4, 4, 6);
    let r = par_matmul(&a, &b, 3).unwrap();
    assert_eq!(r.len(), 5);
    assert_eq!(r, matmul(&a, &b).unwrap());
}

#[test]
fn par_matmul_with_more_workers_than_rows() {
    let a = rand_matrix(5, 2, 3);
    let b = rand_matrix(6, 3, 2);
    assert_eq!(par_matmul(&a, &b, 16).unwrap(), matmul(&a, &b).unwrap());
}

#[test]
fn matmul_dimension_mismatch() {
    let a = vec![vec![1i64, 2]];
    let b = vec![vec![1i64, 2]];
    let expected = ParError::DimensionMismatch {
        left_rows: 1,
        left_cols: 2,
        right_rows: 1,
        right_cols: 2,
    };
    assert_eq!(matmul(&a, &b), Err(expected.clone()));
    assert_eq!(par_matmul(&a, &b, 2), Err(expected));
}

/* -------------------- scan -------------------- */

#[test]
fn scan_known_values() {
    assert_eq!(scan(&[1i64, 2, 3]), vec![1, 3, 6]);
    assert_eq!(scan(&[-1i64, 1, -1, 1]), vec![-1, 0, -1, 0]);
    assert_eq!(scan(&[] as &[i64]), Vec::<i64>::new());
}

#[test]
fn par_scan_matches_serial() {
    for n in [0usize, 1, 2, 10, 97, 1000] {
        let s: Vec<i64> = rand_seq(n as u64, n, 100).into_iter().map(i64::from).collect();
        let serial = scan(&s);
        for w in [1usize, 2, 3, 5, 8, 16] {
            assert_eq!(par_scan(&s, w).unwrap(), serial, "n={n} w={w}");
        }
    }
}

#[test]
fn par_scan_with_more_workers_than_elements() {
    assert_eq!(par_scan(&[5i64, 5], 6).unwrap(), vec![5, 10]);
}

#[test]
fn par_scan_rejects_zero_workers() {
    assert_eq!(par_scan(&[1i64], 0), Err(ParError::InvalidWorkerCount(0)));
}
