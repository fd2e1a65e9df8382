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

/// calculates a hash of u based on numerical recipes.
#[inline(always)]
pub fn hash64(u: u64) -> u64 {
    let mut v = u.overflowing_mul(3_935_559_000_370_003_845).0;
    v = v.overflowing_add(2_691_343_689_449_507_681).0;
    v ^= v >> 21;
    v ^= v << 37;
    v ^= v >> 4;
    v = v.overflowing_mul(4_768_777_513_237_032_717).0;
    v ^= v << 20;
    v ^= v >> 41;
    v ^= v << 5;
    v
}

/// A splittable deterministic random number generator. Benchmark inputs and
/// test data come from here so every run sees the same sequences.
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn fork(&self, i: u64) -> Self {
        Self::new(hash64(hash64(i.wrapping_add(self.state))))
    }

    pub fn ith_rand(&self, i: u64) -> u64 {
        hash64(i.wrapping_add(self.state))
    }
}

/// deterministic sequence of `n` signed integers in `[-bound, bound]`.
pub fn rand_seq(seed: u64, n: usize, bound: i32) -> Vec<i32> {
    debug_assert!(bound >= 0);
    let r = Random::new(seed);
    let span = 2 * bound as u64 + 1;
    (0..n)
        .map(|i| ((r.ith_rand(i as u64) % span) as i64 - bound as i64) as i32)
        .collect()
}

/// deterministic `rows x cols` matrix with entries in `[1, 10]`, the range
/// the matrix benchmark draws from.
pub fn rand_matrix(seed: u64, rows: usize, cols: usize) -> Vec<Vec<i64>> {
    let r = Random::new(seed);
    (0..rows)
        .map(|i| {
            let row = r.fork(i as u64);
            (0..cols)
                .map(|j| (row.ith_rand(j as u64) % 10 + 1) as i64)
                .collect()
        })
        .collect()
}
