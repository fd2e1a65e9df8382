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

#![allow(dead_code)]

#[path ="../../common/io.rs"] mod io;
#[path ="../macros.rs"] mod macros;

use std::time::Duration;
use io::{read_file_to_vec, write_slice_to_file_seq};
use parcore::merge_sort::{merge_sort, par_merge_sort};

define_args!(
    Algs::PAR,
    (check, bool, false)
);

define_algs!(
    (SERIAL, "serial"),
    (PAR,    "par"),
    (STD,    "std")
);

pub fn run(
    alg: Algs,
    rounds: usize,
    workers: usize,
    inp: &[i32],
) -> (Vec<i32>, Duration) {
    let mut r: Vec<i32> = Vec::new();

    let mean = time_loop(
        "sort",
        rounds,
        Duration::new(1, 0),
        || {},
        || {
            r = match alg {
                Algs::SERIAL => merge_sort(inp),
                Algs::PAR => par_merge_sort(inp, workers)
                    .expect("parallel sort failed"),
                Algs::STD => {
                    let mut v = inp.to_vec();
                    v.sort();
                    v
                },
            };
        },
        || {}
    );

    (r, mean)
}

fn main() {
    init!();

    let args = Args::parse();

    let arr: Vec<i32> = read_file_to_vec(
        &args.ifname,
        Some(|w: &[&str]| { debug_assert_eq!(w[0], "sequenceInt") })
    );

    let (r, d) = run(args.algorithm, args.rounds, args.workers, &arr);

    if args.check {
        assert_eq!(r, merge_sort(&arr), "result diverges from the serial sort");
        println!("check passed");
    }

    finalize!(
        args,
        r,
        d,
        write_slice_to_file_seq(&r, &args.ofname)
    );
}
