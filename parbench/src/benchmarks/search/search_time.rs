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
use clap::Parser;
use io::read_file_to_vec;
use parcore::search::{par_search, search};

define_algs!(
    (SERIAL, "serial"),
    (PAR,    "par")
);

// The search benchmark reports an index, not a sequence, so it carries its
// own argument set without an output file.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the algorithm to use
    #[clap(short, long, value_parser, default_value_t = Algs::PAR)]
    algorithm: Algs,

    /// the number of workers (one chunk each) for the parallel path
    #[clap(short, long, value_parser, required=false, default_value_t=8)]
    workers: usize,

    /// the input filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// the number of rounds to execute the benchmark
    #[clap(short, long, value_parser, required=false, default_value_t=1)]
    rounds: usize,

    /// the value to search for
    #[clap(long, value_parser, required=false, default_value_t=0)]
    value: i32,

    /// verify the result against the serial search
    #[clap(long, value_parser, required=false, default_value_t=false)]
    check: bool,
}

pub fn run(
    alg: Algs,
    rounds: usize,
    workers: usize,
    value: i32,
    inp: &[i32],
) -> (Option<usize>, Duration) {
    let mut r: Option<usize> = None;

    let mean = time_loop(
        "search",
        rounds,
        Duration::new(1, 0),
        || {},
        || {
            r = match alg {
                Algs::SERIAL => search(inp, value),
                Algs::PAR => par_search(inp, value, workers)
                    .expect("parallel search failed"),
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

    let (r, d) = run(args.algorithm, args.rounds, args.workers, args.value, &arr);

    if args.check {
        assert_eq!(r, search(&arr, args.value), "result diverges from the serial search");
        println!("check passed");
    }

    println!("result:  {:?}", r);
    println!("mean:  {:?}", d);
}
