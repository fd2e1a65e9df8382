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

#[path ="../macros.rs"] mod macros;

use std::time::Duration;
use clap::Parser;
use parcore::matmul::{matmul, par_matmul, Matrix};
use parcore::random::rand_matrix;

define_algs!(
    (SERIAL, "serial"),
    (PAR,    "par")
);

// The matrix benchmark generates its operands instead of reading a file, so
// it carries its own argument set.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the algorithm to use
    #[clap(short, long, value_parser, default_value_t = Algs::PAR)]
    algorithm: Algs,

    /// the number of workers (one row block each) for the parallel path
    #[clap(short, long, value_parser, required=false, default_value_t=8)]
    workers: usize,

    /// the number of rounds to execute the benchmark
    #[clap(short, long, value_parser, required=false, default_value_t=1)]
    rounds: usize,

    /// rows of the left operand
    #[clap(long, value_parser, required=false, default_value_t=200)]
    rows: usize,

    /// columns of the left operand and rows of the right operand
    #[clap(long, value_parser, required=false, default_value_t=400)]
    inner: usize,

    /// columns of the right operand
    #[clap(long, value_parser, required=false, default_value_t=100)]
    cols: usize,

    /// seed for the deterministic input matrices
    #[clap(long, value_parser, required=false, default_value_t=42)]
    seed: u64,

    /// verify the result against the serial multiply
    #[clap(long, value_parser, required=false, default_value_t=false)]
    check: bool,
}

pub fn run(
    alg: Algs,
    rounds: usize,
    workers: usize,
    a: &Matrix<i64>,
    b: &Matrix<i64>,
) -> (Matrix<i64>, Duration) {
    let mut r: Matrix<i64> = Vec::new();

    let mean = time_loop(
        "matmul",
        rounds,
        Duration::new(1, 0),
        || {},
        || {
            r = match alg {
                Algs::SERIAL => matmul(a, b)
                    .expect("matrix multiply failed"),
                Algs::PAR => par_matmul(a, b, workers)
                    .expect("parallel matrix multiply failed"),
            };
        },
        || {}
    );

    (r, mean)
}

fn main() {
    init!();

    let args = Args::parse();

    let a = rand_matrix(args.seed, args.rows, args.inner);
    let b = rand_matrix(args.seed + 1, args.inner, args.cols);

    let (r, d) = run(args.algorithm, args.rounds, args.workers, &a, &b);

    if args.check {
        let expected = matmul(&a, &b).expect("matrix multiply failed");
        assert_eq!(r, expected, "result diverges from the serial multiply");
        println!("check passed");
    }

    let checksum: i64 = r.iter().flatten().sum();
    println!("checksum:  {}", checksum);
    println!("mean:  {:?}", d);
}
