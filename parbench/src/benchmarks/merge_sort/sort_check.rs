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

use clap::Parser;

use io::read_file_to_vec;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the original (unsorted) input filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// sort results filename
    #[clap(value_parser, required=true)]
    rfname: String,
}

pub fn check(inp: &[i32], r: &[i32]) -> Result<(), String> {
    if inp.len() != r.len() {
        return Err(format!(
            "length mismatch: input has {} elements, result has {}",
            inp.len(),
            r.len()
        ));
    }

    let mut violation_no = 0usize;
    for i in 1..r.len() {
        if r[i - 1] > r[i] { violation_no += 1; }
    }
    if violation_no != 0 {
        return Err(format!("{violation_no} order violations"));
    }

    let mut expected = inp.to_vec();
    expected.sort();
    if expected != r {
        return Err("result is not a permutation of the input".to_string());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let inp: Vec<i32> = read_file_to_vec(
        &args.ifname,
        Some(|w: &[&str]| { debug_assert_eq!(w[0], "sequenceInt") })
    );
    let r: Vec<i32> = read_file_to_vec(&args.rfname, None::<fn(&[&str])>);

    check(&inp, &r).unwrap();
    println!("sort check passed");
}
