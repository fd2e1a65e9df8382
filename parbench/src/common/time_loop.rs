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

use std::time::Duration;

#[path = "get_time.rs"]
mod get_time;
use get_time::Timer;

/// runs `f` for `rounds` timed rounds after burning roughly `warmup` of
/// wall-clock time, reporting each round and returning the mean round time.
/// `init` runs untimed before every round and `post` untimed after it.
#[allow(dead_code)]
pub fn time_loop<I, F, P>(
    name: &str,
    rounds: usize,
    warmup: Duration,
    mut init: I,
    mut f: F,
    mut post: P,
) -> Duration
where
    I: FnMut(),
    F: FnMut(),
    P: FnMut(),
{
    let mut t = Timer::new(name);

    if !warmup.is_zero() {
        let mut spent = Duration::ZERO;
        while spent < warmup {
            init();
            t.start();
            f();
            spent += t.stop();
            post();
        }
    }

    t.reset();
    for _ in 0..rounds {
        init();
        t.start();
        f();
        let d = t.stop();
        t.report(d, "");
        post();
    }
    t.total_time() / rounds.max(1) as u32
}
