/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Criterion benchmarks for rangeseq-rs.

use criterion::{Criterion, criterion_group, criterion_main};


fn run_benchmarks(c: &mut Criterion) {
    sequence_bench::register_benchmarks(c);
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
