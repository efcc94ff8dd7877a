// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use criterion::black_box;
use criterion::Criterion;
use gambit::{checkmate, perft, validator, Board, Color, Square};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("board clone", |b| {
        let board = Board::starting();
        b.iter(|| black_box(&board).clone())
    });

    c.bench_function("legal moves start", |b| {
        let mut board = Board::starting();
        b.iter(|| validator::legal_moves(black_box(&mut board), Color::White));
    });

    c.bench_function("queen legality d4 middlegame", |b| {
        let mut board =
            Board::from_placement("r1bqk2r/pppp1ppp/2n2n2/4p3/1bBQP3/2N2N2/PPP2PPP/R1B1K2R")
                .unwrap();
        let from = Square::new(3, 3).unwrap();
        b.iter(|| validator::legal_destinations(black_box(&mut board), from));
    });

    c.bench_function("checkmate back rank", |b| {
        let mut board = Board::from_placement("3R2k1/5ppp/8/8/8/8/8/6K1").unwrap();
        b.iter(|| checkmate::is_checkmate(black_box(&mut board), Color::Black));
    });

    c.bench_function("perft start depth 2", |b| {
        let board = Board::starting();
        b.iter(|| perft(black_box(&board), Color::White, 2));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
