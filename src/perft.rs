// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rayon::prelude::*;

use crate::board::Board;
use crate::moves;
use crate::types::{Color, PieceKind};
use crate::validator;

/// Counts the leaves of the legal move tree `depth` plies deep, `side` moving
/// first. Moves are carried out exactly as the game does; pawns reaching the
/// last row always become queens.
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut scratch = board.clone();
    let legal = validator::legal_moves(&mut scratch, side);
    if depth == 1 {
        return legal.len() as u64;
    }

    legal
        .par_iter()
        .map(|&(from, to)| {
            let mut next = board.clone();
            moves::execute(&mut next, from, to);
            if moves::awaits_promotion(&next, to) {
                next.promote(to, PieceKind::Queen);
            }

            perft(&next, side.toggle(), depth - 1)
        })
        .sum()
}
