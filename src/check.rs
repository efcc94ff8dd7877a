// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::rules;
use crate::types::{Color, Square};

/// Whether `color`'s king is attacked. A color without a king is never in
/// check.
///
/// Attacks are judged by movement pattern only. Asking the validator here would
/// recurse back into check detection through its speculative moves.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_attacked_by(board, color.toggle(), king),
        None => false,
    }
}

/// Whether any piece of `attacker` could move onto `target` by pattern.
pub fn is_attacked_by(board: &Board, attacker: Color, target: Square) -> bool {
    board
        .pieces(attacker)
        .any(|piece| rules::is_raw_legal(board, piece, target))
}

/// Squares of the `attacker` pieces that reach `target`.
pub fn attackers(board: &Board, attacker: Color, target: Square) -> Vec<Square> {
    board
        .pieces(attacker)
        .filter(|piece| rules::is_raw_legal(board, piece, target))
        .map(|piece| piece.square())
        .collect()
}
