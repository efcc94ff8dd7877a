// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::check;
use crate::types::{Color, Square};
use crate::validator;

/// Whether `color` is in check with no legal move to get out of it.
///
/// A side that is not in check is never mated here, even if it has no legal
/// move at all. Stalemate is not recognized.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    if !check::is_in_check(board, color) {
        return false;
    }

    !has_legal_move(board, color)
}

/// Whether any piece of `color` has at least one legal destination. Tries
/// every piece against every square and stops at the first legal move.
pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    let sources: Vec<Square> = board.pieces(color).map(|p| p.square()).collect();
    for from in sources {
        for to in Square::all() {
            if validator::is_legal(board, from, to) {
                return true;
            }
        }
    }

    false
}
