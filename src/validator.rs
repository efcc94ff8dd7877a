// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Full move legality: a move must match its piece's pattern and must not leave
//! the mover's own king attacked.
//!
//! King safety is decided by actually making the move on the board, asking the
//! check detector, and taking the move back. Only the handful of facts the move
//! changes are recorded, so taking it back is cheap and exact.
use arrayvec::ArrayVec;

use crate::board::Board;
use crate::check;
use crate::rules;
use crate::types::{Color, Piece, Square};

/// Legal destinations of a single piece. No piece has more than 27.
pub type MoveVec = ArrayVec<[Square; 32]>;

// Everything a speculative relocation changes.
struct Undo {
    from: Square,
    to: Square,
    captured: Option<Piece>,
    had_moved: bool,
}

impl Undo {
    fn apply(board: &mut Board, mover: &Piece, to: Square) -> Undo {
        let from = mover.square();
        let had_moved = mover.has_moved();
        let captured = board.relocate(from, to);
        Undo {
            from,
            to,
            captured,
            had_moved,
        }
    }

    fn revert(self, board: &mut Board) {
        board.relocate(self.to, self.from);
        board.set_moved(self.from, self.had_moved);
        if let Some(captured) = self.captured {
            board.place(captured);
        }
    }
}

/// Whether the piece on `from` may legally move to `to`. Returns false if
/// there is no piece on `from`.
///
/// The board is left exactly as it was found, whatever the answer.
pub fn is_legal(board: &mut Board, from: Square, to: Square) -> bool {
    let mover = match board.get(from) {
        Some(piece) => *piece,
        None => return false,
    };

    if !rules::is_raw_legal(board, &mover, to) {
        return false;
    }

    let undo = Undo::apply(board, &mover, to);
    let exposed = check::is_in_check(board, mover.color());
    undo.revert(board);
    !exposed
}

/// All squares the piece on `from` may legally move to, row by row.
pub fn legal_destinations(board: &mut Board, from: Square) -> MoveVec {
    let mut moves = MoveVec::new();
    for to in Square::all() {
        if is_legal(board, from, to) {
            moves.push(to);
        }
    }

    moves
}

/// Every legal `(from, to)` pair for `color`.
pub fn legal_moves(board: &mut Board, color: Color) -> Vec<(Square, Square)> {
    let sources: Vec<Square> = board.pieces(color).map(|p| p.square()).collect();
    let mut moves = Vec::new();
    for from in sources {
        for to in legal_destinations(board, from) {
            moves.push((from, to));
        }
    }

    moves
}
