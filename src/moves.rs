// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::rules::{self, CastleSide};
use crate::types::{Piece, PieceKind, Square};

/// What executing a move did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveEffect {
    Quiet,
    Capture(Piece),
    Castle(CastleSide),
}

/// Carries out a move that is already known to be legal.
///
/// Castles are encoded as the king moving onto its own rook; they become two
/// relocations, king first. Anything else is a single relocation, capturing
/// whatever stood on the destination.
pub fn execute(board: &mut Board, from: Square, to: Square) -> MoveEffect {
    let mover = *board
        .get(from)
        .expect("invalid move: no piece at source square");

    if let Some(side) = rules::castle_side(board, &mover, to) {
        board.relocate(from, side.king_destination(from));
        board.relocate(to, side.rook_destination(from));
        return MoveEffect::Castle(side);
    }

    match board.relocate(from, to) {
        Some(captured) => MoveEffect::Capture(captured),
        None => MoveEffect::Quiet,
    }
}

/// Whether the piece on `square` is a pawn standing on its promotion row.
pub fn awaits_promotion(board: &Board, square: Square) -> bool {
    match board.get(square) {
        Some(piece) => {
            piece.kind() == PieceKind::Pawn && square.row() == piece.color().promotion_row()
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn long_castle() {
        let mut board = Board::from_placement("8/8/8/8/8/8/8/R3K3").unwrap();
        let effect = execute(&mut board, sq(0, 4), sq(0, 0));
        assert_eq!(MoveEffect::Castle(CastleSide::Long), effect);
        assert!(board.get(sq(0, 2)).unwrap().is(PieceKind::King, Color::White));
        assert!(board.get(sq(0, 3)).unwrap().is(PieceKind::Rook, Color::White));
        assert!(board.is_empty(sq(0, 0)));
        assert!(board.is_empty(sq(0, 4)));
    }

    #[test]
    fn capture_reports_victim() {
        let mut board = Board::from_placement("8/8/8/8/8/8/3n4/4K3").unwrap();
        match execute(&mut board, sq(0, 4), sq(1, 3)) {
            MoveEffect::Capture(victim) => {
                assert!(victim.is(PieceKind::Knight, Color::Black));
            }
            other => panic!("expected a capture, got {:?}", other),
        }
    }

    #[test]
    fn promotion_rows() {
        let board = Board::from_placement("3P4/8/8/8/8/8/8/2p1p3").unwrap();
        assert!(awaits_promotion(&board, sq(7, 3)));
        assert!(awaits_promotion(&board, sq(0, 2)));
        assert!(awaits_promotion(&board, sq(0, 4)));
        assert!(!awaits_promotion(&board, sq(0, 0)));
    }
}
