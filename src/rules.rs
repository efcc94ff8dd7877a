// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Movement patterns for each kind of piece.
//!
//! Everything in this module answers the question "does this piece move like
//! that?": direction, distance, blocking pieces, and what may be standing on the
//! destination. None of it knows about king safety. That is layered on top by
//! the validator, and the check detector relies on this module staying free of
//! it.
use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The two ways to castle, named by the distance between king and rook.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    /// Rook three columns towards the h-file.
    Short,
    /// Rook four columns towards the a-file.
    Long,
}

impl CastleSide {
    fn direction(self) -> i32 {
        match self {
            CastleSide::Short => 1,
            CastleSide::Long => -1,
        }
    }

    fn rook_distance(self) -> i32 {
        match self {
            CastleSide::Short => 3,
            CastleSide::Long => 4,
        }
    }

    /// Where the king lands when castling from `king`.
    pub fn king_destination(self, king: Square) -> Square {
        king.offset(0, 2 * self.direction())
            .expect("castle pattern keeps the king on the board")
    }

    /// Where the rook lands when castling from `king`: next to the king's old
    /// square, between it and the king's new one.
    pub fn rook_destination(self, king: Square) -> Square {
        king.offset(0, self.direction())
            .expect("castle pattern keeps the rook on the board")
    }
}

/// Whether `piece` may move to `to` by its movement pattern alone.
pub fn is_raw_legal(board: &Board, piece: &Piece, to: Square) -> bool {
    if piece.square() == to {
        return false;
    }

    match piece.kind() {
        PieceKind::Pawn => pawn_move(board, piece, to),
        PieceKind::Knight => knight_move(board, piece, to),
        PieceKind::Bishop => bishop_move(board, piece, to),
        PieceKind::Rook => rook_move(board, piece, to),
        PieceKind::Queen => queen_move(board, piece, to),
        PieceKind::King => king_move(board, piece, to),
    }
}

/// If moving `king` to `to` is a castle, which one. A castle is requested by
/// moving an unmoved king onto an unmoved rook of its own color, three columns
/// to the right or four to the left, with every square in between empty.
pub fn castle_side(board: &Board, king: &Piece, to: Square) -> Option<CastleSide> {
    if king.kind() != PieceKind::King || king.has_moved() {
        return None;
    }

    let from = king.square();
    if from.row() != to.row() {
        return None;
    }

    let side = match to.col() - from.col() {
        3 => CastleSide::Short,
        -4 => CastleSide::Long,
        _ => return None,
    };

    for step in 1..side.rook_distance() {
        let between = from.offset(0, step * side.direction())?;
        if !board.is_empty(between) {
            return None;
        }
    }

    match board.get(to) {
        Some(rook) if rook.is(PieceKind::Rook, king.color()) && !rook.has_moved() => Some(side),
        _ => None,
    }
}

fn is_enemy(board: &Board, color: Color, square: Square) -> bool {
    board.get(square).map_or(false, |p| p.color() != color)
}

fn can_land(board: &Board, color: Color, square: Square) -> bool {
    board.get(square).map_or(true, |p| p.color() != color)
}

// Every square strictly between `from` and `to` is empty. The two squares must
// share a row, a column, or a diagonal.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row() - from.row()).signum();
    let dc = (to.col() - from.col()).signum();
    let mut cursor = from;
    loop {
        cursor = match cursor.offset(dr, dc) {
            Some(sq) => sq,
            None => return false,
        };

        if cursor == to {
            return true;
        }

        if !board.is_empty(cursor) {
            return false;
        }
    }
}

fn pawn_move(board: &Board, pawn: &Piece, to: Square) -> bool {
    let from = pawn.square();
    let forward = pawn.color().forward();
    let dr = to.row() - from.row();
    let dc = to.col() - from.col();

    if dc == 0 {
        if dr == forward {
            return board.is_empty(to);
        }

        if dr == 2 * forward && from.row() == pawn.color().pawn_row() {
            let skipped = from
                .offset(forward, 0)
                .expect("double step passes over an on-board square");
            return board.is_empty(skipped) && board.is_empty(to);
        }

        return false;
    }

    dr == forward && dc.abs() == 1 && is_enemy(board, pawn.color(), to)
}

fn knight_move(board: &Board, knight: &Piece, to: Square) -> bool {
    let from = knight.square();
    let delta = (to.row() - from.row(), to.col() - from.col());
    KNIGHT_OFFSETS.contains(&delta) && can_land(board, knight.color(), to)
}

fn bishop_move(board: &Board, bishop: &Piece, to: Square) -> bool {
    let from = bishop.square();
    let dr = to.row() - from.row();
    let dc = to.col() - from.col();
    if dr.abs() != dc.abs() || dr == 0 {
        return false;
    }

    can_land(board, bishop.color(), to) && path_is_clear(board, from, to)
}

fn rook_move(board: &Board, rook: &Piece, to: Square) -> bool {
    let from = rook.square();
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }

    can_land(board, rook.color(), to) && path_is_clear(board, from, to)
}

fn queen_move(board: &Board, queen: &Piece, to: Square) -> bool {
    rook_move(board, queen, to) || bishop_move(board, queen, to)
}

fn king_move(board: &Board, king: &Piece, to: Square) -> bool {
    let from = king.square();
    let dr = (to.row() - from.row()).abs();
    let dc = (to.col() - from.col()).abs();
    if dr <= 1 && dc <= 1 {
        return can_land(board, king.color(), to);
    }

    castle_side(board, king, to).is_some()
}
