// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt::{self, Write};

use crate::error::{BoundsError, LayoutError};
use crate::types::{Color, Piece, PieceKind, Square, COLORS};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid. Each on-board piece lives in exactly one cell, and the
/// square recorded on the piece is always the cell it lives in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

//
// Board state getters
//

impl Board {
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// The standard starting layout: White on rows 0 and 1, Black on rows 6
    /// and 7.
    pub fn starting() -> Board {
        let mut board = Board::empty();
        for &color in COLORS.iter() {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                let back = Square::new(color.back_row(), col as i32)
                    .expect("starting layout is on the board");
                let pawn = Square::new(color.pawn_row(), col as i32)
                    .expect("starting layout is on the board");
                board.place(Piece::new(kind, color, back));
                board.place(Piece::new(PieceKind::Pawn, color, pawn));
            }
        }

        board
    }

    pub fn get(&self, square: Square) -> Option<&Piece> {
        let (row, col) = square.grid_index();
        self.grid[row][col].as_ref()
    }

    /// Looks up a square by raw coordinates, rejecting anything off the board.
    pub fn piece_at(&self, row: i32, col: i32) -> Result<Option<&Piece>, BoundsError> {
        Ok(self.get(Square::new(row, col)?))
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Every piece on the board, row by row starting from row 0.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flat_map(|row| row.iter()).flatten()
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.all_pieces().filter(move |p| p.color() == color)
    }

    /// Square of `color`'s king. Nothing guarantees a single king per color;
    /// if there are several, the first one in row-major order wins.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|p| p.kind() == PieceKind::King)
            .map(|p| p.square())
    }
}

//
// Board manipulation
//

impl Board {
    /// Puts a piece on the square it names, returning whatever was there.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        let (row, col) = piece.square().grid_index();
        self.grid[row][col].replace(piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = square.grid_index();
        self.grid[row][col].take()
    }

    /// Unconditionally moves the piece on `from` to `to`, marking it as moved.
    /// Anything standing on `to` is overwritten and handed back to the caller.
    /// No legality checking happens here.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self
            .remove(from)
            .expect("invalid relocation: no piece at source square");
        piece.set_square(to);
        piece.set_moved(true);
        self.place(piece)
    }

    /// Changes the kind of the piece on `square`, leaving its color, square
    /// and moved flag alone.
    pub fn promote(&mut self, square: Square, kind: PieceKind) {
        let (row, col) = square.grid_index();
        let piece = self.grid[row][col]
            .as_mut()
            .expect("invalid promotion: no piece at square");
        piece.set_kind(kind);
    }

    pub(crate) fn set_moved(&mut self, square: Square, has_moved: bool) {
        let (row, col) = square.grid_index();
        if let Some(piece) = self.grid[row][col].as_mut() {
            piece.set_moved(has_moved);
        }
    }
}

//
// Placement strings
//

impl Board {
    /// Parses the piece placement field of a FEN string, rank 8 first. Pawns
    /// standing off their starting row are flagged as moved; every other piece
    /// starts unmoved.
    pub fn from_placement<S: AsRef<str>>(placement: S) -> Result<Board, LayoutError> {
        let mut board = Board::empty();
        let placement = placement.as_ref().trim();
        let placement = placement.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount);
        }

        for (idx, rank) in ranks.iter().enumerate() {
            let row = 7 - idx as i32;
            let mut col = 0;
            for c in rank.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if digit == 0 || digit > 8 {
                        return Err(LayoutError::InvalidDigit);
                    }

                    col += digit as i32;
                    if col > 8 {
                        return Err(LayoutError::FileDoesNotSumToEight);
                    }
                    continue;
                }

                let square =
                    Square::new(row, col).map_err(|_| LayoutError::FileDoesNotSumToEight)?;
                let mut piece =
                    Piece::from_symbol(c, square).ok_or(LayoutError::UnexpectedChar(c))?;
                if piece.kind() == PieceKind::Pawn && row != piece.color().pawn_row() {
                    piece.set_moved(true);
                }

                board.place(piece);
                col += 1;
            }

            if col != 8 {
                return Err(LayoutError::FileDoesNotSumToEight);
            }
        }

        Ok(board)
    }

    pub fn as_placement(&self) -> String {
        let mut buf = String::new();
        for row in (0..8).rev() {
            let mut empty = 0;
            for col in 0..8 {
                match self.grid[row][col] {
                    Some(piece) => {
                        if empty != 0 {
                            buf.push_str(&empty.to_string());
                            empty = 0;
                        }
                        buf.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }

            if empty != 0 {
                buf.push_str(&empty.to_string());
            }

            if row != 0 {
                buf.push('/');
            }
        }

        buf
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.iter().rev() {
            for cell in row.iter() {
                match cell {
                    Some(piece) => f.write_char(piece.symbol())?,
                    None => f.write_char('.')?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
