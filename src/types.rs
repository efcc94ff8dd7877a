// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::error::{BoundsError, SquareParseError};

// TableIndex is a trait for all types that can serve as an index into a table.
// It is common to use these types as indices into tables, so this trait allows
// any type implementing To and FromPrimitive to be used as table indices.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

/// A square on the board, addressed by row and column. Row 0 is White's back
/// rank and column 0 is the a-file. A `Square` is always on the board; the
/// fallible constructors are the only way to build one from raw coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> Result<Square, BoundsError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(BoundsError { row, col })
        }
    }

    /// Converts pointer coordinates on a surface made of `square_size` wide
    /// squares into the square under the pointer.
    pub fn from_pointer(x: f64, y: f64, square_size: f64) -> Result<Square, BoundsError> {
        let col = (x / square_size).floor();
        let row = (y / square_size).floor();
        if !col.is_finite() || !row.is_finite() {
            return Err(BoundsError { row: -1, col: -1 });
        }

        Square::new(row as i32, col as i32)
    }

    pub fn row(self) -> i32 {
        i32::from(self.row)
    }

    pub fn col(self) -> i32 {
        i32::from(self.col)
    }

    pub fn offset(self, rows: i32, cols: i32) -> Option<Square> {
        Square::new(self.row() + rows, self.col() + cols).ok()
    }

    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// All 64 squares, row by row starting from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|idx| Square {
            row: idx / 8,
            col: idx % 8,
        })
    }

    pub(crate) fn grid_index(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'a' + self.col) as char)?;
        f.write_char((b'1' + self.row) as char)
    }
}

// Squares are accepted either in algebraic form ("e2") or as a "row,col"
// pair ("1,4").
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Square, SquareParseError> {
        let s = s.trim();
        if let Some(idx) = s.find(',') {
            let row = s[..idx]
                .trim()
                .parse::<i32>()
                .map_err(|_| SquareParseError::Malformed(s.to_owned()))?;
            let col = s[idx + 1..]
                .trim()
                .parse::<i32>()
                .map_err(|_| SquareParseError::Malformed(s.to_owned()))?;
            return Ok(Square::new(row, col)?);
        }

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareParseError::Malformed(s.to_owned()));
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareParseError::Malformed(s.to_owned()));
        }

        Ok(Square::new(i32::from(rank - b'1'), i32::from(file - b'a'))?)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction in which this color's pawns advance.
    pub fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row this color's pawns start on and may double-step from.
    pub fn pawn_row(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn back_row(self) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row on which this color's pawns promote.
    pub fn promotion_row(self) -> i32 {
        self.toggle().back_row()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Color, ()> {
        match s {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(()),
        }
    }
}

pub static COLORS: [Color; 2] = [Color::White, Color::Black];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Interprets the answer to a promotion prompt. Only the exact names of the
    /// four promotion targets are accepted; anything else means "stay a pawn".
    pub fn from_promotion_choice(choice: &str) -> Option<PieceKind> {
        match choice.trim() {
            "queen" => Some(PieceKind::Queen),
            "knight" => Some(PieceKind::Knight),
            "rook" => Some(PieceKind::Rook),
            "bishop" => Some(PieceKind::Bishop),
            _ => None,
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single piece on the board. The `square` of a piece always matches the
/// cell of the `Board` that stores it; only the board moves pieces around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    pub(crate) fn set_moved(&mut self, has_moved: bool) {
        self.has_moved = has_moved;
    }

    pub(crate) fn set_kind(&mut self, kind: PieceKind) {
        self.kind = kind;
    }

    /// Placement symbol: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        let chr = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.color {
            Color::White => chr.to_ascii_uppercase(),
            Color::Black => chr,
        }
    }

    pub fn from_symbol(c: char, square: Square) -> Option<Piece> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Some(Piece::new(kind, color, square))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.square)
    }
}
