// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::io;

use thiserror::Error;

/// Coordinates that do not name a square on the 8x8 board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("square ({row}, {col}) is off the board")]
pub struct BoundsError {
    pub row: i32,
    pub col: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("unrecognized square: {0:?}")]
    Malformed(String),
    #[error(transparent)]
    OutOfBounds(#[from] BoundsError),
}

/// Possible errors that can arise when parsing a piece placement string into a
/// `Board`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("unexpected character {0:?} in placement")]
    UnexpectedChar(char),
    #[error("invalid digit in placement")]
    InvalidDigit,
    #[error("rank does not sum to eight files")]
    FileDoesNotSumToEight,
    #[error("placement does not have eight ranks")]
    WrongRankCount,
}

/// Failure to produce the next selected square.
#[derive(Debug, Error)]
pub enum InputError {
    /// The player closed the session. This ends the game and is not a fault.
    #[error("input session closed")]
    Closed,
    #[error("input source failed: {0}")]
    Io(#[from] io::Error),
}

/// Faults that stop the game loop. A closed input session is not one of them.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("input source failed: {0}")]
    Input(#[source] io::Error),
    #[error("render surface failed: {0}")]
    Render(#[from] io::Error),
}
