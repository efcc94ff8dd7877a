// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod board;
pub mod check;
pub mod checkmate;
mod error;
mod game;
pub mod interface;
pub mod moves;
mod perft;
pub mod rules;
pub mod terminal;
mod types;
pub mod validator;

pub use board::Board;
pub use error::{BoundsError, EngineError, InputError, LayoutError, SquareParseError};
pub use game::{GameEngine, GameOver, GameState, GameStatus, MoveOutcome, MoveRecord, Phase, Score};
pub use perft::perft;
pub use rules::CastleSide;
pub use types::{Color, Piece, PieceKind, Square, TableIndex, COLORS};
pub use validator::MoveVec;
