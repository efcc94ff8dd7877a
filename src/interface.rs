// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The capabilities the game loop needs from whatever is presenting the game.
use std::io;

use crate::board::Board;
use crate::error::InputError;
use crate::types::Square;

/// Something that can show the board. Squares are shaded by
/// `Square::is_light`.
pub trait RenderSurface {
    /// Draws the 64 empty squares. Called once when the game starts.
    fn draw_board(&mut self) -> io::Result<()>;

    /// Redraws every piece, discarding whatever was drawn before.
    fn draw_pieces(&mut self, board: &Board) -> io::Result<()>;
}

/// Source of clicked squares. Blocks until the player picks one.
pub trait InputSource {
    fn next_selected_square(&mut self) -> Result<Square, InputError>;
}

/// Asks the player which piece a pawn should become. The answer is matched
/// against "queen", "knight", "rook" and "bishop"; anything else keeps the
/// pawn.
pub trait PromotionPrompt {
    fn ask_promotion_choice(&mut self) -> String;
}

/// A presentation layer that provides all three capabilities.
pub trait Frontend: RenderSurface + InputSource + PromotionPrompt {}

impl<T> Frontend for T where T: RenderSurface + InputSource + PromotionPrompt {}

/// A prompt that always gives the same answer.
pub struct FixedPrompt(pub String);

impl PromotionPrompt for FixedPrompt {
    fn ask_promotion_choice(&mut self) -> String {
        self.0.clone()
    }
}
