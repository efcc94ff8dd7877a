// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::board::Board;
use crate::checkmate;
use crate::error::{EngineError, InputError};
use crate::interface::{Frontend, InputSource, PromotionPrompt};
use crate::moves::{self, MoveEffect};
use crate::rules::CastleSide;
use crate::types::{Color, PieceKind, Square, TableIndex};
use crate::validator;

/// Captures per side. Every capture is worth one point, whatever was taken.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    points: [u32; 2],
}

impl Score {
    pub fn of(&self, color: Color) -> u32 {
        self.points[color.as_index()]
    }

    fn award(&mut self, color: Color) {
        self.points[color.as_index()] += 1;
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "white {} - black {}",
            self.of(Color::White),
            self.of(Color::Black)
        )
    }
}

/// Where the turn state machine currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection(Color),
    AwaitingDestination(Color, Square),
}

/// Whose turn it is, what they have picked up, and the score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    turn: Color,
    selected: Option<Square>,
    score: Score,
}

impl GameState {
    pub fn new(turn: Color) -> GameState {
        GameState {
            turn,
            selected: None,
            score: Score::default(),
        }
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> Phase {
        match self.selected {
            Some(square) => Phase::AwaitingDestination(self.turn, square),
            None => Phase::AwaitingSelection(self.turn),
        }
    }
}

/// Result of submitting a destination for the selected piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing was selected or the move was illegal. The selection is dropped
    /// and the same side moves again.
    Rejected,
    Castled(CastleSide),
    Moved {
        captured: Option<PieceKind>,
        promoted: Option<PieceKind>,
    },
}

impl MoveOutcome {
    pub fn is_success(&self) -> bool {
        *self != MoveOutcome::Rejected
    }
}

/// One completed move, as kept in the game's history.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    pub promotion: Option<PieceKind>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate(Color),
}

/// How a game loop ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOver {
    /// The given color is checkmated.
    Checkmate(Color),
    /// The input source closed before the game was decided.
    Cancelled,
}

pub struct GameEngine {
    board: Board,
    state: GameState,
    history: Vec<MoveRecord>,
}

impl GameEngine {
    pub fn new() -> GameEngine {
        GameEngine::from_board(Board::starting(), Color::White)
    }

    pub fn from_board(board: Board, turn: Color) -> GameEngine {
        GameEngine {
            board,
            state: GameState::new(turn),
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Picks up the piece on `square` if it belongs to the side to move.
    /// Anything else is ignored and leaves the state as it was.
    pub fn select(&mut self, square: Square) -> bool {
        match self.board.get(square) {
            Some(piece) if piece.color() == self.state.turn => {
                debug!("{} selects {}", self.state.turn, piece);
                self.state.selected = Some(square);
                true
            }
            _ => {
                debug!("{} cannot select {}", self.state.turn, square);
                false
            }
        }
    }

    /// Moves the selected piece to `to` if that is legal. Either way the
    /// selection is cleared; the turn only passes on success.
    pub fn submit_destination<P>(&mut self, to: Square, prompt: &mut P) -> MoveOutcome
    where
        P: PromotionPrompt + ?Sized,
    {
        let from = match self.state.selected.take() {
            Some(square) => square,
            None => return MoveOutcome::Rejected,
        };

        if !validator::is_legal(&mut self.board, from, to) {
            debug!("{} {} -> {} rejected", self.state.turn, from, to);
            return MoveOutcome::Rejected;
        }

        let mover = self.state.turn;
        let mut record = MoveRecord {
            color: mover,
            from,
            to,
            captured: None,
            castle: None,
            promotion: None,
        };

        let outcome = match moves::execute(&mut self.board, from, to) {
            MoveEffect::Castle(side) => {
                info!("{} castles {:?}", mover, side);
                record.castle = Some(side);
                MoveOutcome::Castled(side)
            }
            effect => {
                if let MoveEffect::Capture(victim) = effect {
                    info!("{} {} -> {} captures {}", mover, from, to, victim.kind());
                    self.state.score.award(mover);
                    record.captured = Some(victim.kind());
                } else {
                    info!("{} {} -> {}", mover, from, to);
                }

                if moves::awaits_promotion(&self.board, to) {
                    record.promotion = self.promote(to, prompt);
                }

                MoveOutcome::Moved {
                    captured: record.captured,
                    promoted: record.promotion,
                }
            }
        };

        self.history.push(record);
        self.state.turn = mover.toggle();
        outcome
    }

    /// Selects `from` and moves it to `to` in one go.
    pub fn play<P>(&mut self, from: Square, to: Square, prompt: &mut P) -> MoveOutcome
    where
        P: PromotionPrompt + ?Sized,
    {
        if !self.select(from) {
            return MoveOutcome::Rejected;
        }

        self.submit_destination(to, prompt)
    }

    fn promote<P>(&mut self, square: Square, prompt: &mut P) -> Option<PieceKind>
    where
        P: PromotionPrompt + ?Sized,
    {
        let choice = prompt.ask_promotion_choice();
        match PieceKind::from_promotion_choice(&choice) {
            Some(kind) => {
                info!("pawn on {} promotes to {}", square, kind);
                self.board.promote(square, kind);
                Some(kind)
            }
            None => {
                debug!("ignoring promotion choice {:?}", choice);
                None
            }
        }
    }

    /// White is looked at first, so a position where both sides are mated
    /// reports White.
    pub fn status(&mut self) -> GameStatus {
        if checkmate::is_checkmate(&mut self.board, Color::White) {
            GameStatus::Checkmate(Color::White)
        } else if checkmate::is_checkmate(&mut self.board, Color::Black) {
            GameStatus::Checkmate(Color::Black)
        } else {
            GameStatus::Ongoing
        }
    }

    /// Plays turns until one side is checkmated or the input closes.
    ///
    /// Each turn the pieces are redrawn and the player picks a piece, then a
    /// destination, until a move goes through. A pick that selects nothing, or
    /// a destination that is illegal, starts the pick over.
    pub fn run<F>(&mut self, frontend: &mut F) -> Result<GameOver, EngineError>
    where
        F: Frontend + ?Sized,
    {
        frontend.draw_board()?;
        loop {
            if let GameStatus::Checkmate(color) = self.status() {
                info!("{} is checkmated ({})", color, self.state.score);
                return Ok(GameOver::Checkmate(color));
            }

            frontend.draw_pieces(&self.board)?;
            loop {
                let from = match next_square(frontend)? {
                    Some(square) => square,
                    None => return Ok(GameOver::Cancelled),
                };

                if !self.select(from) {
                    continue;
                }

                let to = match next_square(frontend)? {
                    Some(square) => square,
                    None => return Ok(GameOver::Cancelled),
                };

                if self.submit_destination(to, frontend).is_success() {
                    break;
                }
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}

// Reads the next square, turning a closed session into `None`.
fn next_square<I>(input: &mut I) -> Result<Option<Square>, EngineError>
where
    I: InputSource + ?Sized,
{
    match input.next_selected_square() {
        Ok(square) => Ok(Some(square)),
        Err(InputError::Closed) => {
            info!("input closed, ending the session");
            Ok(None)
        }
        Err(InputError::Io(err)) => Err(EngineError::Input(err)),
    }
}
