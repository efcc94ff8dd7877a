// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A line-oriented frontend: the board is printed as text and squares are
//! typed in, one per line.
use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::error::InputError;
use crate::interface::{InputSource, PromotionPrompt, RenderSurface};
use crate::types::Square;

pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Terminal<R, W> {
        Terminal { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    // None at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }
}

impl<R: BufRead, W: Write> RenderSurface for Terminal<R, W> {
    fn draw_board(&mut self) -> io::Result<()> {
        writeln!(self.writer, "squares are entered as e2 or row,col; quit to leave")
    }

    fn draw_pieces(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.writer)?;
        for row in (0..8).rev() {
            write!(self.writer, "{} ", row + 1)?;
            for col in 0..8 {
                let square = Square::new(row, col).expect("rendering stays on the board");
                let chr = match board.get(square) {
                    Some(piece) => piece.symbol(),
                    None if square.is_light() => '.',
                    None => ':',
                };
                write!(self.writer, " {}", chr)?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "   a b c d e f g h")?;
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> InputSource for Terminal<R, W> {
    fn next_selected_square(&mut self) -> Result<Square, InputError> {
        loop {
            write!(self.writer, "> ")?;
            self.writer.flush()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Err(InputError::Closed),
            };

            match line.as_str() {
                "" => continue,
                "quit" | "exit" => return Err(InputError::Closed),
                _ => {}
            }

            match line.parse::<Square>() {
                Ok(square) => return Ok(square),
                Err(err) => writeln!(self.writer, "{}", err)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> PromotionPrompt for Terminal<R, W> {
    fn ask_promotion_choice(&mut self) -> String {
        let asked = write!(
            self.writer,
            "What would you like to promote your pawn to? (queen, knight, rook, bishop) "
        )
        .and_then(|_| self.writer.flush());
        if let Err(err) = asked {
            warn!("failed to show promotion prompt: {}", err);
        }

        match self.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => String::new(),
            Err(err) => {
                warn!("failed to read promotion choice: {}", err);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_squares_and_skips_garbage() {
        let mut term = terminal("e2\nzz\n\n3,4\n");
        assert_eq!(
            Square::new(1, 4).unwrap(),
            term.next_selected_square().unwrap()
        );
        assert_eq!(
            Square::new(3, 4).unwrap(),
            term.next_selected_square().unwrap()
        );
        match term.next_selected_square() {
            Err(InputError::Closed) => {}
            other => panic!("expected a closed session, got {:?}", other),
        }

        let output = String::from_utf8(term.into_writer()).unwrap();
        assert!(output.contains("unrecognized square"));
    }

    #[test]
    fn quit_closes() {
        let mut term = terminal("quit\ne2\n");
        match term.next_selected_square() {
            Err(InputError::Closed) => {}
            other => panic!("expected a closed session, got {:?}", other),
        }
    }

    #[test]
    fn promotion_answer_is_trimmed_line() {
        let mut term = terminal("queen\n");
        assert_eq!("queen", term.ask_promotion_choice());
        assert_eq!("", term.ask_promotion_choice());
    }

    #[test]
    fn renders_start_position() {
        let mut term = terminal("");
        term.draw_pieces(&Board::starting()).unwrap();
        let output = String::from_utf8(term.into_writer()).unwrap();
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.contains("   a b c d e f g h"));
    }
}
