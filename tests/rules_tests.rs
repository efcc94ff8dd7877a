// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::collections::HashSet;

use gambit::rules::{self, CastleSide};
use gambit::{validator, Board, Square};

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

fn raw_destinations(placement: &str, from: Square) -> HashSet<Square> {
    let board = Board::from_placement(placement).unwrap();
    let piece = *board.get(from).unwrap();
    Square::all()
        .filter(|&to| rules::is_raw_legal(&board, &piece, to))
        .collect()
}

fn assert_destinations(placement: &str, from: Square, expected: &[Square]) {
    let generated = raw_destinations(placement, from);
    let expected: HashSet<_> = expected.iter().cloned().collect();
    if generated != expected {
        println!("generated: {:?}", generated);
        println!("expected:  {:?}", expected);
        panic!("destinations for {} differ", from);
    }
}

mod pawns {
    use super::*;

    #[test]
    fn white_pawn_smoke_test() {
        assert_destinations("8/8/8/8/5P2/8/8/8", sq(3, 5), &[sq(4, 5)]);
    }

    #[test]
    fn white_pawn_starting_rank() {
        assert_destinations("8/8/8/8/8/8/4P3/8", sq(1, 4), &[sq(2, 4), sq(3, 4)]);
    }

    #[test]
    fn black_pawn_starting_rank() {
        assert_destinations("8/4p3/8/8/8/8/8/8", sq(6, 4), &[sq(5, 4), sq(4, 4)]);
    }

    #[test]
    fn double_step_blocked_by_intermediate() {
        assert_destinations("8/8/8/8/8/4n3/4P3/8", sq(1, 4), &[]);
    }

    #[test]
    fn double_step_blocked_at_destination() {
        assert_destinations("8/8/8/8/4n3/8/4P3/8", sq(1, 4), &[sq(2, 4)]);
    }

    #[test]
    fn double_step_only_from_home_row() {
        assert_destinations("8/8/8/8/8/4P3/8/8", sq(2, 4), &[sq(3, 4)]);
    }

    #[test]
    fn captures_diagonally_forward_only() {
        assert_destinations(
            "8/8/8/3p1p2/4P3/3p1p2/8/8",
            sq(3, 4),
            &[sq(4, 3), sq(4, 4), sq(4, 5)],
        );
    }

    #[test]
    fn does_not_capture_own_color() {
        assert_destinations("8/8/8/3P1P2/4P3/8/8/8", sq(3, 4), &[sq(4, 4)]);
    }

    #[test]
    fn does_not_capture_forward() {
        assert_destinations("8/8/8/4p3/4P3/8/8/8", sq(3, 4), &[]);
    }

    #[test]
    fn no_en_passant() {
        // Black has just double-stepped next to the white pawn.
        assert_destinations("8/8/8/3pP3/8/8/8/8", sq(4, 4), &[sq(5, 4)]);
    }
}

mod sliders {
    use super::*;

    #[test]
    fn rook_stops_at_blockers() {
        assert_destinations(
            "8/8/8/8/1p1R2P1/8/8/8",
            sq(3, 3),
            &[
                sq(3, 1),
                sq(3, 2),
                sq(3, 4),
                sq(3, 5),
                sq(4, 3),
                sq(5, 3),
                sq(6, 3),
                sq(7, 3),
                sq(2, 3),
                sq(1, 3),
                sq(0, 3),
            ],
        );
    }

    #[test]
    fn bishop_stops_at_blockers() {
        assert_destinations(
            "8/8/8/2p5/3B4/8/1P6/8",
            sq(3, 3),
            &[
                sq(4, 2),
                sq(4, 4),
                sq(5, 5),
                sq(6, 6),
                sq(7, 7),
                sq(2, 2),
                sq(2, 4),
                sq(1, 5),
                sq(0, 6),
            ],
        );
    }

    #[test]
    fn queen_in_corner() {
        let moves = raw_destinations("8/8/8/8/8/8/1P6/Q1n5", sq(0, 0));
        assert_eq!(9, moves.len());
        assert!(moves.contains(&sq(0, 2)));
        assert!(moves.contains(&sq(7, 0)));
        assert!(!moves.contains(&sq(1, 1)));
        assert!(!moves.contains(&sq(0, 3)));
    }
}

mod kings {
    use super::*;

    #[test]
    fn king_steps() {
        assert_destinations(
            "8/8/8/8/8/8/3pP3/4K3",
            sq(0, 4),
            &[sq(0, 3), sq(0, 5), sq(1, 3), sq(1, 5)],
        );
    }

    #[test]
    fn short_castle_pattern() {
        let board = Board::from_placement("8/8/8/8/8/8/8/4K2R").unwrap();
        let king = *board.get(sq(0, 4)).unwrap();
        assert!(rules::is_raw_legal(&board, &king, sq(0, 7)));
        assert_eq!(
            Some(CastleSide::Short),
            rules::castle_side(&board, &king, sq(0, 7))
        );
    }

    #[test]
    fn long_castle_pattern() {
        let board = Board::from_placement("r3k3/8/8/8/8/8/8/8").unwrap();
        let king = *board.get(sq(7, 4)).unwrap();
        assert_eq!(
            Some(CastleSide::Long),
            rules::castle_side(&board, &king, sq(7, 0))
        );
    }

    #[test]
    fn long_castle_needs_three_empty_squares() {
        let board = Board::from_placement("8/8/8/8/8/8/8/RN2K3").unwrap();
        let king = *board.get(sq(0, 4)).unwrap();
        assert!(!rules::is_raw_legal(&board, &king, sq(0, 0)));
    }

    #[test]
    fn no_castle_after_king_moved() {
        let mut board = Board::from_placement("8/8/8/8/8/8/8/4K2R").unwrap();
        board.relocate(sq(0, 4), sq(1, 4));
        board.relocate(sq(1, 4), sq(0, 4));
        let king = *board.get(sq(0, 4)).unwrap();
        assert!(!rules::is_raw_legal(&board, &king, sq(0, 7)));
    }

    #[test]
    fn no_castle_after_rook_moved() {
        let mut board = Board::from_placement("8/8/8/8/8/8/8/4K2R").unwrap();
        board.relocate(sq(0, 7), sq(1, 7));
        board.relocate(sq(1, 7), sq(0, 7));
        let king = *board.get(sq(0, 4)).unwrap();
        assert!(!rules::is_raw_legal(&board, &king, sq(0, 7)));
    }

    #[test]
    fn castle_onto_king_destination_is_not_castling() {
        let board = Board::from_placement("8/8/8/8/8/8/8/4K2R").unwrap();
        let king = *board.get(sq(0, 4)).unwrap();
        assert!(!rules::is_raw_legal(&board, &king, sq(0, 6)));
    }
}

#[test]
fn initial_position_has_twenty_moves() {
    let mut board = Board::starting();
    let moves = validator::legal_moves(&mut board, gambit::Color::White);
    assert_eq!(20, moves.len());

    let pawn_moves = moves.iter().filter(|(from, _)| from.row() == 1).count();
    assert_eq!(16, pawn_moves);
    let knight_moves: HashSet<_> = moves
        .iter()
        .filter(|(from, _)| from.row() == 0)
        .cloned()
        .collect();
    let expected: HashSet<_> = vec![
        (sq(0, 1), sq(2, 0)),
        (sq(0, 1), sq(2, 2)),
        (sq(0, 6), sq(2, 5)),
        (sq(0, 6), sq(2, 7)),
    ]
    .into_iter()
    .collect();
    assert_eq!(expected, knight_moves);
}
