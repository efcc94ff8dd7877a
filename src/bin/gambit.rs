// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io;
use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgMatches, SubCommand};

use gambit::terminal::Terminal;
use gambit::{check, perft, validator, Board, Color, GameEngine, GameOver};

fn main() {
    env_logger::init();
    let placement_arg = Arg::with_name("PLACEMENT")
        .help("Piece placement field of a FEN string")
        .required(true)
        .index(1);
    let side_arg = Arg::with_name("side")
        .help("Side to move")
        .value_name("SIDE")
        .short("-s")
        .long("--side")
        .possible_values(&["white", "black"])
        .default_value("white")
        .takes_value(true);

    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand(
            SubCommand::with_name("play")
                .about("Play a game on the terminal")
                .arg(
                    Arg::with_name("record")
                        .help("Write the move history to this file as JSON")
                        .value_name("FILE")
                        .short("-r")
                        .long("--record")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("moves")
                .about("List the legal moves in a position")
                .arg(placement_arg.clone())
                .arg(side_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("perft")
                .about("PERFT analysis of board positions")
                .arg(placement_arg)
                .arg(side_arg)
                .arg(
                    Arg::with_name("depth")
                        .help("Depth of move tree to search")
                        .value_name("DEPTH")
                        .short("-d")
                        .long("--depth")
                        .default_value("3")
                        .takes_value(true),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        ("moves", Some(matches)) => run_moves(matches),
        ("perft", Some(matches)) => run_perft(matches),
        ("play", Some(matches)) => run_play(matches.value_of("record")),
        _ => run_play(None),
    }
}

fn load_position(matches: &ArgMatches) -> (Board, Color) {
    let placement = matches.value_of("PLACEMENT").unwrap();
    let side = matches
        .value_of("side")
        .and_then(|side| side.parse::<Color>().ok())
        .unwrap_or(Color::White);
    match Board::from_placement(placement) {
        Ok(board) => (board, side),
        Err(err) => {
            println!("invalid placement: {}", err);
            process::exit(1);
        }
    }
}

fn run_moves(matches: &ArgMatches) -> ! {
    let (mut board, side) = load_position(matches);
    println!("{}", board);
    let moves = validator::legal_moves(&mut board, side);
    for (from, to) in moves.iter() {
        println!("{}{}", from, to);
    }

    println!("{} legal moves for {}", moves.len(), side);
    if let Some(king) = board.find_king(side) {
        for square in check::attackers(&board, side.toggle(), king) {
            println!("{} king attacked from {}", side, square);
        }
    }
    process::exit(0);
}

fn run_perft(matches: &ArgMatches) -> ! {
    let (board, side) = load_position(matches);
    let depth = value_t_or_exit!(matches, "depth", u32);

    println!("depth: {}", depth);
    println!();
    println!("{}", board);
    for i in 1..depth + 1 {
        let start = Instant::now();
        let results = perft(&board, side, i);
        let duration = Instant::now() - start;
        println!("perft({}) = {} ({} ms)", i, results, duration.as_millis());
    }

    process::exit(0);
}

fn run_play(record: Option<&str>) -> ! {
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    let mut engine = GameEngine::new();
    let result = engine.run(&mut terminal);

    let code = match result {
        Ok(GameOver::Checkmate(color)) => {
            println!();
            println!("{}", engine.board());
            println!("{} is checkmated, {} wins", color, color.toggle());
            println!("score: {}", engine.state().score());
            0
        }
        Ok(GameOver::Cancelled) => {
            println!();
            println!("game abandoned");
            println!("score: {}", engine.state().score());
            0
        }
        Err(err) => {
            eprintln!("error: {}", err);
            1
        }
    };

    if let Some(path) = record {
        let written = File::create(path)
            .map_err(serde_json::Error::io)
            .and_then(|file| serde_json::to_writer_pretty(file, engine.history()));
        if let Err(err) = written {
            eprintln!("failed to write {}: {}", path, err);
            process::exit(1);
        }
    }

    process::exit(code);
}
