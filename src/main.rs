//! Self-play driver.
//!
//! Plays complete games between two engine players and prints each final
//! position. Set `RUST_LOG=info` to see per-move search statistics.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N       Number of games to play (default: 1)
//!   --movetime MS   Time limit per AI move in ms (default: none)
//!   --depth N       Fixed search depth instead of the move-count schedule
//!   --random-black  Black plays uniformly random moves
//!   --seed N        Seed for the random player, 0 for entropy (default: 0)

use std::env;
use std::time::Instant;

use amazons_engine::agent::ai::MobilityEvaluator;
use amazons_engine::agent::{AiPlayer, GameResult, Player, RandomPlayer, SearchConfig, TwoPlayerGame};

struct Options {
    games: u32,
    config: SearchConfig,
    random_black: bool,
    seed: u64,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut opts = Options {
        games: 1,
        config: SearchConfig::default(),
        random_black: false,
        seed: 0,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                opts.games = parse_arg(&args, i, "--games");
            }
            "--movetime" => {
                i += 1;
                opts.config.time_limit_ms = Some(parse_arg(&args, i, "--movetime"));
            }
            "--depth" => {
                i += 1;
                opts.config.fixed_depth = Some(parse_arg(&args, i, "--depth"));
            }
            "--random-black" => {
                opts.random_black = true;
            }
            "--seed" => {
                i += 1;
                opts.seed = parse_arg(&args, i, "--seed");
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut white_wins = 0;
    for game in 0..opts.games {
        let start = Instant::now();
        let white = Box::new(AiPlayer::with_config(opts.config, MobilityEvaluator).with_name("AI White"));
        let black: Box<dyn Player> = if opts.random_black {
            let seed = opts.seed.wrapping_add(game as u64);
            Box::new(if opts.seed == 0 {
                RandomPlayer::new()
            } else {
                RandomPlayer::with_seed(seed)
            })
        } else {
            Box::new(AiPlayer::with_config(opts.config, MobilityEvaluator).with_name("AI Black"))
        };

        let mut session = TwoPlayerGame::new(white, black);
        let result = session.play_to_end();
        if result == GameResult::WhiteWins {
            white_wins += 1;
        }

        println!(
            "game {}: {:?} after {} moves in {:.1}s",
            game + 1,
            result,
            session.board().num_moves(),
            start.elapsed().as_secs_f64()
        );
        println!("{}", session.board());
    }

    println!("white won {}/{}", white_wins, opts.games);
}

fn parse_arg<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|s| s.parse()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("invalid or missing value for {}", flag);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [--games N] [--movetime MS] [--depth N] [--random-black] [--seed N]");
}
