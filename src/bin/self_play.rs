//! Engine self-play runner.
//!
//! Usage:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --depth 3 --plies 60 --random-dark`
//!
//! Set `RUST_LOG=plum_rules=debug` to see per-move search logging.

use plum_rules::engines::engine_minimax::MinimaxEngine;
use plum_rules::engines::engine_random::RandomEngine;
use plum_rules::engines::engine_trait::{Engine, GoParams};
use plum_rules::errors::ChessResult;
use plum_rules::game_state::chess_types::{Color, GameState};
use plum_rules::move_generation::move_transition::MoveStatus;
use tracing_subscriber::EnvFilter;

fn parse_arg_u16(flag: &str, default: u16) -> u16 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u16>() {
                return v.max(1);
            }
        }
    }
    default
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let depth = u8::try_from(parse_arg_u16("--depth", 2)).unwrap_or(u8::MAX);
    let max_plies = parse_arg_u16("--plies", 40);
    let random_dark = std::env::args().any(|a| a == "--random-dark");

    let mut light: Box<dyn Engine> = Box::new(MinimaxEngine::new(depth));
    let mut dark: Box<dyn Engine> = if random_dark {
        Box::new(RandomEngine::new())
    } else {
        Box::new(MinimaxEngine::new(depth))
    };
    light.new_game();
    dark.new_game();

    let mut game = GameState::new_game();
    let params = GoParams::default();
    let mut stop = StopReason::PlyLimit(max_plies);

    for ply in 0..max_plies {
        let side = game.side_to_move();
        let engine = match side {
            Color::Light => light.as_mut(),
            Color::Dark => dark.as_mut(),
        };

        let output = engine.choose_move(&game, &params)?;
        for line in &output.info_lines {
            println!("{line}");
        }
        let Some(mv) = output.best_move else {
            stop = StopReason::NoMove;
            break;
        };

        let transition = game.current_player()?.make_move(&mv)?;
        if transition.status != MoveStatus::Done {
            println!("{} produced a rejected move {mv}", engine.name());
            stop = StopReason::Rejected(transition.status);
            break;
        }
        println!("{:>3}. {:?} {} {}", ply + 1, side, engine.name(), mv);
        game = transition.game_state;
    }

    println!("{game}");
    println!("{}", describe_end(&game, stop)?);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    NoMove,
    Rejected(MoveStatus),
    PlyLimit(u16),
}

fn describe_end(game: &GameState, stop: StopReason) -> ChessResult<String> {
    if let StopReason::Rejected(status) = stop {
        return Ok(format!("stopped on a rejected move ({status:?})"));
    }
    if game.is_checkmate()? {
        return Ok(format!("checkmate, {:?} wins", game.side_to_move().opposite()));
    }
    if game.is_stalemate()? {
        return Ok("stalemate".to_owned());
    }
    Ok(match stop {
        StopReason::PlyLimit(plies) => format!("stopped after {plies} plies"),
        _ => "stopped, engine returned no move".to_owned(),
    })
}
