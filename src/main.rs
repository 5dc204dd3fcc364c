//! Headless simulator (default binary).
//!
//! Plays one seeded game with a first-fit greedy strategy, prints the final
//! board and a JSON summary on stdout. Logs go to stderr, filtered by
//! `BLOCKGRID_LOG` (`error`..`trace`, default `warn`).
//!
//! Usage: `blockgrid-sim [seed] [max_turns]`

use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::prelude::*;

use blockgrid::core::placement::first_fit;
use blockgrid::core::{Inventory, SimpleRng};
use blockgrid::engine::{GameSession, RulesConfig, RulesEngine};
use blockgrid::types::ItemKind;

const DEFAULT_SEED: u32 = 1;
const DEFAULT_MAX_TURNS: u32 = 100;

#[derive(Debug, Serialize)]
struct Summary {
    seed: u32,
    turns: u32,
    placements: u32,
    lines_cleared: usize,
    bombs_used: u32,
    score: u32,
    game_over: bool,
    inventory: Inventory,
}

fn parse_arg<T: FromStr>(value: Option<String>, name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid {name}: {raw:?}")),
        None => Ok(default),
    }
}

fn init_logging() {
    let level = std::env::var("BLOCKGRID_LOG")
        .ok()
        .and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", DEFAULT_SEED)?;
    let max_turns = parse_arg(args.next(), "max_turns", DEFAULT_MAX_TURNS)?;

    let config = RulesConfig::from_env();
    let engine = RulesEngine::new(config, SimpleRng::new(seed)).context("engine setup")?;
    let mut session = GameSession::new(engine).context("first deal")?;

    let summary = play(&mut session, seed, max_turns)?;

    for line in session.grid().to_pattern() {
        println!("{line}");
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Place the first piece that fits anywhere; detonate a bomb in the middle of
/// the board when nothing fits.
fn play(session: &mut GameSession, seed: u32, max_turns: u32) -> Result<Summary> {
    let mut turns = 1;
    let mut placements = 0;
    let mut lines_cleared = 0;
    let mut bombs_used = 0;

    while turns <= max_turns {
        if session.is_game_over() {
            if !session.inventory().has_item(ItemKind::Bomb.as_str()) {
                break;
            }
            let center = (session.grid().size() / 2) as i32;
            session.use_bomb(center, center)?;
            bombs_used += 1;
            continue;
        }

        let grid = session.grid();
        let Some((index, (row, col))) = session
            .pieces()
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_placed())
            .find_map(|(i, piece)| first_fit(&piece.shape, grid).map(|origin| (i, origin)))
        else {
            break;
        };

        let outcome = session.place(index, row, col)?;
        placements += 1;
        lines_cleared += outcome.lines.lines();
        if outcome.refilled {
            turns += 1;
        }
    }

    Ok(Summary {
        seed,
        turns: turns.min(max_turns),
        placements,
        lines_cleared,
        bombs_used,
        score: session.score(),
        game_over: session.is_game_over(),
        inventory: session.inventory().clone(),
    })
}
