//! Gomoku engine console harness
//!
//! Runs a few fixed positions through the engine and reports whether the
//! moves and game states come out as expected. Set `RUST_LOG=debug` to see
//! the engine's own search logging.

use anyhow::{bail, Result};
use clap::Parser;
use gomoku::{Difficulty, GomokuEngine, Pos, AI_PLAYER, HUMAN_PLAYER};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gomoku", version, about = "Smoke-test the Gomoku engine")]
struct Cli {
    /// Difficulty level: 1 or less is easy, 5 or more is hard, otherwise medium
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    level: i32,

    /// Print the board after each scenario
    #[arg(long)]
    board: bool,
}

type Scenario = fn(&mut GomokuEngine) -> Result<bool>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let difficulty = Difficulty::from_level(cli.level);

    println!("===========================================");
    println!("       Gomoku Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("       difficulty: {} ({} plies)", difficulty, difficulty.depth());
    println!("===========================================\n");

    let scenarios: [(&str, Scenario); 4] = [
        ("Empty Board", empty_board),
        ("Complete Five", complete_five),
        ("Block Open Four", block_open_four),
        ("Undo After Win", undo_after_win),
    ];

    let mut failed = 0;
    for (name, run) in scenarios {
        println!("--- {name} ---");
        let mut engine = GomokuEngine::with_difficulty(difficulty);
        let passed = run(&mut engine)?;
        if cli.board {
            println!("{}", engine.board());
        }
        println!("  Result: {}\n", if passed { "PASS" } else { "FAIL" });
        if !passed {
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} scenario(s) failed");
    }
    println!("All scenarios passed");
    Ok(())
}

fn report(engine: &mut GomokuEngine, expected: &[Pos]) -> Option<Pos> {
    let result = engine.best_move_with_stats();
    let shown: Vec<String> = expected.iter().map(ToString::to_string).collect();
    match result.best_move {
        Some(m) => {
            println!("  AI plays: {m}");
            println!("  Expected: {}", shown.join(" or "));
            println!("  Score: {}  Nodes: {}  Time: {}ms", result.score, result.nodes, result.time_ms);
        }
        None => println!("  No move found"),
    }
    result.best_move
}

fn empty_board(engine: &mut GomokuEngine) -> Result<bool> {
    let center = Pos::center();
    Ok(report(engine, &[center]) == Some(center))
}

fn complete_five(engine: &mut GomokuEngine) -> Result<bool> {
    for col in 7..11 {
        engine.place(7, col, AI_PLAYER)?;
    }
    for (row, col) in [(9, 7), (9, 9), (10, 8)] {
        engine.place(row, col, HUMAN_PLAYER)?;
    }

    let ends = [Pos::new(7, 6), Pos::new(7, 11)];
    let Some(m) = report(engine, &ends) else {
        return Ok(false);
    };
    engine.place(m.row.into(), m.col.into(), AI_PLAYER)?;
    Ok(ends.contains(&m) && engine.winner() == Some(AI_PLAYER))
}

fn block_open_four(engine: &mut GomokuEngine) -> Result<bool> {
    for col in 5..9 {
        engine.place(7, col, HUMAN_PLAYER)?;
    }
    engine.place(8, 8, AI_PLAYER)?;

    let ends = [Pos::new(7, 4), Pos::new(7, 9)];
    Ok(report(engine, &ends).is_some_and(|m| ends.contains(&m)))
}

fn undo_after_win(engine: &mut GomokuEngine) -> Result<bool> {
    for col in 3..8 {
        engine.place(10, col, HUMAN_PLAYER)?;
    }
    let winner = engine.winner();
    println!("  Winner: {winner:?}");

    let undone = engine.undo()?;
    println!("  Undone moves: {undone}, decided now: {}", engine.is_decided());
    Ok(winner == Some(HUMAN_PLAYER) && undone == 2 && !engine.is_decided() && engine.move_count() == 3)
}
