//! Simulate command - engine-vs-engine matches

use anyhow::Result;
use clap::Parser;
use rand::random;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::output::{create_games_progress, format_share, print_kv, print_section},
    engine::{ComputerPlayer, Difficulty},
    ports::NullObserver,
    tictactoe::{GameOutcome, Mark, play_game},
};

#[derive(Parser, Debug)]
#[command(about = "Play computer-vs-computer games and report the results")]
pub struct SimulateArgs {
    /// Difficulty of the X engine
    #[arg(long, default_value = "hard")]
    pub x: Difficulty,

    /// Difficulty of the O engine
    #[arg(long, default_value = "hard")]
    pub o: Difficulty,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Mark that moves first
    #[arg(long, default_value = "X")]
    pub first: Mark,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show a progress bar
    #[arg(long)]
    pub progress: bool,
}

/// Tally of finished games
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SimulationSummary {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Play `games` engine-vs-engine games, calling `on_game` after each one.
///
/// Game `n` seeds X with `seed + 2n` and O with `seed + 2n + 1`.
pub fn run_simulation(
    x: Difficulty,
    o: Difficulty,
    first: Mark,
    games: usize,
    seed: u64,
    mut on_game: impl FnMut(usize, GameOutcome),
) -> crate::Result<SimulationSummary> {
    let mut summary = SimulationSummary::default();

    for game in 0..games {
        let base = seed.wrapping_add(2 * game as u64);
        let mut x_player = ComputerPlayer::with_seed(Mark::X, x, base);
        let mut o_player = ComputerPlayer::with_seed(Mark::O, o, base.wrapping_add(1));

        let record = play_game(&mut x_player, &mut o_player, first, &mut NullObserver)?;
        summary.record(record.outcome);
        on_game(game, record.outcome);
    }

    Ok(summary)
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(random);
    info!(x = %args.x, o = %args.o, games = args.games, seed, "starting simulation");

    let progress = args
        .progress
        .then(|| create_games_progress(args.games as u64));

    let summary = run_simulation(args.x, args.o, args.first, args.games, seed, |_, outcome| {
        if let Some(pb) = &progress {
            pb.set_message(outcome.to_string());
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section("Simulation Results");
    print_kv("X engine", args.x.as_str());
    print_kv("O engine", args.o.as_str());
    print_kv("First move", &args.first.to_string());
    print_kv("Seed", &seed.to_string());
    print_kv("Games", &summary.total().to_string());
    print_kv("X wins", &format_share(summary.x_wins, summary.total()));
    print_kv("O wins", &format_share(summary.o_wins, summary.total()));
    print_kv("Draws", &format_share(summary.draws, summary.total()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_each_outcome() {
        let mut summary = SimulationSummary::default();
        summary.record(GameOutcome::Win(Mark::X));
        summary.record(GameOutcome::Draw);
        summary.record(GameOutcome::Draw);

        assert_eq!(summary.x_wins, 1);
        assert_eq!(summary.o_wins, 0);
        assert_eq!(summary.draws, 2);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn callback_sees_every_game() {
        let mut seen = Vec::new();
        let summary = run_simulation(
            Difficulty::Easy,
            Difficulty::Easy,
            Mark::X,
            12,
            4,
            |game, _| seen.push(game),
        )
        .unwrap();

        assert_eq!(summary.total(), 12);
        assert_eq!(seen, (0..12).collect::<Vec<_>>());
    }
}
