//! Play command - interactive games on the terminal

use std::{
    cell::RefCell,
    io::{BufRead, Write},
    path::PathBuf,
    rc::Rc,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Color;
use tracing::info;

use crate::{
    adapters::{ConsoleObserver, HumanPlayer, Palette, SharedWriter},
    cli::config::{GameConfig, GameMode},
    engine::{ComputerPlayer, Difficulty},
    ports::Player,
    tictactoe::{GameRecord, Mark, play_game},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play a game in the terminal")]
pub struct PlayArgs {
    /// TOML configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Game mode (skips the menu): human-vs-human, human-vs-computer, computer-vs-computer
    #[arg(long, short = 'm')]
    pub mode: Option<GameMode>,

    /// Engine difficulty: easy or hard
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Mark played by the human against the computer
    #[arg(long)]
    pub human_mark: Option<Mark>,

    /// Mark that moves first
    #[arg(long)]
    pub first: Option<Mark>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl PlayArgs {
    /// Resolve the session configuration: defaults, then the file, then flags
    pub fn resolve(&self) -> crate::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = Some(mode);
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(mark) = self.human_mark {
            config.human_mark = mark;
        }
        if let Some(mark) = self.first {
            config.first_mark = mark;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_color {
            config.color = false;
        }
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve().context("failed to load configuration")?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match run_session(&config, stdin.lock(), stdout.lock())? {
        Some(record) => info!(outcome = %record.outcome, moves = record.moves.len(), "session finished"),
        None => info!("quit from menu"),
    }
    Ok(())
}

/// Run one session: the menu (unless the mode is configured) and then a game.
///
/// Returns `None` when the player quits from the menu.
pub fn run_session<R: BufRead, W: Write>(
    config: &GameConfig,
    input: R,
    output: W,
) -> crate::Result<Option<GameRecord>> {
    let input = Rc::new(RefCell::new(input));
    let out = SharedWriter::new(output);
    let palette = Palette::new(config.color);

    let (mode, difficulty) = match config.mode {
        Some(mode) => (mode, config.difficulty),
        None => match choose_from_menu(&input, &mut out.clone(), &palette)? {
            Some(choice) => choice,
            None => return Ok(None),
        },
    };
    info!(%mode, %difficulty, first = %config.first_mark, "starting game");

    let (mut x_player, mut o_player) =
        build_players(mode, difficulty, config, &input, &out);
    let mut observer = ConsoleObserver::new(out.clone(), palette);
    let record = play_game(
        x_player.as_mut(),
        o_player.as_mut(),
        config.first_mark,
        &mut observer,
    )?;
    Ok(Some(record))
}

type BoxedPlayer<'a> = Box<dyn Player + 'a>;

fn build_players<'a, R: BufRead + 'a, W: Write + 'a>(
    mode: GameMode,
    difficulty: Difficulty,
    config: &GameConfig,
    input: &Rc<RefCell<R>>,
    out: &SharedWriter<W>,
) -> (BoxedPlayer<'a>, BoxedPlayer<'a>) {
    let human = |mark: Mark| -> BoxedPlayer<'a> {
        Box::new(HumanPlayer::new(mark, Rc::clone(input), out.clone()))
    };
    let computer = |mark: Mark, offset: u64| -> BoxedPlayer<'a> {
        Box::new(match config.seed {
            Some(seed) => ComputerPlayer::with_seed(mark, difficulty, seed.wrapping_add(offset)),
            None => ComputerPlayer::new(mark, difficulty),
        })
    };

    match mode {
        GameMode::HumanVsHuman => (human(Mark::X), human(Mark::O)),
        GameMode::HumanVsComputer => {
            let human_mark = config.human_mark;
            let engine = computer(human_mark.opponent(), 0);
            match human_mark {
                Mark::X => (human(Mark::X), engine),
                Mark::O => (engine, human(Mark::O)),
            }
        }
        GameMode::ComputerVsComputer => (computer(Mark::X, 0), computer(Mark::O, 1)),
    }
}

/// Main menu followed, for games against the computer, by the difficulty menu.
///
/// Returns `None` when the player chooses Quit or input ends.
pub fn choose_from_menu<R: BufRead, W: Write>(
    input: &RefCell<R>,
    out: &mut W,
    palette: &Palette,
) -> crate::Result<Option<(GameMode, Difficulty)>> {
    loop {
        writeln!(out)?;
        writeln!(
            out,
            "{}{}{}",
            "-".repeat(20),
            palette.paint("Tic-Tac-Toe", Color::Green),
            "-".repeat(20)
        )?;
        writeln!(out)?;
        writeln!(out, "\t\t Choose the Mode \t\t")?;
        writeln!(out)?;
        writeln!(out, "\t1. Human Vs Human")?;
        writeln!(out, "\t2. Human Vs Computer")?;
        writeln!(out, "\t3. Quit")?;

        match read_option(input, out)?.as_deref() {
            Some("1") => return Ok(Some((GameMode::HumanVsHuman, Difficulty::default()))),
            Some("2") => {
                return Ok(choose_difficulty(input, out)?
                    .map(|difficulty| (GameMode::HumanVsComputer, difficulty)));
            }
            Some("3") | None => return Ok(None),
            Some(_) => writeln!(out, "Invalid Input. Try Again.")?,
        }
    }
}

fn choose_difficulty<R: BufRead, W: Write>(
    input: &RefCell<R>,
    out: &mut W,
) -> crate::Result<Option<Difficulty>> {
    loop {
        writeln!(out, "\t\t Choose the Difficulty \t\t")?;
        writeln!(out)?;
        writeln!(out, "\t1. Easy")?;
        writeln!(out, "\t2. Hard")?;
        writeln!(out, "\t3. Quit")?;

        match read_option(input, out)?.as_deref() {
            Some("1") => return Ok(Some(Difficulty::Easy)),
            Some("2") => return Ok(Some(Difficulty::Hard)),
            Some("3") | None => return Ok(None),
            Some(_) => writeln!(out, "Invalid Input. Try Again.")?,
        }
    }
}

/// Prompt with `> ` and read one trimmed line; `None` at end of input
fn read_option<R: BufRead, W: Write>(
    input: &RefCell<R>,
    out: &mut W,
) -> crate::Result<Option<String>> {
    write!(out, "> ")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .borrow_mut()
        .read_line(&mut line)
        .map_err(|source| crate::Error::Io {
            operation: "read menu option".to_string(),
            source,
        })?;
    Ok((read > 0).then(|| line.trim().to_string()))
}
