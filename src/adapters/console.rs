//! Console rendering of the board and game events

use std::{cell::RefCell, io::Write, rc::Rc};

use crossterm::style::{Color, Stylize};

use crate::{
    Error, Result,
    ports::GameObserver,
    tictactoe::{Board, Cell, GameOutcome, Mark, Move},
};

/// Cloneable handle to one output stream shared by the menu, human prompts
/// and the board observer
#[derive(Debug)]
pub struct SharedWriter<W>(Rc<RefCell<W>>);

impl<W> SharedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self(Rc::new(RefCell::new(inner)))
    }

    /// Run `f` against the inner writer
    pub fn with<T>(&self, f: impl FnOnce(&mut W) -> T) -> T {
        f(&mut *self.0.borrow_mut())
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// Terminal styling, or plain text when colour is disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// A mark as drawn on the board: X red, O blue
    pub fn mark(&self, mark: Mark) -> String {
        let color = match mark {
            Mark::X => Color::Red,
            Mark::O => Color::Blue,
        };
        self.paint(&mark.to_string(), color)
    }
}

/// Render the board as three `| a | b | c |` rows; empty cells show their index.
pub fn render_board(board: &Board, palette: &Palette) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (row * 3..row * 3 + 3)
            .map(|pos| match board.get(pos) {
                Cell::Empty => pos.to_string(),
                Cell::X => palette.mark(Mark::X),
                Cell::O => palette.mark(Mark::O),
            })
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}

/// Observer that prints the board after every move and announces the result
pub struct ConsoleObserver<W> {
    out: W,
    palette: Palette,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_board(&mut self, board: &Board) -> Result<()> {
        let rendered = render_board(board, &self.palette);
        self.out
            .write_all(rendered.as_bytes())
            .map_err(|source| Error::Io {
                operation: "print board".to_string(),
                source,
            })
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_game_start(&mut self, board: &Board, _first: Mark) -> Result<()> {
        self.print_board(board)
    }

    fn on_move(&mut self, board: &Board, mv: Move) -> Result<()> {
        writeln!(
            self.out,
            "{} made the move at square {}",
            self.palette.paint(&mv.mark.to_string(), Color::Yellow),
            self.palette.paint(&mv.position.to_string(), Color::Cyan),
        )?;
        self.print_board(board)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn on_rejected_move(&mut self, mark: Mark, position: usize, _reason: &Error) -> Result<()> {
        writeln!(self.out, "Square {position} is not available, {mark} moves again")?;
        Ok(())
    }

    fn on_game_end(&mut self, _board: &Board, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(mark) => writeln!(
                self.out,
                "{} is the winner",
                self.palette.paint(&mark.to_string(), Color::Magenta)
            )?,
            GameOutcome::Draw => {
                writeln!(self.out, "{}", self.palette.paint("It's a Tie", Color::Green))?
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
