//! Human player reading moves from a line-oriented input stream

use std::{
    cell::RefCell,
    io::{BufRead, Write},
    rc::Rc,
};

use tracing::trace;

use crate::{
    Error, Result,
    ports::Player,
    tictactoe::{Board, Mark},
};

/// Prompts for a move and re-prompts until an empty cell index is entered.
///
/// The input stream is shared so that two human players (and the menu) can
/// read from the same terminal.
pub struct HumanPlayer<R, W> {
    mark: Mark,
    name: String,
    input: Rc<RefCell<R>>,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(mark: Mark, input: Rc<RefCell<R>>, output: W) -> Self {
        Self {
            mark,
            name: format!("human ({mark})"),
            input,
            output,
        }
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (Rc<RefCell<R>>, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.output, "{}'s turn. Input move (0-8)\n> ", self.mark)
            .and_then(|_| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "write move prompt".to_string(),
                source,
            })
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .borrow_mut()
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read move".to_string(),
                source,
            })?;
        Ok((read > 0).then_some(line))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board) -> Result<usize> {
        let available = board.available_moves();
        loop {
            self.prompt()?;
            let line = self
                .read_line()?
                .ok_or(Error::InputClosed { mark: self.mark })?;

            match line.trim().parse::<usize>() {
                Ok(position) if available.contains(&position) => return Ok(position),
                _ => {
                    trace!(input = line.trim(), "invalid move entry");
                    writeln!(self.output, "Invalid value. Try Again")?;
                }
            }
        }
    }
}
