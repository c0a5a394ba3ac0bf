//! Computer player backed by the minimax engine

use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};
use tracing::{debug, instrument, trace};

use super::{Difficulty, minimax::Minimax};
use crate::{
    Error, Result,
    ports::Player,
    tictactoe::{BOARD_CELLS, Board, Mark},
};

/// Computer-controlled player.
///
/// On [`Difficulty::Easy`] every move is a uniformly random empty cell. On
/// [`Difficulty::Hard`] the opening move on an empty board is random and every
/// later move comes from a full minimax search.
pub struct ComputerPlayer {
    mark: Mark,
    difficulty: Difficulty,
    name: String,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Create a new computer player with a random seed
    pub fn new(mark: Mark, difficulty: Difficulty) -> Self {
        Self::with_seed(mark, difficulty, random())
    }

    /// Create a computer player with a deterministic seed
    pub fn with_seed(mark: Mark, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            mark,
            difficulty,
            name: format!("computer ({difficulty})"),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Choose a move for this player's mark.
    ///
    /// The search mutates `board` while it runs and restores it before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the board already has a winner and
    /// [`Error::NoValidMoves`] if it is full.
    #[instrument(level = "debug", skip(self, board), fields(mark = %self.mark, difficulty = %self.difficulty))]
    pub fn select_move(&mut self, board: &mut Board) -> Result<usize> {
        if board.winner().is_some() {
            return Err(Error::GameOver);
        }
        let options = board.available_moves();
        if options.is_empty() {
            return Err(Error::NoValidMoves);
        }

        if self.difficulty == Difficulty::Easy || options.len() == BOARD_CELLS {
            let position = *options.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
            trace!(position, "random move");
            return Ok(position);
        }

        let mut search = Minimax::new(self.mark);
        let best = search.search(board, self.mark);
        debug!(
            position = ?best.position,
            score = best.score,
            nodes = search.nodes_visited(),
            "minimax move"
        );
        best.position.ok_or(Error::NoValidMoves)
    }
}

impl Player for ComputerPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board) -> Result<usize> {
        let mut scratch = *board;
        self.select_move(&mut scratch)
    }
}
