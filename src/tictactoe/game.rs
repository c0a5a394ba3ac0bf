//! High-level game management

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::board::{Board, Mark};
use crate::{
    Result,
    ports::{GameObserver, Player},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    /// The winning mark, if the game was not drawn
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(mark),
            GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(mark) => write!(f, "{mark} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// A finished game with its history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub first: Mark,
    pub moves: Vec<Move>,
    pub board: Board,
    pub outcome: GameOutcome,
}

/// Play one game from an empty board until a line is completed or the board fills.
///
/// Turns alternate starting with `first`. A move the board rejects is
/// reported to the observer and the same player is asked again, so the turn
/// only passes on an accepted move. Errors from a player (for example closed
/// input) end the game early and are returned as-is.
pub fn play_game(
    x_player: &mut dyn Player,
    o_player: &mut dyn Player,
    first: Mark,
    observer: &mut dyn GameObserver,
) -> Result<GameRecord> {
    let mut board = Board::new();
    let mut moves = Vec::with_capacity(board.empty_count());
    let mut mark = first;

    observer.on_game_start(&board, first)?;

    while board.has_empty_cell() {
        let player: &mut dyn Player = match mark {
            Mark::X => &mut *x_player,
            Mark::O => &mut *o_player,
        };

        let position = player.get_move(&board)?;
        if let Err(err) = board.try_apply_move(mark, position) {
            warn!(%mark, position, player = player.name(), "rejected move: {err}");
            observer.on_rejected_move(mark, position, &err)?;
            continue;
        }

        let mv = Move { position, mark };
        moves.push(mv);
        observer.on_move(&board, mv)?;

        if board.winner().is_some() {
            break;
        }

        mark = mark.opponent();
    }

    let outcome = match board.winner() {
        Some(winner) => GameOutcome::Win(winner),
        None => GameOutcome::Draw,
    };
    info!(%outcome, moves = moves.len(), "game finished");
    debug!("final board:\n{board}");
    observer.on_game_end(&board, outcome)?;

    Ok(GameRecord {
        first,
        moves,
        board,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NullObserver;

    /// Plays a fixed list of positions, in order
    struct Scripted {
        mark: Mark,
        positions: Vec<usize>,
    }

    impl Scripted {
        fn new(mark: Mark, positions: &[usize]) -> Self {
            let mut positions = positions.to_vec();
            positions.reverse();
            Self { mark, positions }
        }
    }

    impl Player for Scripted {
        fn mark(&self) -> Mark {
            self.mark
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn get_move(&mut self, _board: &Board) -> Result<usize> {
            self.positions.pop().ok_or(crate::Error::NoValidMoves)
        }
    }

    #[test]
    fn test_row_win_ends_game() {
        let mut x = Scripted::new(Mark::X, &[0, 1, 2]);
        let mut o = Scripted::new(Mark::O, &[3, 4]);
        let record = play_game(&mut x, &mut o, Mark::X, &mut NullObserver).unwrap();

        assert_eq!(record.outcome, GameOutcome::Win(Mark::X));
        assert_eq!(record.moves.len(), 5);
        assert_eq!(record.moves.last().map(|m| m.position), Some(2));
    }

    #[test]
    fn test_full_board_is_draw() {
        // X O X
        // X O O
        // O X X
        let mut x = Scripted::new(Mark::X, &[0, 2, 3, 7, 8]);
        let mut o = Scripted::new(Mark::O, &[1, 4, 5, 6]);
        let record = play_game(&mut x, &mut o, Mark::X, &mut NullObserver).unwrap();

        assert_eq!(record.outcome, GameOutcome::Draw);
        assert!(!record.board.has_empty_cell());
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        // O tries the occupied centre first and is asked again.
        let mut x = Scripted::new(Mark::X, &[4, 0, 8]);
        let mut o = Scripted::new(Mark::O, &[4, 1, 2, 5]);
        let record = play_game(&mut x, &mut o, Mark::X, &mut NullObserver).unwrap();

        assert_eq!(record.outcome, GameOutcome::Win(Mark::X));
        assert_eq!(
            record
                .moves
                .iter()
                .filter(|m| m.mark == Mark::O)
                .map(|m| m.position)
                .collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_o_can_move_first() {
        let mut x = Scripted::new(Mark::X, &[3, 4]);
        let mut o = Scripted::new(Mark::O, &[0, 1, 2]);
        let record = play_game(&mut x, &mut o, Mark::O, &mut NullObserver).unwrap();

        assert_eq!(record.first, Mark::O);
        assert_eq!(record.moves[0].mark, Mark::O);
        assert_eq!(record.outcome, GameOutcome::Win(Mark::O));
    }
}
