//! Decision engine behaviour checked against an independent game-tree solver

use noughts::{
    engine::{ComputerPlayer, Difficulty, minimax},
    ports::{NullObserver, Player},
    tictactoe::{Board, Cell, GameOutcome, LineAnalyzer, Mark, play_game},
};

/// Game value for `engine` with `to_move` to play, computed from the cells
/// alone: +1 win, 0 draw, -1 loss under perfect play.
fn reference_value(cells: &mut [Cell; 9], to_move: Mark, engine: Mark) -> i32 {
    if LineAnalyzer::has_won(cells, engine) {
        return 1;
    }
    if LineAnalyzer::has_won(cells, engine.opponent()) {
        return -1;
    }
    let empty: Vec<usize> = (0..9).filter(|&i| cells[i] == Cell::Empty).collect();
    if empty.is_empty() {
        return 0;
    }

    let values = empty.into_iter().map(|pos| {
        cells[pos] = to_move.to_cell();
        let value = reference_value(cells, to_move.opponent(), engine);
        cells[pos] = Cell::Empty;
        value
    });
    if to_move == engine {
        values.max().unwrap_or(0)
    } else {
        values.min().unwrap_or(0)
    }
}

/// Value of playing `position` for `engine` on `board`
fn move_value(board: &Board, position: usize, engine: Mark) -> i32 {
    let mut cells = *board.cells();
    cells[position] = engine.to_cell();
    reference_value(&mut cells, engine.opponent(), engine)
}

mod select_move {
    use super::*;

    #[test]
    fn easy_opening_is_roughly_uniform() {
        let mut player = ComputerPlayer::with_seed(Mark::X, Difficulty::Easy, 2024);
        let board = Board::new();
        let mut counts = [0usize; 9];
        for _ in 0..1000 {
            let position = player.get_move(&board).unwrap();
            assert!(position < 9);
            counts[position] += 1;
        }
        assert!(counts.iter().all(|&c| (60..=170).contains(&c)), "{counts:?}");
    }

    #[test]
    fn hard_choice_is_optimal_on_reference_board() {
        // X O X
        // X O .
        // O X .
        let board = Board::from_string("XOXXO OX ").unwrap();
        let mut player = ComputerPlayer::with_seed(Mark::X, Difficulty::Hard, 0);
        let chosen = player.get_move(&board).unwrap();

        let best = board
            .available_moves()
            .into_iter()
            .map(|pos| move_value(&board, pos, Mark::X))
            .max()
            .unwrap();
        assert!(board.is_empty(chosen));
        assert_eq!(move_value(&board, chosen, Mark::X), best);
        // Both moves draw, so the lower index wins the tie.
        assert_eq!(chosen, 5);
    }

    #[test]
    fn hard_choice_is_optimal_in_every_position_of_random_games() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..20 {
            let mut board = Board::new();
            let mut mark = Mark::X;
            // A random prefix, then check the engine's choice at each turn.
            let prefix = rng.random_range(1..=4);
            for _ in 0..prefix {
                let options = board.available_moves();
                board.apply_move(mark, options[rng.random_range(0..options.len())]);
                mark = mark.opponent();
                if board.is_terminal() {
                    break;
                }
            }
            while !board.is_terminal() {
                let mut engine = ComputerPlayer::with_seed(mark, Difficulty::Hard, 0);
                let chosen = engine.get_move(&board).unwrap();
                let best = board
                    .available_moves()
                    .into_iter()
                    .map(|pos| move_value(&board, pos, mark))
                    .max()
                    .unwrap();
                assert_eq!(move_value(&board, chosen, mark), best, "on\n{board}");
                board.apply_move(mark, chosen);
                mark = mark.opponent();
            }
        }
    }
}

mod minimax_scores {
    use super::*;

    #[test]
    fn finished_win_scores_one_plus_empty_cells() {
        // X owns the left column with two cells still empty.
        let mut board = Board::from_string("XOOXOOX  ").unwrap();
        assert_eq!(board.winner(), Some(Mark::X));
        assert_eq!(board.empty_count(), 2);

        assert_eq!(minimax(&mut board, Mark::O, Mark::X).score, 3);
        assert_eq!(minimax(&mut board, Mark::O, Mark::O).score, -3);
        assert_eq!(minimax(&mut board, Mark::O, Mark::O).position, None);
    }

    #[test]
    fn empty_board_is_a_draw_under_perfect_play() {
        let mut board = Board::new();
        let result = minimax(&mut board, Mark::X, Mark::X);
        assert_eq!(result.score, 0);
        // Every opening draws, so the tie-break keeps the corner at 0.
        assert_eq!(result.position, Some(0));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn immediate_win_scores_highest() {
        // X X .
        // O O .
        // X . O
        let mut board = Board::from_string("XX OO X O").unwrap();
        let result = minimax(&mut board, Mark::X, Mark::X);
        assert_eq!(result.position, Some(2));
        assert_eq!(result.score, 1 + 2);
    }
}

mod full_games {
    use super::*;

    #[test]
    fn hard_against_hard_always_draws() {
        for first in [Mark::X, Mark::O] {
            for opening in 0..9 {
                let mut board = Board::new();
                board.apply_move(first, opening);
                let mut mark = first.opponent();
                let mut players = [
                    ComputerPlayer::with_seed(Mark::X, Difficulty::Hard, 1),
                    ComputerPlayer::with_seed(Mark::O, Difficulty::Hard, 2),
                ];
                while !board.is_terminal() {
                    let idx = usize::from(mark == Mark::O);
                    let position = players[idx].get_move(&board).unwrap();
                    assert!(board.apply_move(mark, position));
                    mark = mark.opponent();
                }
                assert_eq!(board.winner(), None, "opening {opening} by {first}");
            }
        }
    }

    #[test]
    fn hard_never_loses_to_easy() {
        for seed in 0..20u64 {
            for first in [Mark::X, Mark::O] {
                let mut hard = ComputerPlayer::with_seed(Mark::X, Difficulty::Hard, seed);
                let mut easy = ComputerPlayer::with_seed(Mark::O, Difficulty::Easy, seed + 100);
                let record = play_game(&mut hard, &mut easy, first, &mut NullObserver).unwrap();
                assert_ne!(record.outcome, GameOutcome::Win(Mark::O), "seed {seed}");
            }
        }
    }

    #[test]
    fn game_record_replays_to_final_board() {
        let mut x = ComputerPlayer::with_seed(Mark::X, Difficulty::Easy, 5);
        let mut o = ComputerPlayer::with_seed(Mark::O, Difficulty::Hard, 6);
        let record = play_game(&mut x, &mut o, Mark::X, &mut NullObserver).unwrap();

        let mut replay = Board::new();
        for (i, mv) in record.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(mv.mark, expected);
            assert!(replay.apply_move(mv.mark, mv.position));
        }
        assert_eq!(replay, record.board);
        assert_eq!(record.outcome.winner(), record.board.winner());
    }
}
