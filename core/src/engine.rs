use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Overall position of the match, derived from the active board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(Player),
    Won(WinResult),
    Draw,
}

impl GameStatus {
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::InProgress(_))
    }
}

/// One reached position together with the move that produced it.
///
/// The move is absent only for the initial empty-board entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<GridPos>,
}

impl HistoryEntry {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<GridPos> {
        self.last_move
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    NoChange,
    Placed,
    Won,
    Draw,
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    NoChange,
    Moved,
}

impl JumpOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// State machine owning the full move history and the active pointer.
///
/// Entries past the active pointer survive a jump and are only dropped when
/// the next move branches off from the selected position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEngine {
    history: Vec<HistoryEntry>,
    active_index: usize,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::empty(),
                last_move: None,
            }],
            active_index: 0,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.active_index]
    }

    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Side to move at the active position.
    pub fn next_player(&self) -> Player {
        Player::for_ply(self.active_index)
    }

    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(win) = board.winner() {
            GameStatus::Won(win)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// Claims `square` for the side to move.
    ///
    /// Drops any history entries past the active pointer before appending the
    /// new position. A claim on an occupied square is reported as
    /// [`PlayOutcome::NoChange`].
    pub fn play(&mut self, square: Square) -> Result<PlayOutcome> {
        let square = Board::validate_square(square)?;
        self.check_undecided()?;

        if self.board().cell_at(square).is_some() {
            return Ok(PlayOutcome::NoChange);
        }

        let player = self.next_player();
        let board = self.board().with_mark(square, player);
        self.history.truncate(self.active_index + 1);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(square.to_grid_pos()),
        });
        self.active_index = self.history.len() - 1;
        log::debug!("{} claims square {}", player, square);

        Ok(match self.status() {
            GameStatus::Won(_) => PlayOutcome::Won,
            GameStatus::Draw => PlayOutcome::Draw,
            GameStatus::InProgress(_) => PlayOutcome::Placed,
        })
    }

    /// Moves the active pointer to `step` without touching the history.
    pub fn jump_to(&mut self, step: usize) -> Result<JumpOutcome> {
        if step >= self.history.len() {
            return Err(GameError::InvalidStep);
        }

        Ok(if step == self.active_index {
            JumpOutcome::NoChange
        } else {
            self.active_index = step;
            JumpOutcome::Moved
        })
    }

    fn check_undecided(&self) -> Result<()> {
        if self.status().is_decided() {
            Err(GameError::AlreadyDecided)
        } else {
            Ok(())
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(engine: &mut MatchEngine, squares: &[Square]) {
        for &square in squares {
            engine.play(square).unwrap();
        }
    }

    #[test]
    fn first_move_appends_entry_and_flips_turn() {
        let mut engine = MatchEngine::new();
        assert_eq!(engine.next_player(), Player::X);

        assert_eq!(engine.play(0).unwrap(), PlayOutcome::Placed);

        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.active_index(), 1);
        assert_eq!(engine.board().cell_at(0), Some(Player::X));
        assert_eq!(engine.next_player(), Player::X.opponent());
    }

    #[test]
    fn occupied_square_is_a_no_op() {
        let mut engine = MatchEngine::new();
        engine.play(0).unwrap();

        assert_eq!(engine.play(0).unwrap(), PlayOutcome::NoChange);
        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.board().cell_at(0), Some(Player::X));
    }

    #[test]
    fn left_column_win_rejects_further_moves() {
        let mut engine = MatchEngine::new();
        play_all(&mut engine, &[0, 1, 3, 4]);

        assert_eq!(engine.play(6).unwrap(), PlayOutcome::Won);
        assert_eq!(
            engine.status(),
            GameStatus::Won(WinResult {
                player: Player::X,
                line: [0, 3, 6],
            })
        );
        assert_eq!(engine.play(8), Err(GameError::AlreadyDecided));
        assert_eq!(engine.history().len(), 6);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let mut engine = MatchEngine::new();
        play_all(&mut engine, &[0, 1, 2, 4, 3, 6, 5, 8]);

        assert_eq!(engine.play(7).unwrap(), PlayOutcome::Draw);
        assert_eq!(engine.active_index(), 9);
        assert_eq!(engine.status(), GameStatus::Draw);
        assert_eq!(engine.play(0), Err(GameError::AlreadyDecided));
    }

    #[test]
    fn jump_keeps_history_until_next_move_branches() {
        let mut engine = MatchEngine::new();
        play_all(&mut engine, &[0, 1, 2]);
        assert_eq!(engine.history().len(), 4);

        assert_eq!(engine.jump_to(0).unwrap(), JumpOutcome::Moved);
        assert_eq!(engine.active_index(), 0);
        assert_eq!(engine.board(), &Board::empty());
        assert_eq!(engine.history().len(), 4);

        // Redo is still possible before the next move.
        assert_eq!(engine.jump_to(3).unwrap(), JumpOutcome::Moved);
        assert_eq!(engine.board().cell_at(2), Some(Player::X));
        engine.jump_to(0).unwrap();

        assert_eq!(engine.play(4).unwrap(), PlayOutcome::Placed);
        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.active_index(), 1);
        assert_eq!(engine.board().cell_at(4), Some(Player::X));
        assert_eq!(engine.board().cell_at(0), None);
    }

    #[test]
    fn jump_to_unknown_step_is_rejected() {
        let mut engine = MatchEngine::new();
        assert_eq!(engine.jump_to(1), Err(GameError::InvalidStep));
        assert_eq!(engine.jump_to(0).unwrap(), JumpOutcome::NoChange);
    }

    #[test]
    fn history_records_one_based_grid_positions() {
        let mut engine = MatchEngine::new();
        play_all(&mut engine, &[4, 8]);

        let moves: Vec<_> = engine.history().iter().map(HistoryEntry::last_move).collect();
        assert_eq!(moves, [None, Some((2, 2)), Some((3, 3))]);
    }

    #[test]
    fn out_of_range_square_is_rejected() {
        let mut engine = MatchEngine::new();
        assert_eq!(engine.play(9), Err(GameError::InvalidSquare));
        assert_eq!(engine.history().len(), 1);
    }
}
