#![no_std]

extern crate alloc;

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod types;

/// The 8 possible winning triples: rows, then columns, then diagonals.
pub const WIN_LINES: [[Square; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the side that owns it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    pub player: Player,
    pub line: [Square; 3],
}

/// Immutable 9-square snapshot of the grid, row-major.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Cell; SQUARE_COUNT],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
        }
    }

    pub fn validate_square(square: Square) -> Result<Square> {
        if usize::from(square) < SQUARE_COUNT {
            Ok(square)
        } else {
            Err(GameError::InvalidSquare)
        }
    }

    pub fn cell_at(&self, square: Square) -> Cell {
        self.squares[usize::from(square)]
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|cell| cell.is_some())
    }

    /// Copy of this board with `square` claimed by `player`.
    pub(crate) fn with_mark(mut self, square: Square, player: Player) -> Self {
        self.squares[usize::from(square)] = Some(player);
        self
    }

    /// Completed line on this board, if any.
    ///
    /// Lines are checked in the fixed order of [`WIN_LINES`]; the first match
    /// decides the tie-break should a board ever hold two completed lines.
    pub fn winner(&self) -> Option<WinResult> {
        WIN_LINES.into_iter().find_map(|line| {
            let [a, b, c] = line;
            match self[a] {
                Some(player) if self[b] == Some(player) && self[c] == Some(player) => {
                    Some(WinResult { player, line })
                }
                _ => None,
            }
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[usize::from(square)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board_of(marks: &[(Square, Player)]) -> Board {
        let mut board = Board::empty();
        for &(square, player) in marks {
            board = board.with_mark(square, player);
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(Board::empty().winner(), None);
    }

    #[test]
    fn board_without_completed_line_has_no_winner() {
        let board = board_of(&[(0, Player::X), (1, Player::O), (4, Player::X)]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn top_row_of_x_reports_player_and_line() {
        let board = board_of(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(
            board.winner(),
            Some(WinResult {
                player: Player::X,
                line: [0, 1, 2],
            })
        );
    }

    #[test]
    fn every_canonical_line_is_detected() {
        for line in WIN_LINES {
            let marks: Vec<(Square, Player)> =
                line.iter().map(|&square| (square, Player::O)).collect();
            let board = board_of(&marks);
            assert_eq!(board.winner(), Some(WinResult { player: Player::O, line }));
        }
    }

    #[test]
    fn doubled_lines_resolve_to_first_in_fixed_order() {
        // Cannot occur under alternating play, but the tie-break is fixed.
        let marks: Vec<(Square, Player)> = (0..9).map(|square| (square, Player::X)).collect();
        assert_eq!(board_of(&marks).winner().unwrap().line, [0, 1, 2]);
    }

    #[test]
    fn squares_map_to_one_based_grid_positions() {
        for (square, pos) in [(0u8, (1, 1)), (2, (3, 1)), (5, (3, 2)), (8, (3, 3))] {
            assert_eq!(square.to_grid_pos(), pos);
        }
    }
}
