//! The player wrapper: a display name tied to the board that player owns.

use crate::board::Board;

/// A named player and the board their fleet is placed on.
///
/// The player exclusively owns its board; all reads and mutations go through
/// the accessors. The wrapper adds no rules of its own.
#[derive(Debug)]
pub struct Player {
    /// The in-game name the player has chosen to use.
    name: String,

    /// The board the player controls.
    board: Board,
}

impl Player {
    /// Create a player with the given name and a fresh empty board.
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self::with_board(name, Board::new())
    }

    /// Create a player that takes ownership of an existing board.
    pub fn with_board<N: Into<String>>(name: N, board: Board) -> Self {
        Self {
            name: name.into(),
            board,
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the player's board, for placement and attacks.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
