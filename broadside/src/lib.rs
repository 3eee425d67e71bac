//! Rules engine for the classic game of Battleship.
//!
//! [`Ship`] tracks the damage dealt to one fixed-length ship. [`Board`] owns
//! the ships placed on a 10x10 grid, validates placement, and resolves
//! attacks against cells. [`Player`] is a thin wrapper tying a display name
//! to a board.
//!
//! The engine is single-threaded and synchronous: no networking, no
//! persistence, no turn sequencing. Callers drive it directly:
//!
//! ```
//! use broadside::{AttackOutcome, Direction, Kind, Player, Ship};
//!
//! let mut player = Player::new("Jordan");
//! player
//!     .board_mut()
//!     .add_ship(2, 4, Direction::West, Ship::by_kind(Kind::Destroyer))
//!     .unwrap();
//!
//! assert_eq!(player.board_mut().attack(3, 4), AttackOutcome::DestroyedSegment);
//! assert_eq!(player.board_mut().attack(3, 4), AttackOutcome::AlreadyDestroyed);
//! assert_eq!(player.board_mut().attack(6, 4), AttackOutcome::Miss);
//! assert!(!player.board().all_sunk());
//! ```

pub mod board;
pub mod player;
pub mod ship;

pub use self::{
    board::{
        AttackOutcome, Board, CannotPlaceReason, Direction, PlaceError, Placement, BOARD_SIZE,
    },
    player::Player,
    ship::{CannotHitReason, InvalidShipLength, Kind, Ship},
};
