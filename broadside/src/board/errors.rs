//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::ship::Ship;

/// Reason why a ship could not be placed on the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The origin x coordinate was negative.
    #[error("provided x coordinate was less than 0")]
    XTooLow,
    /// The origin x coordinate was past the right edge of the board.
    #[error("provided x coordinate was greater than or equal to 10")]
    XTooHigh,
    /// The origin y coordinate was negative.
    #[error("provided y coordinate was less than 0")]
    YTooLow,
    /// The origin y coordinate was past the bottom edge of the board.
    #[error("provided y coordinate was greater than or equal to 10")]
    YTooHigh,
    /// The ship's hull does not fit within the board from the given origin
    /// in the given direction.
    #[error("provided coordinates are invalid for the given ship")]
    InsufficientSpace,
    /// One or more cells of the hull are occupied by another ship.
    #[error("provided coordinates and ship would collide with another ship")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
/// Carries the rejected ship so the caller can retry with corrected input.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct PlaceError {
    /// Reason why placement was rejected.
    #[source]
    reason: CannotPlaceReason,

    /// The ship that was not placed.
    ship: Ship,
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected ship.
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the rejected ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
