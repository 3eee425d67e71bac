//! The ship half of the rules engine: fixed-length hulls and the damage they
//! have taken.

use std::collections::HashSet;

use thiserror::Error;

use crate::board::AttackOutcome;

/// Reason why a ship could not be constructed with the requested length.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidShipLength {
    /// The requested length was less than 1.
    #[error("ship length must be greater than or equal to 1")]
    TooShort,
    /// The requested length was greater than 10.
    #[error("ship length must be less than or equal to 10")]
    TooLong,
}

/// Reason why a hit could not be registered against a ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotHitReason {
    /// The segment index was negative.
    #[error("hit segment cannot be less than 0")]
    Negative,
    /// The segment index was past the end of the hull.
    #[error("hit segment must be less than the ship's length")]
    BeyondLength,
}

/// The standard ship classes of the base game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Destroyer: length 3.
    Destroyer,
    /// Submarine: length 3.
    Submarine,
    /// Patrol boat: length 2.
    PatrolBoat,
}

impl Kind {
    /// The full standard fleet, one of each class.
    pub const ALL: [Kind; 5] = [
        Kind::Carrier,
        Kind::Battleship,
        Kind::Destroyer,
        Kind::Submarine,
        Kind::PatrolBoat,
    ];

    /// Get the hull length of this class.
    pub fn length(self) -> i32 {
        match self {
            Kind::Carrier => 5,
            Kind::Battleship => 4,
            Kind::Destroyer => 3,
            Kind::Submarine => 3,
            Kind::PatrolBoat => 2,
        }
    }
}

/// A single ship: a fixed hull length and the set of segments destroyed so
/// far. Segments are indexed from the ship's origin cell on the board.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Hull length, fixed at construction.
    length: i32,

    /// Segment indexes that have been destroyed by attacks.
    destroyed: HashSet<i32>,
}

impl Ship {
    /// Construct an undamaged ship with the given hull length. Lengths
    /// outside `[1, 10]` are rejected.
    pub fn new(length: i32) -> Result<Self, InvalidShipLength> {
        if length < 1 {
            Err(InvalidShipLength::TooShort)
        } else if length > 10 {
            Err(InvalidShipLength::TooLong)
        } else {
            Ok(Self {
                length,
                destroyed: HashSet::new(),
            })
        }
    }

    /// Construct an undamaged ship of the given class.
    pub fn by_kind(kind: Kind) -> Self {
        // Every class length is within the valid range.
        Self {
            length: kind.length(),
            destroyed: HashSet::new(),
        }
    }

    /// The hull length of this ship.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Check if every segment of this ship has been destroyed.
    pub fn is_sunk(&self) -> bool {
        self.destroyed.len() == self.length as usize
    }

    /// Check if the given segment has been destroyed. Segments outside the
    /// hull report `false`.
    pub fn is_destroyed(&self, segment: i32) -> bool {
        self.destroyed.contains(&segment)
    }

    /// Register an attack against one segment of this ship.
    ///
    /// Returns [`AttackOutcome::DestroyedSegment`] if the segment was
    /// intact, or [`AttackOutcome::AlreadyDestroyed`] without changing any
    /// state if it had been hit before. Segment indexes outside
    /// `[0, length)` are rejected no matter what damage the ship has taken.
    pub fn hit(&mut self, segment: i32) -> Result<AttackOutcome, CannotHitReason> {
        if segment < 0 {
            Err(CannotHitReason::Negative)
        } else if segment >= self.length {
            Err(CannotHitReason::BeyondLength)
        } else if self.destroyed.insert(segment) {
            Ok(AttackOutcome::DestroyedSegment)
        } else {
            Ok(AttackOutcome::AlreadyDestroyed)
        }
    }
}

impl From<Kind> for Ship {
    /// Equivalent to [`Ship::by_kind`].
    fn from(kind: Kind) -> Self {
        Ship::by_kind(kind)
    }
}
