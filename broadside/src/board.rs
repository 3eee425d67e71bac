//! Types that make up the game board.

#[cfg(feature = "rng_gen")]
use rand::{seq::SliceRandom, Rng};

use crate::ship::Ship;

pub use self::errors::{CannotPlaceReason, PlaceError};

mod errors;

/// Width and height of the board. Coordinates on both axes lie in
/// `[0, BOARD_SIZE)`.
pub const BOARD_SIZE: i32 = 10;

/// Outcome of an attack on a board cell.
///
/// [`Ship::hit`] shares this type but never produces [`Miss`]; a miss can
/// only be observed at the board level, where a cell may be open water.
///
/// [`Miss`]: AttackOutcome::Miss
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// An intact ship segment was destroyed.
    DestroyedSegment,
    /// The targeted segment had already been destroyed. Nothing changed.
    AlreadyDestroyed,
    /// No ship occupies the targeted cell.
    Miss,
}

/// Cardinal direction a ship faces on the board.
///
/// A ship's origin is its front cell; the rest of the hull trails away from
/// the origin, opposite the facing: North trails toward decreasing `y`, East
/// toward decreasing `x`, South toward increasing `y`, West toward
/// increasing `x`. This is an internal grid convention, not a display
/// contract.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Every direction, in enum order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step from a cell to the next trailing cell of the hull.
    fn step(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (-1, 0),
            Direction::South => (0, 1),
            Direction::West => (1, 0),
        }
    }
}

/// One placed ship: the board's record of the ship itself together with the
/// origin cell and facing it was placed with.
#[derive(Debug)]
pub struct Placement {
    /// The x coordinate of the origin.
    x: i32,

    /// The y coordinate of the origin.
    y: i32,

    /// The direction the ship faces.
    direction: Direction,

    /// The placed ship.
    ship: Ship,
}

impl Placement {
    /// The x coordinate of the ship's origin.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// The y coordinate of the ship's origin.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The direction the ship faces.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The placed ship.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Iterate the cells occupied by the ship, starting at the origin. The
    /// position of a cell in this sequence is its segment index.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (dx, dy) = self.direction.step();
        let (x, y) = (self.x, self.y);
        (0..self.ship.length()).map(move |i| (x + dx * i, y + dy * i))
    }

    /// The segment index of the ship at `(x, y)`, or `None` if this ship
    /// does not occupy the cell.
    pub fn segment_at(&self, x: i32, y: i32) -> Option<i32> {
        self.cells()
            .position(|cell| cell == (x, y))
            .map(|segment| segment as i32)
    }
}

/// A single player's board: a 10x10 grid and the ships placed on it.
///
/// Ships are added through validated placement and never removed; sunk ships
/// stay on the board and keep counting toward [`Board::all_sunk`].
#[derive(Debug)]
pub struct Board {
    // TODO: possible optimization: keep a running count of sunk ships so
    // `all_sunk` doesn't rescan every placement.
    /// Placed ships, in placement order.
    ships: Vec<Placement>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Check whether `ship` could be placed with its origin at `(x, y)`
    /// facing `direction`, without placing it.
    ///
    /// Preconditions are checked in a fixed order (origin x bounds, origin y
    /// bounds, hull extent, collision) and the first violated one is
    /// reported.
    pub fn check_placement(
        &self,
        x: i32,
        y: i32,
        direction: Direction,
        ship: &Ship,
    ) -> Result<(), CannotPlaceReason> {
        if x < 0 {
            return Err(CannotPlaceReason::XTooLow);
        }
        if x >= BOARD_SIZE {
            return Err(CannotPlaceReason::XTooHigh);
        }
        if y < 0 {
            return Err(CannotPlaceReason::YTooLow);
        }
        if y >= BOARD_SIZE {
            return Err(CannotPlaceReason::YTooHigh);
        }
        // The hull needs one cell of clearance past its trailing segment.
        let (dx, dy) = direction.step();
        let tail_x = x + dx * ship.length();
        let tail_y = y + dy * ship.length();
        if tail_x < 0 || tail_x >= BOARD_SIZE || tail_y < 0 || tail_y >= BOARD_SIZE {
            return Err(CannotPlaceReason::InsufficientSpace);
        }
        for i in 0..ship.length() {
            if self.ship_at(x + dx * i, y + dy * i).is_some() {
                return Err(CannotPlaceReason::AlreadyOccupied);
            }
        }
        Ok(())
    }

    /// Place `ship` with its origin at `(x, y)`, facing `direction`.
    ///
    /// On failure the returned error reports the violated precondition and
    /// hands the ship back to the caller. A placed ship stays on the board
    /// for the board's whole life.
    pub fn add_ship(
        &mut self,
        x: i32,
        y: i32,
        direction: Direction,
        ship: Ship,
    ) -> Result<(), PlaceError> {
        match self.check_placement(x, y, direction, &ship) {
            Ok(()) => {
                self.ships.push(Placement {
                    x,
                    y,
                    direction,
                    ship,
                });
                Ok(())
            }
            Err(reason) => Err(PlaceError::new(reason, ship)),
        }
    }

    /// Resolve an attack against the cell at `(x, y)`.
    ///
    /// A miss, including an attack outside the grid, changes nothing. A hit
    /// is forwarded to the occupying ship at the segment under the cell.
    pub fn attack(&mut self, x: i32, y: i32) -> AttackOutcome {
        let target = self
            .ships
            .iter()
            .enumerate()
            .find_map(|(idx, placement)| placement.segment_at(x, y).map(|segment| (idx, segment)));
        match target {
            None => AttackOutcome::Miss,
            Some((idx, segment)) => match self.ships[idx].ship.hit(segment) {
                Ok(outcome) => outcome,
                // `segment_at` only produces indexes inside the hull.
                Err(_) => unreachable!("segment {} out of range", segment),
            },
        }
    }

    /// Check if every ship on the board has been sunk. Vacuously true for a
    /// board with no ships.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|placement| placement.ship.is_sunk())
    }

    /// Iterate the ships placed on this board, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Placement> {
        self.ships.iter()
    }

    /// Get the placed ship occupying `(x, y)`, if any.
    pub fn ship_at(&self, x: i32, y: i32) -> Option<&Placement> {
        self.ships
            .iter()
            .find(|placement| placement.segment_at(x, y).is_some())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "rng_gen")]
impl Board {
    /// Place `ship` at a placement drawn uniformly from every placement that
    /// is currently legal. If no legal placement remains, the ship is handed
    /// back unplaced.
    pub fn add_ship_random<R: Rng + ?Sized>(&mut self, rng: &mut R, ship: Ship) -> Result<(), Ship> {
        let mut candidates = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                for &direction in Direction::ALL.iter() {
                    if self.check_placement(x, y, direction, &ship).is_ok() {
                        candidates.push((x, y, direction));
                    }
                }
            }
        }
        match candidates.choose(rng) {
            Some(&(x, y, direction)) => self
                .add_ship(x, y, direction, ship)
                .map_err(PlaceError::into_ship),
            None => Err(ship),
        }
    }
}
