use broadside::{AttackOutcome, Board, CannotPlaceReason, Direction, Ship};

fn ship(length: i32) -> Ship {
    Ship::new(length).unwrap()
}

#[test]
fn add_ship_rejects_origins_outside_the_grid() {
    let mut board = Board::new();
    board.add_ship(7, 7, Direction::North, ship(2)).unwrap();

    let cases = [
        (-1, 0, CannotPlaceReason::XTooLow),
        (10, 0, CannotPlaceReason::XTooHigh),
        (11, 0, CannotPlaceReason::XTooHigh),
        (0, -1, CannotPlaceReason::YTooLow),
        (0, 11, CannotPlaceReason::YTooHigh),
    ];
    for &(x, y, reason) in cases.iter() {
        let err = board.add_ship(x, y, Direction::North, ship(3)).unwrap_err();
        assert_eq!(err.reason(), reason);
    }
}

#[test]
fn add_ship_requires_clearance_past_the_trailing_segment() {
    let mut board = Board::new();

    // East from x = 2 trails to x = 0, but the extent continues to x = -1.
    let err = board.add_ship(2, 0, Direction::East, ship(3)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::InsufficientSpace);

    let err = board.add_ship(9, 0, Direction::West, ship(3)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::InsufficientSpace);

    let err = board.add_ship(0, 2, Direction::North, ship(3)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::InsufficientSpace);

    let err = board.add_ship(0, 8, Direction::South, ship(3)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::InsufficientSpace);

    // One step further from the edge fits.
    board.add_ship(3, 0, Direction::East, ship(3)).unwrap();
    board.add_ship(0, 3, Direction::North, ship(3)).unwrap();
}

#[test]
fn hulls_flush_against_the_far_edge_are_still_rejected() {
    // West from x = 7 occupies 7, 8, 9; the extent reaches x = 10.
    let mut board = Board::new();
    let err = board.add_ship(7, 0, Direction::West, ship(3)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::InsufficientSpace);
    board.add_ship(6, 0, Direction::West, ship(3)).unwrap();
}

#[test]
fn length_ten_ships_have_no_legal_placement() {
    let board = Board::new();
    for x in 0..10 {
        for y in 0..10 {
            for &direction in Direction::ALL.iter() {
                assert_eq!(
                    board.check_placement(x, y, direction, &ship(10)),
                    Err(CannotPlaceReason::InsufficientSpace)
                );
            }
        }
    }
}

#[test]
fn add_ship_rejects_collisions() {
    let mut board = Board::new();
    board.add_ship(7, 7, Direction::North, ship(2)).unwrap();

    // East from (8, 7) runs over (7, 7).
    let err = board.add_ship(8, 7, Direction::East, ship(3)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
}

#[test]
fn collision_does_not_depend_on_placement_order() {
    // (4,4) south occupies (4,4),(4,5),(4,6); (3,5) west occupies
    // (3,5),(4,5),(5,5). They share (4,5).
    let mut board = Board::new();
    board.add_ship(4, 4, Direction::South, ship(3)).unwrap();
    let err = board.add_ship(3, 5, Direction::West, ship(3)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);

    let mut board = Board::new();
    board.add_ship(3, 5, Direction::West, ship(3)).unwrap();
    let err = board.add_ship(4, 4, Direction::South, ship(3)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
}

#[test]
fn place_error_hands_the_rejected_ship_back() {
    let mut board = Board::new();
    let err = board.add_ship(-1, 0, Direction::North, ship(3)).unwrap_err();
    assert_eq!(err.ship().length(), 3);

    // The same ship can be placed again with corrected input.
    let rejected = err.into_ship();
    board.add_ship(0, 0, Direction::South, rejected).unwrap();
    assert!(board.ship_at(0, 2).is_some());
}

#[test]
fn place_error_messages_name_the_violated_precondition() {
    let mut board = Board::new();
    let err = board.add_ship(-1, 0, Direction::North, ship(3)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not place ship: provided x coordinate was less than 0"
    );
    assert_eq!(
        err.reason().to_string(),
        "provided x coordinate was less than 0"
    );

    let err = board.add_ship(2, 0, Direction::East, ship(3)).unwrap_err();
    assert_eq!(
        err.reason().to_string(),
        "provided coordinates are invalid for the given ship"
    );
}

#[test]
fn attack_resolves_misses_hits_and_repeats() {
    let mut board = Board::new();
    let mut damaged = ship(3);
    damaged.hit(2).unwrap();
    // South from (4, 4): segments at (4,4), (4,5), (4,6).
    board.add_ship(4, 4, Direction::South, damaged).unwrap();

    assert_eq!(board.attack(3, 3), AttackOutcome::Miss);
    assert_eq!(board.attack(4, 4), AttackOutcome::DestroyedSegment);
    assert_eq!(board.attack(4, 5), AttackOutcome::DestroyedSegment);
    // Segment 2 was destroyed before the ship was placed.
    assert_eq!(board.attack(4, 6), AttackOutcome::AlreadyDestroyed);
    assert!(board.all_sunk());
}

#[test]
fn attacks_off_the_hull_never_mutate() {
    let mut board = Board::new();
    board.add_ship(7, 7, Direction::North, ship(3)).unwrap();

    assert_eq!(board.attack(0, 0), AttackOutcome::Miss);
    assert_eq!(board.attack(-3, 12), AttackOutcome::Miss);
    // The cell one past the trailing segment is open water.
    assert_eq!(board.attack(7, 4), AttackOutcome::Miss);
    assert!(!board.all_sunk());

    // Every segment is still intact.
    assert_eq!(board.attack(7, 7), AttackOutcome::DestroyedSegment);
    assert_eq!(board.attack(7, 6), AttackOutcome::DestroyedSegment);
    assert_eq!(board.attack(7, 5), AttackOutcome::DestroyedSegment);
}

#[test]
fn bombarding_one_ship_end_to_end() {
    let mut board = Board::new();
    // North from (7, 7): occupies (7,7), (7,6), (7,5).
    board.add_ship(7, 7, Direction::North, ship(3)).unwrap();

    assert_eq!(board.attack(7, 7), AttackOutcome::DestroyedSegment);
    assert_eq!(board.attack(7, 7), AttackOutcome::AlreadyDestroyed);
    assert_eq!(board.attack(7, 4), AttackOutcome::Miss);
    assert!(!board.all_sunk());
    assert_eq!(board.attack(7, 6), AttackOutcome::DestroyedSegment);
    assert_eq!(board.attack(7, 5), AttackOutcome::DestroyedSegment);
    assert!(board.all_sunk());
}

#[test]
fn all_sunk_is_vacuously_true_on_an_empty_board() {
    let mut board = Board::new();
    assert!(board.all_sunk());

    board.add_ship(0, 0, Direction::South, ship(2)).unwrap();
    assert!(!board.all_sunk());

    board.attack(0, 0);
    assert!(!board.all_sunk());
    board.attack(0, 1);
    assert!(board.all_sunk());
}

#[test]
fn sunk_ships_stay_on_the_board() {
    let mut board = Board::new();
    board.add_ship(0, 0, Direction::South, ship(2)).unwrap();
    board.attack(0, 0);
    board.attack(0, 1);
    assert!(board.all_sunk());

    // The wreck still blocks placement and still soaks attacks.
    let err = board.add_ship(0, 1, Direction::South, ship(2)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
    assert_eq!(board.attack(0, 0), AttackOutcome::AlreadyDestroyed);
}

#[test]
fn ship_at_and_cells_report_placement_geometry() {
    let mut board = Board::new();
    board.add_ship(5, 5, Direction::East, ship(3)).unwrap();

    let placement = board.ship_at(3, 5).unwrap();
    assert_eq!(placement.x(), 5);
    assert_eq!(placement.y(), 5);
    assert_eq!(placement.direction(), Direction::East);
    let cells: Vec<_> = placement.cells().collect();
    assert_eq!(cells, vec![(5, 5), (4, 5), (3, 5)]);
    assert_eq!(placement.segment_at(4, 5), Some(1));
    assert_eq!(placement.segment_at(6, 5), None);

    assert!(board.ship_at(6, 5).is_none());
    assert_eq!(board.ships().count(), 1);
}
