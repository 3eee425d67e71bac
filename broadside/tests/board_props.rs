use broadside::{AttackOutcome, Board, Direction, Ship};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::East),
        Just(Direction::South),
        Just(Direction::West),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn legal_placements_stay_in_bounds(
        x in 0..10i32,
        y in 0..10i32,
        dir in direction(),
        len in 1..=9i32,
    ) {
        let mut board = Board::new();
        if board.add_ship(x, y, dir, Ship::new(len).unwrap()).is_ok() {
            let placement = board.ships().next().unwrap();
            prop_assert_eq!(placement.cells().count(), len as usize);
            for (cx, cy) in placement.cells() {
                prop_assert!((0..10).contains(&cx));
                prop_assert!((0..10).contains(&cy));
            }
        }
    }

    #[test]
    fn every_hull_cell_hits_once_then_reports_already_destroyed(
        x in 0..10i32,
        y in 0..10i32,
        dir in direction(),
        len in 1..=9i32,
    ) {
        let mut board = Board::new();
        if board.add_ship(x, y, dir, Ship::new(len).unwrap()).is_ok() {
            let cells: Vec<_> = board.ships().next().unwrap().cells().collect();
            for &(cx, cy) in cells.iter() {
                prop_assert_eq!(board.attack(cx, cy), AttackOutcome::DestroyedSegment);
            }
            prop_assert!(board.all_sunk());
            for &(cx, cy) in cells.iter() {
                prop_assert_eq!(board.attack(cx, cy), AttackOutcome::AlreadyDestroyed);
            }
        }
    }

    #[test]
    fn collisions_do_not_depend_on_placement_order(
        ax in 0..10i32, ay in 0..10i32, adir in direction(), alen in 1..=9i32,
        bx in 0..10i32, by in 0..10i32, bdir in direction(), blen in 1..=9i32,
    ) {
        let empty = Board::new();
        prop_assume!(empty.check_placement(ax, ay, adir, &Ship::new(alen).unwrap()).is_ok());
        prop_assume!(empty.check_placement(bx, by, bdir, &Ship::new(blen).unwrap()).is_ok());

        let mut first = Board::new();
        first.add_ship(ax, ay, adir, Ship::new(alen).unwrap()).unwrap();
        let a_then_b = first.add_ship(bx, by, bdir, Ship::new(blen).unwrap()).is_ok();

        let mut second = Board::new();
        second.add_ship(bx, by, bdir, Ship::new(blen).unwrap()).unwrap();
        let b_then_a = second.add_ship(ax, ay, adir, Ship::new(alen).unwrap()).is_ok();

        prop_assert_eq!(a_then_b, b_then_a);
    }

    #[test]
    fn attacks_on_open_water_always_miss(x in -5..15i32, y in -5..15i32) {
        let mut board = Board::new();
        prop_assert_eq!(board.attack(x, y), AttackOutcome::Miss);
        prop_assert!(board.all_sunk());
    }

    #[test]
    fn hit_validation_ignores_prior_damage(
        len in 1..=10i32,
        segment in 0..10i32,
        bogus in 10..20i32,
    ) {
        let mut ship = Ship::new(len).unwrap();
        if segment < len {
            ship.hit(segment).unwrap();
        }
        prop_assert!(ship.hit(-1 - segment).is_err());
        prop_assert!(ship.hit(bogus).is_err());
        if segment < len {
            prop_assert_eq!(ship.hit(segment).unwrap(), AttackOutcome::AlreadyDestroyed);
        }
    }
}
