//! Validates the spatial primitives: cell bitsets, direction arithmetic,
//! and adjacency classification

use mazekit::spatial::{CellSet, Direction, Grid, Position};

#[test]
fn test_cell_set_operations() {
    let mut set = CellSet::new(4, 6);
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);

    set.insert(Position::new(0, 0));
    set.insert(Position::new(3, 5));
    set.insert(Position::new(3, 5));
    assert!(!set.is_empty());
    assert_eq!(set.count(), 2, "duplicate inserts must not inflate the count");
    assert!(set.contains(Position::new(0, 0)));
    assert!(set.contains(Position::new(3, 5)));
    assert!(!set.contains(Position::new(1, 1)));
}

#[test]
fn test_cell_set_ignores_out_of_range_positions() {
    let grid = Grid::open(4, 6);
    let mut set = CellSet::for_grid(&grid);
    set.insert(Position::new(0, 6));
    set.insert(Position::new(4, 0));
    assert!(set.is_empty(), "out-of-range inserts must be dropped");
    assert!(!set.contains(Position::new(0, 6)));
    assert!(!set.contains(Position::new(4, 0)));
}

#[test]
fn test_opposite_is_an_involution() {
    for dir in Direction::ALL {
        assert_eq!(dir.opposite().opposite(), dir);
        assert_ne!(dir.opposite(), dir);
    }
}

#[test]
fn test_apply_matches_offset_deltas() {
    let pos = Position::new(5, 5);
    for dir in Direction::ALL {
        let (dr, dc) = dir.offset();
        let stepped = dir.apply(pos);
        assert_eq!(
            stepped,
            Some(Position::new(
                pos.row.wrapping_add_signed(dr),
                pos.col.wrapping_add_signed(dc),
            ))
        );
        // Stepping back with the opposite direction returns to the origin
        assert_eq!(stepped.and_then(|next| dir.opposite().apply(next)), Some(pos));
    }
}

#[test]
fn test_apply_refuses_to_leave_coordinate_space() {
    let origin = Position::new(0, 0);
    assert_eq!(Direction::Up.apply(origin), None);
    assert_eq!(Direction::Left.apply(origin), None);
    assert_eq!(Direction::Down.apply(origin), Some(Position::new(1, 0)));
    assert_eq!(Direction::Right.apply(origin), Some(Position::new(0, 1)));
}

#[test]
fn test_between_classifies_unit_adjacency() {
    let center = Position::new(2, 2);
    assert_eq!(
        Direction::between(center, Position::new(1, 2)),
        Some(Direction::Up)
    );
    assert_eq!(
        Direction::between(center, Position::new(2, 3)),
        Some(Direction::Right)
    );
    assert_eq!(Direction::between(center, center), None);
    assert_eq!(Direction::between(center, Position::new(4, 2)), None);
}
