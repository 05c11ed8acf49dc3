use crate::grid::Grid;

use super::{Facing, Patrol, PatrolError};

fn patrol(text: &str) -> Patrol {
    Patrol::new(Grid::parse(text.as_bytes()).unwrap()).unwrap()
}

// The worked example from the day 6 puzzle statement.
const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

#[test]
fn facing_tables() {
    assert_eq!(Facing::Up.turn_right(), Facing::Right);
    assert_eq!(Facing::Right.turn_right(), Facing::Down);
    assert_eq!(Facing::Down.turn_right(), Facing::Left);
    assert_eq!(Facing::Left.turn_right(), Facing::Up);

    assert_eq!(Facing::Up.delta(), (-1, 0));
    assert_eq!(Facing::Right.delta(), (0, 1));
    assert_eq!(Facing::Down.delta(), (1, 0));
    assert_eq!(Facing::Left.delta(), (0, -1));

    for facing in [Facing::Up, Facing::Right, Facing::Down, Facing::Left] {
        assert_eq!(Facing::from_marker(facing.marker()), Some(facing));
    }
}

#[test]
fn guard_count_must_be_one() {
    let missing = Patrol::new(Grid::parse(b"..\n..").unwrap()).unwrap_err();
    assert!(matches!(missing, PatrolError::GuardCount(0)));

    let extra = Patrol::new(Grid::parse(b"^^\n..").unwrap()).unwrap_err();
    assert!(matches!(extra, PatrolError::GuardCount(2)));
}

#[test]
fn unknown_symbol_aborts() {
    let mut p = patrol(">?");
    assert!(matches!(
        p.traverse(),
        Err(PatrolError::UnknownSymbol { row: 0, column: 1, .. })
    ));
}

#[test]
fn open_room_exits_off_the_top() {
    let mut p = patrol(".....\n.....\n.....\n..^..\n.....");
    assert!(p.traverse().unwrap());
    // Every cell from the start to the top edge, inclusive.
    assert_eq!(p.count_unique_visited(), 4);
}

#[test]
fn rectangular_cycle_is_detected() {
    // Four obstructions steering the guard around a clockwise rectangle.
    // The guard re-enters its starting cell facing up on the first lap, so
    // the history check fires well before the iteration cap.
    let mut p = patrol(".#...\n....#\n.^...\n#....\n...#.");
    assert!(!p.traverse().unwrap());
}

#[test]
fn boxed_in_guard_cycles() {
    let mut p = patrol(".#.\n#^#\n.#.");
    assert!(!p.traverse().unwrap());
}

#[test]
fn example_unique_visited() {
    let mut p = patrol(EXAMPLE);
    assert!(p.traverse().unwrap());
    assert_eq!(p.count_unique_visited(), 41);
}

#[test]
fn example_loop_inducing_obstacles() {
    let mut p = patrol(EXAMPLE);
    assert_eq!(p.find_loop_inducing_obstacles().unwrap(), 6);

    // The search leaves everything reset, so the unobstructed traversal
    // reproduces part one.
    assert!(p.traverse().unwrap());
    assert_eq!(p.count_unique_visited(), 41);
}

#[test]
fn reset_is_idempotent() {
    let mut p = patrol(EXAMPLE);
    assert!(p.traverse().unwrap());

    p.reset();
    let once = p.to_string();
    assert_eq!(p.count_unique_visited(), 0);

    p.reset();
    assert_eq!(p.to_string(), once);
}

#[test]
fn traverse_after_reset_repeats() {
    let mut p = patrol(EXAMPLE);
    assert!(p.traverse().unwrap());
    let first = p.count_unique_visited();

    p.reset();
    assert!(p.traverse().unwrap());
    assert_eq!(p.count_unique_visited(), first);
}
