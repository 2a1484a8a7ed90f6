use std::collections::HashSet;

use engine::path::find_path;
use engine::{Direction, Position};
use proptest::prelude::*;

#[test]
fn start_equals_goal_yields_an_empty_path() {
    let path = find_path(Position::new(3, 3), Position::new(3, 3), &HashSet::new());
    assert!(path.is_empty());
}

#[test]
fn open_grid_path_starts_toward_the_goal() {
    let path = find_path(Position::new(0, 0), Position::new(4, 0), &HashSet::new());
    assert_eq!(path.len(), 4);
    assert_eq!(path[0], Direction::East);
}

#[test]
fn path_routes_around_a_wall() {
    // Vertical wall at x = 2 spanning y in 0..=2, endpoints on row 1.
    let blocked: HashSet<Position> = (0..=2).map(|y| Position::new(2, y)).collect();
    let path = find_path(Position::new(0, 1), Position::new(4, 1), &blocked);
    // Four cells of ground plus two down and two back up (or over the top).
    assert_eq!(path.len(), 8);
}

#[test]
fn sealed_goal_is_unreachable() {
    let mut blocked = HashSet::new();
    for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
        blocked.insert(Position::new(5 + dx, 5 + dy));
    }
    let path = find_path(Position::new(0, 0), Position::new(5, 5), &blocked);
    assert!(path.is_empty());
}

#[test]
fn path_steps_replay_to_the_goal() {
    let blocked: HashSet<Position> = (0..=2).map(|y| Position::new(2, y)).collect();
    let start = Position::new(0, 1);
    let goal = Position::new(4, 1);
    let mut pos = start;
    for direction in find_path(start, goal, &blocked) {
        pos = pos.step(direction);
        assert!(!blocked.contains(&pos), "stepped into a wall at {pos:?}");
    }
    assert_eq!(pos, goal);
}

proptest! {
    #[test]
    fn open_grid_path_length_is_the_manhattan_distance(
        sx in -8i32..8, sy in -8i32..8, gx in -8i32..8, gy in -8i32..8,
    ) {
        let start = Position::new(sx, sy);
        let goal = Position::new(gx, gy);
        let path = find_path(start, goal, &HashSet::new());
        prop_assert_eq!(path.len() as i32, start.manhattan(goal));
    }
}
